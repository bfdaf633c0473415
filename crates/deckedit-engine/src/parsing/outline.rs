use std::sync::OnceLock;

use regex::Regex;

use crate::editing::EditError;
use crate::models::SlideSummary;
use crate::parsing::{locate, split};

/// Preview length used by deck listings
pub const DEFAULT_PREVIEW_CHARS: usize = 100;
/// Preview length used when showing a single slide
pub const SLIDE_PREVIEW_CHARS: usize = 200;

const UNTITLED: &str = "Untitled";

fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"^#{1,6}(?:[ \t]+(.*))?$").expect("Invalid heading regex"))
}

/// Summarise every slide of the deck. An empty document has no slides.
pub fn list_slides(document: &str, preview_chars: usize) -> Vec<SlideSummary> {
    if document.is_empty() {
        return Vec::new();
    }

    split(document)
        .into_iter()
        .enumerate()
        .map(|(i, slide)| SlideSummary {
            number: i + 1,
            title: slide_title(slide),
            preview: truncate(slide, preview_chars),
        })
        .collect()
}

/// Leading characters of slide `slide_number`.
pub fn slide_preview(
    document: &str,
    slide_number: usize,
    preview_chars: usize,
) -> Result<String, EditError> {
    let located = locate(document, slide_number)?;
    Ok(truncate(located.text, preview_chars))
}

/// Text of the first ATX heading in the slide, with any `{#id}` anchor removed.
pub fn slide_title(slide: &str) -> String {
    slide
        .trim()
        .lines()
        .find_map(|line| {
            let text = heading_regex().captures(line.trim_end())?.get(1)?.as_str();
            Some(strip_anchor(text).trim()).filter(|title| !title.is_empty())
        })
        .map_or_else(|| UNTITLED.to_string(), str::to_string)
}

fn strip_anchor(text: &str) -> &str {
    match text.rfind("{#") {
        Some(start) if text.ends_with('}') => &text[..start],
        _ => text,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::SAMPLE_DECK;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_empty_document_has_no_slides() {
        assert!(list_slides("", DEFAULT_PREVIEW_CHARS).is_empty());
    }

    #[test]
    fn test_list_sample_deck() {
        let titles: Vec<String> = list_slides(SAMPLE_DECK, DEFAULT_PREVIEW_CHARS)
            .into_iter()
            .map(|s| s.title)
            .collect();

        assert_eq!(
            titles,
            vec!["Welcome to My Presentation", "Second Slide", "Third Slide"]
        );
    }

    #[test]
    fn test_numbers_are_one_based() {
        let summaries = list_slides("# A\n---\n\n---\n# C", DEFAULT_PREVIEW_CHARS);

        let numbers: Vec<usize> = summaries.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(summaries[1].title, "Untitled");
        assert_eq!(summaries[1].preview, "");
    }

    #[rstest]
    #[case::h1("# Hello", "Hello")]
    #[case::h2_after_text("intro\n\n## Section", "Section")]
    #[case::anchor("# Hello {#greeting}", "Hello")]
    #[case::frontmatter_first("---\nlayout: center\n---\n\n# Centered", "Centered")]
    #[case::style_selector_is_not_heading("<style>\n#x { color: red; }\n</style>", "Untitled")]
    #[case::hashtag_is_not_heading("#rustlang is fun", "Untitled")]
    #[case::no_heading("just text", "Untitled")]
    #[case::bare_hashes_skipped("#\n# Real", "Real")]
    #[case::anchor_only_skipped("## {#empty}\n## Named", "Named")]
    fn test_slide_title(#[case] slide: &str, #[case] expected: &str) {
        assert_eq!(slide_title(slide), expected);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let slide = "é".repeat(150);

        let summaries = list_slides(&slide, DEFAULT_PREVIEW_CHARS);

        assert_eq!(summaries[0].preview.chars().count(), 103);
        assert!(summaries[0].preview.ends_with("..."));
    }

    #[test]
    fn test_short_preview_is_not_marked() {
        let summaries = list_slides("# Short", DEFAULT_PREVIEW_CHARS);
        assert_eq!(summaries[0].preview, "# Short");
    }

    #[test]
    fn test_slide_preview() {
        assert_eq!(
            slide_preview("# A\n---\n# B", 2, SLIDE_PREVIEW_CHARS).unwrap(),
            "# B"
        );
        assert!(matches!(
            slide_preview("# A\n---\n# B", 5, SLIDE_PREVIEW_CHARS),
            Err(EditError::SlideNotFound { .. })
        ));
    }
}
