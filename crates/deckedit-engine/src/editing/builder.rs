use crate::editing::Patch;
use crate::models::NewSlide;
use crate::parsing::{self, SEPARATOR};

/// Render the text of a new slide.
///
/// Parts appear in a fixed order, each followed by a blank line: frontmatter (only for a
/// non-default layout or a background), `# title`, then the raw content.
pub fn build_slide(slide: &NewSlide) -> String {
    let mut parts: Vec<String> = Vec::new();

    let layout = slide.custom_layout();
    let background = slide.background();
    if layout.is_some() || background.is_some() {
        parts.push("---".to_string());
        if let Some(layout) = layout {
            parts.push(format!("layout: {layout}"));
        }
        if let Some(background) = background {
            parts.push(format!("background: \"{background}\""));
        }
        parts.push("---".to_string());
        parts.push(String::new());
    }

    if let Some(title) = slide.title() {
        parts.push(format!("# {title}"));
        parts.push(String::new());
    }

    if let Some(content) = slide.content() {
        parts.push(content.to_string());
    }

    parts.join("\n")
}

/// Insert `slide` so that it becomes slide `position`, or append it.
pub fn insert_slide(document: &str, position: Option<usize>, slide: &NewSlide) -> Patch {
    let new_slide = build_slide(slide);
    let slides = parsing::split(document);

    match position {
        Some(position) if position <= slides.len() => {
            let position = position.max(1);
            insert_at(&slides, position, &new_slide)
        }
        _ => append(document, &new_slide),
    }
}

fn insert_at(slides: &[&str], position: usize, new_slide: &str) -> Patch {
    let mut parts: Vec<&str> = Vec::with_capacity(slides.len() + 1);
    parts.extend_from_slice(&slides[..position - 1]);
    parts.push(new_slide);
    parts.extend_from_slice(&slides[position - 1..]);

    let start: usize = slides[..position - 1]
        .iter()
        .map(|s| s.len() + SEPARATOR.len())
        .sum();

    log::debug!("Inserted slide at position {position}");
    Patch {
        document: parsing::join(&parts),
        changed: Some(start..start + new_slide.len()),
    }
}

fn append(document: &str, new_slide: &str) -> Patch {
    let trimmed = document.trim_end();
    if trimmed.is_empty() {
        return Patch {
            document: new_slide.to_string(),
            changed: Some(0..new_slide.len()),
        };
    }

    let ends_with_separator = trimmed.lines().last() == Some("---");
    let glue = if ends_with_separator {
        "\n\n"
    } else {
        "\n\n---\n\n"
    };

    let document = format!("{trimmed}{glue}{new_slide}");
    let start = segment_start(&document, trimmed.len() + glue.len());
    let end = document.len();
    Patch {
        document,
        changed: Some(start..end),
    }
}

/// Start of the slide that `offset` falls in, as [`parsing::split`] sees it.
///
/// Glue newlines after a separator belong to the next slide, so this can lie before `offset`.
fn segment_start(document: &str, offset: usize) -> usize {
    let mut start = 0;
    for slide in parsing::split(document) {
        let end = start + slide.len();
        if end >= offset {
            return start;
        }
        start = end + SEPARATOR.len();
    }
    start
}
