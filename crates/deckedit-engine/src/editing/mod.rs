/*!
 * # Slide Editing
 *
 * Document-level edit operations for a Slidev-style deck. Every operation takes the whole
 * document by reference and returns a [`Patch`] holding a brand new document; nothing is
 * mutated in place and no state survives between calls.
 *
 * ## Flow
 *
 * 1. [`crate::parsing::locate`] finds the target slide and its byte range
 * 2. A slide-level rewriter produces the new slide text:
 *    - **`element`**: inner text of `<tag id="...">` elements or `# Heading {#id}` headings
 *    - **`style`**: the slide's `<style>` block (find rule, else find block, else create both)
 *    - **`frontmatter`**: the leading `---` key-value block
 * 3. The new slide text is spliced back over the old byte range
 *
 * Slide insertion (**`builder`**) is the exception: it changes the numbering of every later
 * slide, so it rebuilds the document from the split slide list instead of splicing.
 *
 * A rewrite whose pattern does not match is not an error. The returned [`Patch`] reports
 * whether anything changed so callers can surface the no-op themselves.
 *
 * ```rust
 * use deckedit_engine::editing;
 *
 * let deck = "# A\n<p id=\"x\">old</p>\n---\n# B";
 * let patch = editing::update_element_content(deck, 1, "x", "new").unwrap();
 * assert!(patch.is_changed());
 * assert_eq!(patch.document, "# A\n<p id=\"x\">new</p>\n---\n# B");
 * ```
 */

pub mod builder;
pub mod commands;
pub mod element;
pub mod frontmatter;
pub mod patch;
pub mod style;

pub use commands::{Cmd, CmdOutput};
pub use patch::Patch;

use crate::models::NewSlide;
use crate::parsing::{self, LocatedSlide};

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Slide {slide_number} not found (deck has {slide_count} slides)")]
    SlideNotFound {
        slide_number: usize,
        slide_count: usize,
    },
    #[error("Element '{element_id}' not found on slide {slide_number}")]
    ElementNotFound {
        slide_number: usize,
        element_id: String,
    },
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Replace the inner text of element `element_id` on slide `slide_number`.
pub fn update_element_content(
    document: &str,
    slide_number: usize,
    element_id: &str,
    new_content: &str,
) -> Result<Patch, EditError> {
    rewrite_slide(document, slide_number, |slide| {
        element::set_element_text(slide, element_id, new_content)
    })
}

/// Set the CSS `color` of element `element_id` on slide `slide_number`.
pub fn update_element_color(
    document: &str,
    slide_number: usize,
    element_id: &str,
    color: &str,
) -> Result<Patch, EditError> {
    update_element_style(document, slide_number, element_id, "color", color)
}

/// Set an arbitrary CSS property of element `element_id` on slide `slide_number`.
pub fn update_element_style(
    document: &str,
    slide_number: usize,
    element_id: &str,
    property: &str,
    value: &str,
) -> Result<Patch, EditError> {
    rewrite_slide(document, slide_number, |slide| {
        style::set_element_style(slide, element_id, property, value)
    })
}

/// Set the frontmatter `background` of slide `slide_number`.
pub fn update_slide_background(
    document: &str,
    slide_number: usize,
    background: &str,
) -> Result<Patch, EditError> {
    rewrite_slide(document, slide_number, |slide| {
        frontmatter::set_background(slide, background)
    })
}

/// Insert a new slide before `position` (1-indexed), or append it when `position` is `None`
/// or past the end. A position of 0 is treated as 1.
pub fn create_new_slide(document: &str, position: Option<usize>, slide: &NewSlide) -> Patch {
    builder::insert_slide(document, position, slide)
}

fn rewrite_slide(
    document: &str,
    slide_number: usize,
    rewrite: impl FnOnce(&str) -> String,
) -> Result<Patch, EditError> {
    let located: LocatedSlide<'_> = parsing::locate(document, slide_number)?;
    let updated = rewrite(located.text);

    if updated == located.text {
        log::debug!("Slide {slide_number} unchanged after rewrite");
        return Ok(Patch::unchanged(document));
    }

    let start = located.range.start;
    Ok(Patch {
        document: parsing::replace_slide(document, &located, &updated),
        changed: Some(start..start + updated.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::split;
    use pretty_assertions::assert_eq;

    const TWO_SLIDES: &str = "# A\n<p id=\"x\">old</p>\n---\n# B\n<p id=\"y\">z</p>";

    #[test]
    fn test_update_element_content_targets_one_slide() {
        let patch = update_element_content(TWO_SLIDES, 1, "x", "new").unwrap();

        let slides = split(&patch.document);
        assert_eq!(slides[0], "# A\n<p id=\"x\">new</p>");
        assert_eq!(slides[1], "# B\n<p id=\"y\">z</p>");
        assert_eq!(patch.changed, Some(0..slides[0].len()));
    }

    #[test]
    fn test_update_element_content_on_wrong_slide_is_noop() {
        let patch = update_element_content(TWO_SLIDES, 2, "x", "new").unwrap();

        assert!(!patch.is_changed());
        assert_eq!(patch.document, TWO_SLIDES);
    }

    #[test]
    fn test_missing_slide_is_reported() {
        let err = update_element_color(TWO_SLIDES, 5, "x", "red").unwrap_err();
        assert_eq!(err.to_string(), "Slide 5 not found (deck has 2 slides)");

        assert!(update_slide_background(TWO_SLIDES, 0, "red").is_err());
        assert!(update_element_content(TWO_SLIDES, 3, "x", "t").is_err());
    }

    #[test]
    fn test_changed_range_points_at_new_slide_text() {
        let patch = update_element_color(TWO_SLIDES, 2, "y", "#ff0000").unwrap();

        let range = patch.changed.clone().unwrap();
        assert_eq!(&patch.document[range], split(&patch.document)[1]);
    }

    #[test]
    fn test_update_element_color_is_idempotent() {
        let once = update_element_color(TWO_SLIDES, 1, "x", "#ff0000").unwrap();
        let twice = update_element_color(&once.document, 1, "x", "#ff0000").unwrap();

        assert!(once.is_changed());
        assert!(!twice.is_changed());
        assert_eq!(once.document, twice.document);
    }

    #[test]
    fn test_update_slide_background_extends_frontmatter() {
        let document = "---\nlayout: center\n---";

        let patch = update_slide_background(document, 1, "#000").unwrap();

        assert_eq!(
            patch.document,
            "---\nlayout: center\nbackground: \"#000\"\n---"
        );
    }
}
