//! Slide segmentation.
//!
//! A deck is one flat string; slides are the pieces between line-isolated `---` separators.
//! Everything here works on byte offsets into the caller's document and never allocates a copy
//! of a slide, so a [`LocatedSlide`] is only valid for the exact document it was computed from.

pub mod frontmatter;
pub mod outline;

pub use outline::{DEFAULT_PREVIEW_CHARS, SLIDE_PREVIEW_CHARS, list_slides, slide_preview};

use std::ops::Range;

use crate::editing::EditError;

/// Slide separator: a `---` line with a newline on both sides.
pub const SEPARATOR: &str = "\n---\n";

/// A slide found by [`locate`], borrowing from the document it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedSlide<'a> {
    /// 1-indexed slide number
    pub number: usize,
    /// Slide text, excluding separators
    pub text: &'a str,
    /// Byte range of `text` within the document
    pub range: Range<usize>,
}

/// Split a document into slide texts.
///
/// Empty slides (two separators back to back) are kept as empty strings so that slide numbers
/// stay stable. An empty document is a single empty slide.
pub fn split(document: &str) -> Vec<&str> {
    document.split(SEPARATOR).collect()
}

/// Inverse of [`split`].
pub fn join<S: AsRef<str>>(slides: &[S]) -> String {
    let total = slides.iter().map(|s| s.as_ref().len()).sum::<usize>()
        + SEPARATOR.len() * slides.len().saturating_sub(1);
    let mut out = String::with_capacity(total);
    for (i, slide) in slides.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(slide.as_ref());
    }
    out
}

pub fn slide_count(document: &str) -> usize {
    document.matches(SEPARATOR).count() + 1
}

/// Find slide `slide_number` (1-indexed) and its byte range in `document`.
pub fn locate(document: &str, slide_number: usize) -> Result<LocatedSlide<'_>, EditError> {
    let slides = split(document);
    if slide_number < 1 || slide_number > slides.len() {
        return Err(EditError::SlideNotFound {
            slide_number,
            slide_count: slides.len(),
        });
    }

    let start: usize = slides[..slide_number - 1]
        .iter()
        .map(|s| s.len() + SEPARATOR.len())
        .sum();
    let text = slides[slide_number - 1];

    Ok(LocatedSlide {
        number: slide_number,
        text,
        range: start..start + text.len(),
    })
}

/// Text of slide `slide_number` (1-indexed).
pub fn get_slide_content(document: &str, slide_number: usize) -> Result<&str, EditError> {
    locate(document, slide_number).map(|located| located.text)
}

/// Replace the bytes of `slide` inside `document` with `replacement`.
///
/// `slide` must have been located in this same `document`.
pub fn replace_slide(document: &str, slide: &LocatedSlide<'_>, replacement: &str) -> String {
    let mut out =
        String::with_capacity(document.len() - slide.range.len() + replacement.len());
    out.push_str(&document[..slide.range.start]);
    out.push_str(replacement);
    out.push_str(&document[slide.range.end..]);
    out
}
