//! Element text rewriting.
//!
//! Elements are addressed either by an `id` attribute on an HTML tag or by a markdown heading
//! anchor (`## Heading {#id}`). The tag form is tried first; headings are only considered when
//! no tagged element with that id exists on the slide.

use std::ops::Range;

use regex::{Captures, Regex};

/// Replace the inner text of every element on `slide` identified by `element_id`.
///
/// Returns the slide unchanged when nothing matches.
pub fn set_element_text(slide: &str, element_id: &str, new_text: &str) -> String {
    if let Some(updated) = replace_tagged(slide, element_id, new_text) {
        return updated;
    }

    log::debug!("No tag with id '{element_id}', trying heading anchors");
    if let Some(updated) = replace_heading(slide, element_id, new_text) {
        return updated;
    }

    log::debug!("No element '{element_id}' found on slide");
    slide.to_string()
}

/// Whether [`set_element_text`] would address anything on `slide`, even if the text it writes
/// is already there.
pub fn has_element(slide: &str, element_id: &str) -> bool {
    !tagged_inner_ranges(slide, element_id).is_empty()
        || heading_regex(element_id).is_match(slide)
}

/// `<tag ... id="element_id" ...>inner</tag>`; the id may be single, double or not quoted.
fn opening_tag_regex(element_id: &str) -> Regex {
    let id = regex::escape(element_id);
    let pattern = format!(
        r#"<(?P<tag>[A-Za-z][A-Za-z0-9-]*)[^>]*?\sid\s*=\s*(?:"{id}"[^>]*|'{id}'[^>]*|{id}(?:[\s/][^>]*)?)>"#
    );
    Regex::new(&pattern).expect("escaped element id always forms a valid pattern")
}

fn closing_tag_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"(?i)</{}\s*>", regex::escape(tag)))
        .expect("escaped tag name always forms a valid pattern")
}

fn heading_regex(element_id: &str) -> Regex {
    let pattern = format!(
        r"(?m)^(?P<hashes>#{{1,6}}[ \t]+)(?P<text>.*?)(?P<anchor>[ \t]*\{{#[ \t]*{}[ \t]*\}})",
        regex::escape(element_id)
    );
    Regex::new(&pattern).expect("escaped element id always forms a valid pattern")
}

/// Byte ranges of the inner text of each tagged element with this id, in order and
/// non-overlapping.
fn tagged_inner_ranges(slide: &str, element_id: &str) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for caps in opening_tag_regex(element_id).captures_iter(slide) {
        let Some(open) = caps.get(0) else {
            continue;
        };
        if ranges.last().is_some_and(|last| open.start() < last.end) {
            // Opening tag sits inside an element already matched
            continue;
        }
        if open.as_str().trim_end_matches('>').trim_end().ends_with('/') {
            // Self-closing: no inner text
            continue;
        }

        let inner_start = open.end();
        let Some(close) = closing_tag_regex(&caps["tag"]).find(&slide[inner_start..]) else {
            continue;
        };
        ranges.push(inner_start..inner_start + close.start());
    }

    ranges
}

fn replace_tagged(slide: &str, element_id: &str, new_text: &str) -> Option<String> {
    let ranges = tagged_inner_ranges(slide, element_id);
    if ranges.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(slide.len() + new_text.len() * ranges.len());
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&slide[cursor..range.start]);
        out.push_str(new_text);
        cursor = range.end;
    }
    out.push_str(&slide[cursor..]);
    Some(out)
}

fn replace_heading(slide: &str, element_id: &str, new_text: &str) -> Option<String> {
    let heading = heading_regex(element_id);
    if !heading.is_match(slide) {
        return None;
    }

    let updated = heading.replace_all(slide, |caps: &Captures<'_>| {
        format!("{}{new_text}{}", &caps["hashes"], &caps["anchor"])
    });
    Some(updated.into_owned())
}
