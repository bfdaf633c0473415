use crate::parsing::frontmatter;

/// Set the `background` key, always written as a double-quoted string.
pub fn set_background(slide: &str, background: &str) -> String {
    set_key(slide, "background", &format!("\"{background}\""))
}

/// Set `key` to the already-rendered `value` in the slide's frontmatter.
///
/// An existing key line is rewritten in place; a missing key is added as the last entry; a
/// slide without frontmatter gets a new block followed by a blank line.
pub fn set_key(slide: &str, key: &str, value: &str) -> String {
    let line = format!("{key}: {value}");

    let Some(fm) = frontmatter::find(slide) else {
        return format!("---\n{line}\n---\n\n{slide}");
    };

    if let Some(existing) = fm.key_line(key) {
        return format!("{}{line}{}", &slide[..existing.start], &slide[existing.end..]);
    }

    let body = fm.body.trim_end();
    let head = &slide[..fm.body_range.start];
    let tail = &slide[fm.closing_start..];
    if body.is_empty() {
        format!("{head}{line}\n{tail}")
    } else {
        format!("{head}{body}\n{line}\n{tail}")
    }
}
