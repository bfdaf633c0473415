use std::ops::Range;

const DELIMITER: &str = "---";

/// Leading `---` delimited key-value block of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Text between the delimiter lines, without the newline before the closing delimiter
    pub body: &'a str,
    /// Byte range of `body` within the slide
    pub body_range: Range<usize>,
    /// Byte offset of the closing `---` line
    pub closing_start: usize,
}

impl<'a> Frontmatter<'a> {
    /// Key-value lines of the block, in order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.body.lines().filter_map(split_entry)
    }

    /// Byte range (relative to the slide) of the first line declaring `key`.
    pub fn key_line(&self, key: &str) -> Option<Range<usize>> {
        let mut offset = self.body_range.start;
        for line in self.body.split_inclusive('\n') {
            let content = line.trim_end_matches(['\n', '\r']);
            if let Some((k, _)) = split_entry(content)
                && k == key
            {
                return Some(offset..offset + content.len());
            }
            offset += line.len();
        }
        None
    }
}

/// Find the frontmatter block at the very start of `slide`.
///
/// The opening delimiter must be the first line and the closing delimiter a later line that is
/// exactly `---`. Anything else (including an unterminated block) is not frontmatter.
pub fn find(slide: &str) -> Option<Frontmatter<'_>> {
    let rest = slide.strip_prefix(DELIMITER)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
    let body_start = slide.len() - rest.len();

    let mut offset = body_start;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            let body_end = if offset > body_start {
                // Drop the line break that ends the last key line
                slide[..offset]
                    .strip_suffix("\r\n")
                    .or_else(|| slide[..offset].strip_suffix('\n'))
                    .map_or(offset, str::len)
            } else {
                offset
            };
            return Some(Frontmatter {
                body: &slide[body_start..body_end],
                body_range: body_start..body_end,
                closing_start: offset,
            });
        }
        offset += line.len();
    }

    None
}

/// Value of `key` in the slide's frontmatter, with surrounding quotes removed.
pub fn value<'a>(slide: &'a str, key: &str) -> Option<&'a str> {
    find(slide)?
        .entries()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| unquote(v))
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim_end();
    if key.is_empty() || key.starts_with(char::is_whitespace) {
        return None;
    }
    Some((key, value.trim()))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}
