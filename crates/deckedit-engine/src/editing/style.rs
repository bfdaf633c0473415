//! Scoped style rules.
//!
//! Each slide may carry one `<style>` block. Setting a property for an element walks a fixed
//! ladder: update the declaration in the element's rule, else add the declaration to that rule,
//! else add a rule to the block, else append a new block to the slide. Because every rung looks
//! for what the previous call would have written, repeating a call with the same value leaves
//! the slide untouched.

use std::sync::OnceLock;

use regex::Regex;

fn style_block_regex() -> &'static Regex {
    static STYLE_BLOCK: OnceLock<Regex> = OnceLock::new();
    STYLE_BLOCK.get_or_init(|| {
        Regex::new(r"(?s)<style(?:\s[^>]*)?>(?P<css>.*?)</style>").expect("Invalid style regex")
    })
}

/// Set `property: value` on the `#element_id` rule of the slide's style block.
pub fn set_element_style(slide: &str, element_id: &str, property: &str, value: &str) -> String {
    let Some(css) = style_block_regex()
        .captures(slide)
        .and_then(|caps| caps.name("css"))
    else {
        log::debug!("No style block on slide, appending one for #{element_id}");
        return format!(
            "{}\n\n<style>\n{}\n</style>",
            slide.trim_end(),
            new_rule(element_id, property, value)
        );
    };

    let updated_css = set_rule_property(css.as_str(), element_id, property, value);
    let mut out = String::with_capacity(slide.len() + updated_css.len() - css.len());
    out.push_str(&slide[..css.start()]);
    out.push_str(&updated_css);
    out.push_str(&slide[css.end()..]);
    out
}

/// Apply the ladder to the contents of a style block.
fn set_rule_property(css: &str, element_id: &str, property: &str, value: &str) -> String {
    let rule = Regex::new(&format!(
        r"#{}\s*\{{(?P<body>[^}}]*)\}}",
        regex::escape(element_id)
    ))
    .expect("escaped element id always forms a valid pattern");

    let Some(body) = rule.captures(css).and_then(|caps| caps.name("body")) else {
        let existing = css.trim_end();
        let separator = if existing.trim_start().is_empty() {
            "\n"
        } else {
            "\n\n"
        };
        return format!(
            "{existing}{separator}{}\n",
            new_rule(element_id, property, value)
        );
    };

    let updated_body = set_declaration(body.as_str(), property, value);
    format!(
        "{}{}{}",
        &css[..body.start()],
        updated_body,
        &css[body.end()..]
    )
}

/// Update the first declaration of `property` in a rule body, or append one.
fn set_declaration(body: &str, property: &str, value: &str) -> String {
    let declaration = Regex::new(&format!(
        r"(?:^|[;\s]){}\s*:\s*(?P<value>[^;]*)",
        regex::escape(property)
    ))
    .expect("escaped property always forms a valid pattern");

    if let Some(current) = declaration
        .captures(body)
        .and_then(|caps| caps.name("value"))
    {
        let end = current.start() + current.as_str().trim_end().len();
        return format!("{}{value}{}", &body[..current.start()], &body[end..]);
    }

    let existing = body.trim_end();
    if existing.trim_start().is_empty() {
        return format!("\n  {property}: {value};\n");
    }
    let terminator = if existing.ends_with(';') { "" } else { ";" };
    format!("{existing}{terminator}\n  {property}: {value};\n")
}

fn new_rule(element_id: &str, property: &str, value: &str) -> String {
    format!("#{element_id} {{\n  {property}: {value};\n}}")
}
