//! Tag scanning.
//!
//! This is deliberately not an HTML tokenizer. It splits the input at `<`
//! and the next `>`, reads a name up to the first space, and cuts attributes
//! with a small set of lookahead rules. Which payloads get neutralized
//! depends on those exact rules, so they must not be "improved" towards a
//! real grammar.
//!
//! Opening and closing tags are judged independently. Nothing pairs them up,
//! so a policy can keep `</b>` while removing `<b>` and leave the output
//! unbalanced.

use log::trace;

use crate::config::{is_blocked_tag, is_void_element};
use crate::escape::escape_attribute_values;
use crate::sanitizer::HtmlSanitizer;

/// One bracketed span, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag<'a> {
    /// Tag name as written (case preserved)
    pub name: &'a str,
    /// Whether the span started with `/`
    pub is_closing_tag: bool,
    /// Unparsed attribute substrings in source order (empty for closing tags)
    pub raw_attributes: Vec<&'a str>,
}

impl<'a> ParsedTag<'a> {
    /// Parse the text between `<` and `>`.
    ///
    /// Returns `None` when the name is not a letter followed by letters and
    /// digits, in which case the whole span must be dropped.
    #[must_use]
    pub fn parse(content: &'a str) -> Option<Self> {
        let head = content.split(' ').next().unwrap_or_default();
        let (name, is_closing_tag) = match head.strip_prefix('/') {
            Some(name) => (name, true),
            None => (head, false),
        };

        if !is_regular_tag_name(name) {
            return None;
        }

        let raw_attributes = if is_closing_tag {
            Vec::new()
        } else {
            split_attributes(content)
        };

        Some(Self {
            name,
            is_closing_tag,
            raw_attributes,
        })
    }

    /// Whether this element is always emitted self-closing.
    #[must_use]
    pub fn is_void_element(&self) -> bool {
        is_void_element(self.name)
    }
}

/// `[A-Za-z][A-Za-z0-9]*`
fn is_regular_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Cut the raw attribute substrings out of a tag's content.
///
/// Starting after each space:
/// - no `=` before the next space (or no `=` at all): the text up to the
///   next space is one attribute;
/// - otherwise, if a `"`-quoted value follows the `=` and is closed, the
///   attribute runs through the closing quote;
/// - otherwise it runs up to the next space.
///
/// Consecutive spaces yield empty substrings, which the attribute filter
/// discards.
#[must_use]
pub fn split_attributes(content: &str) -> Vec<&str> {
    let mut attributes = Vec::new();
    let mut tag_left = content;

    while let Some(space) = tag_left.find(' ') {
        let from_space = &tag_left[space + 1..];
        let attribute = next_attribute(from_space);
        attributes.push(attribute);
        tag_left = &from_space[attribute.len()..];
    }

    attributes
}

fn next_attribute(from_space: &str) -> &str {
    let next_space = from_space.find(' ');
    let up_to_space = &from_space[..next_space.unwrap_or(from_space.len())];

    match from_space.find('=') {
        Some(equals) if next_space.is_none_or(|space| equals < space) => {
            quoted_attribute(from_space, equals).unwrap_or(up_to_space)
        }
        _ => up_to_space,
    }
}

/// `name="value"` through the closing quote, if the value is quoted and
/// closed.
fn quoted_attribute(from_space: &str, equals: usize) -> Option<&str> {
    let after_equals = &from_space[equals + 1..];
    let open = equals + 1 + (after_equals.len() - after_equals.trim_start().len());

    if !from_space[open..].starts_with('"') {
        return None;
    }
    let close = open + 1 + from_space[open + 1..].find('"')?;

    Some(&from_space[..=close])
}

impl HtmlSanitizer {
    /// Run a single scanning pass.
    ///
    /// Text between tags is copied verbatim. Every `<...>` span is dropped,
    /// or rebuilt from its name and surviving attributes. A `<` with no `>`
    /// after it ends scanning, and the rest is copied as text.
    #[must_use]
    pub fn clean_tags(&self, source: &str) -> String {
        let escaped = escape_attribute_values(source);
        let mut output = String::with_capacity(escaped.len());
        let mut rest = escaped.as_str();

        while let Some(open) = rest.find('<') {
            let Some(close) = rest[open + 1..].find('>').map(|found| open + 1 + found) else {
                break;
            };

            output.push_str(&rest[..open]);
            self.emit_tag(&rest[open + 1..close], &mut output);
            rest = &rest[close + 1..];
        }

        output.push_str(rest);
        output
    }

    fn emit_tag(&self, content: &str, output: &mut String) {
        let config = self.config();

        let Some(tag) = ParsedTag::parse(content) else {
            trace!("dropping span with irregular tag name: <{content}>");
            return;
        };

        if config.xss_auto_clean() && is_blocked_tag(tag.name) {
            trace!("dropping blacklisted tag '{}'", tag.name);
            return;
        }

        if !config.permits_tag(tag.name) {
            trace!("dropping disallowed tag '{}'", tag.name);
            return;
        }

        if tag.is_closing_tag {
            output.push_str("</");
            output.push_str(tag.name);
            output.push('>');
            return;
        }

        output.push('<');
        output.push_str(tag.name);
        for attribute in self.clean_attributes(&tag.raw_attributes) {
            output.push(' ');
            output.push_str(&attribute);
        }
        output.push_str(if tag.is_void_element() { " />" } else { ">" });
    }
}
