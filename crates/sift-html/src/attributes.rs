//! Attribute filtering for a single tag.
//!
//! Each raw attribute substring produced by the tag scanner is parsed into
//! an [`AttributeToken`], run through the blacklist, the configured list and
//! the script checks, and re-emitted as `name="value"` (or a bare boolean
//! name) when it survives.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use sift_common::decode_entities;

use crate::config::{is_blocked_attribute, is_boolean_attribute};
use crate::sanitizer::HtmlSanitizer;
use crate::validator::is_unsafe_attribute;

/// Whitespace on either side of the first `=`.
static EQUALS_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*=\s*").expect("static regex"));

/// Letters, digits, underscore, colon and hyphen, in any script.
static ATTRIBUTE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}_:-]+$").expect("static regex"));

/// One attribute, split out of its raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeToken {
    /// Lowercased, entity-decoded and trimmed name
    pub name: String,
    /// Everything after the first `=`, untouched; `None` for a bare name
    pub raw_value: Option<String>,
}

impl AttributeToken {
    /// Split a raw attribute substring into name and value.
    ///
    /// Returns `None` when the name is empty or contains anything besides
    /// letters, digits, `_`, `:` and `-`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = EQUALS_SPACING.replacen(raw.trim(), 1, "=");
        let (name, raw_value) = match normalized.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (normalized.as_ref(), None),
        };

        let name = decode_entities(name)
            .to_lowercase()
            .trim_matches(is_invisible)
            .to_string();

        if !ATTRIBUTE_NAME.is_match(&name) {
            return None;
        }

        Some(Self { name, raw_value })
    }

    /// Whether the source had an `=`.
    #[must_use]
    pub const fn has_explicit_value(&self) -> bool {
        self.raw_value.is_some()
    }
}

impl HtmlSanitizer {
    /// Filter the raw attribute substrings of one opening tag.
    ///
    /// Returns the attributes to re-emit, in source order, already rendered
    /// as `name="value"` or as a bare boolean name. Each attribute is judged
    /// on its own; siblings never influence each other.
    #[must_use]
    pub fn clean_attributes(&self, raw_attributes: &[&str]) -> Vec<String> {
        raw_attributes
            .iter()
            .filter_map(|raw| self.clean_attribute(raw))
            .collect()
    }

    fn clean_attribute(&self, raw: &str) -> Option<String> {
        let config = self.config();

        // STEP 1-2: split and validate the name.
        let Some(token) = AttributeToken::parse(raw) else {
            if !raw.trim().is_empty() {
                trace!("dropping attribute with irregular name: {raw:?}");
            }
            return None;
        };

        // STEP 3: blanket blacklist, including every event handler.
        if config.xss_auto_clean()
            && (is_blocked_attribute(&token.name) || token.name.starts_with("on"))
        {
            trace!("dropping blacklisted attribute '{}'", token.name);
            return None;
        }

        // STEP 4
        let allowed = config.permits_attribute(&token.name);

        // STEP 6: bare names only survive as boolean attributes.
        let Some(raw_value) = token.raw_value else {
            return (allowed && is_boolean_attribute(&token.name)).then_some(token.name);
        };

        // STEP 5
        let value = raw_value
            .trim()
            .trim_matches(['"', '\''])
            .trim();
        if value.is_empty() {
            return None;
        }

        let value = strip_slashes(
            &value
                .replace("&#", "")
                .replace(['\r', '\n', '"'], ""),
        );

        if is_unsafe_attribute(&token.name, &value) {
            trace!("dropping script-bearing attribute '{}'", token.name);
            return None;
        }

        allowed.then(|| format!("{}=\"{value}\"", token.name))
    }
}

/// Separators, control and format characters trimmed from names.
fn is_invisible(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(c, '\u{00AD}' | '\u{200B}'..='\u{200F}' | '\u{2060}'..='\u{2064}' | '\u{FEFF}')
}

/// Resolve backslash escapes: `\x` becomes `x` and a trailing lone
/// backslash is dropped.
fn strip_slashes(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        if let Some(escaped) = chars.next() {
            output.push(escaped);
        }
    }
    output
}
