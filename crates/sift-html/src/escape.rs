//! Attribute value pre-escaping.
//!
//! The tag scanner ends a tag at the first `>`. A quoted value such as
//! `title="a>b"` would otherwise end the tag early and leak the rest of it
//! into the text. Before scanning, every quoted value that looks like it sits
//! inside a tag has its `<`, `>` and `"` replaced by references, and its CSS
//! expressions stripped.

use std::sync::LazyLock;

use regex::Regex;

use crate::css::strip_css_expressions;

/// `<`, anything but `>`, then `=` and an opening quote.
static VALUE_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<[^>]*?=\s*?(["'])"#).expect("static regex"));

/// A `"` that closes a value: followed by `/>`, `>`, whitespace or the end.
static DOUBLE_QUOTE_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""\s*/\s*>|"\s*>|"\s+|"$"#).expect("static regex"));

/// Same as [`DOUBLE_QUOTE_CLOSER`] for `'`.
static SINGLE_QUOTE_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'\s*/\s*>|'\s*>|'\s+|'$").expect("static regex"));

/// Escape the markup characters inside every quoted attribute value.
///
/// A value with no recognizable closing quote runs to the end of the input,
/// and a closing quote is appended for it.
#[must_use]
pub fn escape_attribute_values(source: &str) -> String {
    let mut filtered = String::with_capacity(source.len());
    let mut remainder = source;

    while let Some(captures) = VALUE_OPENER.captures(remainder) {
        let (Some(opener), Some(quote)) = (captures.get(0), captures.get(1)) else {
            break;
        };
        let quote = quote.as_str();
        let value_start = opener.end();

        let closer = if quote == "\"" {
            &DOUBLE_QUOTE_CLOSER
        } else {
            &SINGLE_QUOTE_CLOSER
        };
        let value_end = closer
            .find(&remainder[value_start..])
            .map_or(remainder.len(), |found| value_start + found.start());

        let value = escape_markup(&remainder[value_start..value_end]);

        filtered.push_str(&remainder[..value_start]);
        filtered.push_str(&strip_css_expressions(&value));
        filtered.push_str(quote);

        // Skip the closing quote (already emitted above)
        remainder = remainder.get(value_end + 1..).unwrap_or("");
    }

    filtered.push_str(remainder);
    filtered
}

fn escape_markup(value: &str) -> String {
    value
        .replace('<', "&lt;")
        .replace('"', "&quot;")
        .replace('>', "&gt;")
}
