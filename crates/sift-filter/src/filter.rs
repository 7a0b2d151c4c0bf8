//! Type-directed dispatch.

use std::borrow::Cow;

use log::trace;
use serde_json::{Map, Value};
use sift_common::decode_entities;
use sift_common::warning::warn_once;
use sift_html::{HtmlSanitizer, SanitizerConfig};

use crate::coerce;
use crate::kind::FilterKind;

/// Cleans untrusted values according to a requested type name.
///
/// Arrays and objects are cleaned element by element with the same type,
/// keeping keys and order. Strings headed for `STRING`/`HTML` go through the
/// [`HtmlSanitizer`] built from the configuration.
#[derive(Debug, Clone, Default)]
pub struct InputFilter {
    html: HtmlSanitizer,
}

impl InputFilter {
    /// Create a filter with the given HTML policy.
    #[must_use]
    pub const fn new(config: SanitizerConfig) -> Self {
        Self {
            html: HtmlSanitizer::new(config),
        }
    }

    /// The HTML engine used for `STRING` and `HTML`.
    #[must_use]
    pub const fn html(&self) -> &HtmlSanitizer {
        &self.html
    }

    /// Clean `value` as the type named `kind` (case-insensitive).
    ///
    /// An unrecognized name sanitizes non-empty strings like `STRING` and
    /// returns every other scalar unchanged.
    #[must_use]
    pub fn clean(&self, value: &Value, kind: &str) -> Value {
        if let Some(kind) = FilterKind::from_name(kind) {
            return self.clean_as(value, kind);
        }

        warn_once(
            "filter",
            &format!("unknown filter type '{kind}', sanitizing strings as STRING"),
        );
        self.clean_unrecognized(value)
    }

    /// Clean a string as the type named `kind`.
    #[must_use]
    pub fn clean_str(&self, source: &str, kind: &str) -> Value {
        self.clean(&Value::from(source), kind)
    }

    /// Clean `value` as `kind`.
    #[must_use]
    pub fn clean_as(&self, value: &Value, kind: FilterKind) -> Value {
        match value {
            Value::Array(items) if kind.recurses() => {
                Value::Array(items.iter().map(|item| self.clean_as(item, kind)).collect())
            }
            Value::Object(fields) if kind.recurses() => {
                Value::Object(map_fields(fields, |item| self.clean_as(item, kind)))
            }
            _ => self.clean_leaf(value, kind),
        }
    }

    fn clean_leaf(&self, value: &Value, kind: FilterKind) -> Value {
        let source = scalar_text(value);
        trace!("cleaning value as {kind}");

        match kind {
            FilterKind::Raw => value.clone(),
            FilterKind::Array => to_array(value),
            FilterKind::Int => Value::from(coerce::to_int(&source)),
            FilterKind::Uint => Value::from(coerce::to_uint(&source)),
            FilterKind::Float => Value::from(coerce::to_float(&source)),
            FilterKind::Boolean => Value::Bool(coerce::to_bool(value)),
            FilterKind::Word => Value::String(coerce::to_word(&source)),
            FilterKind::Alnum => Value::String(coerce::to_alnum(&source)),
            FilterKind::Cmd => Value::String(coerce::to_cmd(&source)),
            FilterKind::Base64 => Value::String(coerce::to_base64(&source)),
            FilterKind::String => Value::String(self.html.sanitize(&decode_entities(&source))),
            FilterKind::Html => Value::String(self.html.sanitize(&source)),
            FilterKind::Path => Value::String(coerce::to_path(&source)),
            FilterKind::Trim => Value::String(coerce::to_trimmed(&source)),
            FilterKind::Username => Value::String(coerce::to_username(&source)),
        }
    }

    fn clean_unrecognized(&self, value: &Value) -> Value {
        match value {
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.clean_unrecognized(item)).collect())
            }
            Value::Object(fields) => {
                Value::Object(map_fields(fields, |item| self.clean_unrecognized(item)))
            }
            Value::String(text) if !text.is_empty() => {
                self.clean_leaf(value, FilterKind::String)
            }
            _ => value.clone(),
        }
    }
}

/// Rebuild an object with every field cleaned, keeping key order.
fn map_fields(fields: &Map<String, Value>, clean: impl Fn(&Value) -> Value) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, item)| (key.clone(), clean(item)))
        .collect()
}

/// Text form of a scalar: numbers print as written, `true` is `"1"`,
/// `false` and `null` are empty.
fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        Value::Number(number) => Cow::Owned(number.to_string()),
        Value::Bool(true) => Cow::Borrowed("1"),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => {
            Cow::Borrowed("")
        }
    }
}

/// Scalars become one-element arrays, `null` an empty one.
fn to_array(value: &Value) -> Value {
    match value {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(_) | Value::Object(_) => value.clone(),
        scalar => Value::Array(vec![scalar.clone()]),
    }
}
