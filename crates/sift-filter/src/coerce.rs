//! Primitive value coercers.
//!
//! Each coercer is a small, independent transform. None of them fail: a
//! value that cannot be coerced becomes the zero value of the target type
//! (or an empty string for paths).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?[0-9]+").expect("static regex"));

static FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?[0-9]+(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?").expect("static regex")
});

static NOT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z_]").expect("static regex"));

static NOT_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("static regex"));

static NOT_CMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("static regex"));

static NOT_BASE64: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9/+=]").expect("static regex"));

static USERNAME_FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\x00-\x1F\x7F<>"'%&]"#).expect("static regex"));

static POSIX_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_/-]+[A-Za-z0-9_.-]*(?:[\\/]+[A-Za-z0-9_-]+[A-Za-z0-9_.-]*)*$")
        .expect("static regex")
});

static WINDOWS_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z]:[\\/])?[A-Za-z0-9_-]+[A-Za-z0-9_.-]*(?:[\\/]+[A-Za-z0-9_-]+[A-Za-z0-9_.-]*)*$",
    )
    .expect("static regex")
});

static SLASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/+").expect("static regex"));

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/]+").expect("static regex"));

/// First signed integer literal in `source`, or 0.
///
/// A `+` sign is not part of the literal, and a literal too large for
/// `i64` yields 0.
#[must_use]
pub fn to_int(source: &str) -> i64 {
    INTEGER
        .find(source)
        .and_then(|found| found.as_str().parse().ok())
        .unwrap_or(0)
}

/// Absolute value of [`to_int`].
#[must_use]
pub fn to_uint(source: &str) -> u64 {
    to_int(source).unsigned_abs()
}

/// First signed decimal literal (optional fraction and exponent), or 0.0.
#[must_use]
pub fn to_float(source: &str) -> f64 {
    FLOAT
        .find(source)
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Loose truthiness: `null`, `false`, zero, `""`, `"0"` and `[]` are false.
#[must_use]
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Letters and underscore only.
#[must_use]
pub fn to_word(source: &str) -> String {
    NOT_WORD.replace_all(source, "").into_owned()
}

/// Letters and digits only.
#[must_use]
pub fn to_alnum(source: &str) -> String {
    NOT_ALNUM.replace_all(source, "").into_owned()
}

/// Letters, digits, `_`, `.` and `-`, with leading dots removed.
#[must_use]
pub fn to_cmd(source: &str) -> String {
    NOT_CMD
        .replace_all(source, "")
        .trim_start_matches('.')
        .to_string()
}

/// Base64 alphabet (`A-Z a-z 0-9 / + =`) only.
#[must_use]
pub fn to_base64(source: &str) -> String {
    NOT_BASE64.replace_all(source, "").into_owned()
}

/// Accept a restricted path, collapsing repeated separators.
///
/// POSIX-looking paths keep their separators with `//` runs collapsed;
/// Windows-looking paths (optionally with a drive) are normalized to single
/// backslashes. Anything else (a leading dot, whitespace, other
/// punctuation) yields `""`.
#[must_use]
pub fn to_path(source: &str) -> String {
    if POSIX_PATH.is_match(source) {
        return SLASH_RUN.replace_all(source, "/").into_owned();
    }
    if WINDOWS_PATH.is_match(source) {
        return SEPARATOR_RUN.replace_all(source, "\\").into_owned();
    }
    String::new()
}

/// Trim whitespace (ASCII and Unicode, including NBSP and ideographic
/// space) and NUL from both ends.
#[must_use]
pub fn to_trimmed(source: &str) -> String {
    source
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string()
}

/// Remove control characters and `<>"'%&`.
#[must_use]
pub fn to_username(source: &str) -> String {
    USERNAME_FORBIDDEN.replace_all(source, "").into_owned()
}
