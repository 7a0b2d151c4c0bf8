//! CSS `expression(...)` stripping.
//!
//! Legacy renderers execute script from `style="width: expression(...)"`.
//! Attackers hide the keyword behind comments (`exp/**/ression`), so the
//! check runs on a comment-free probe of the value.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `/* ... */`, shortest match.
static CSS_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*?\*/").expect("static regex"));

static EXPRESSION_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)expression").expect("static regex"));

/// Neutralize CSS expression vectors in one attribute value.
///
/// # Algorithm
///
/// STEP 1: Remove every `/*...*/` comment to get a probe.
///
/// STEP 2: If the probe has no `:expression` (any case), return the value
/// untouched.
///
/// STEP 3: If an opening parenthesis follows that occurrence, return the
/// probe with every `expression` (any case) removed.
///
/// STEP 4: Otherwise return the probe. The comments are gone but the
/// keyword stays, since a colon-expression without a call is inert.
#[must_use]
pub fn strip_css_expressions(value: &str) -> Cow<'_, str> {
    // STEP 1
    let probe = CSS_COMMENT.replace_all(value, "");

    // STEP 2
    let Some(found) = probe.to_ascii_lowercase().find(":expression") else {
        return Cow::Borrowed(value);
    };

    // STEP 3
    if probe[found..].contains('(') {
        return Cow::Owned(EXPRESSION_KEYWORD.replace_all(&probe, "").into_owned());
    }

    // STEP 4
    probe
}
