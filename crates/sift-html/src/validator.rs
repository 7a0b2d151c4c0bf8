//! Script-injection checks for a single attribute.

use std::sync::LazyLock;

use regex::Regex;
use sift_common::decode_entities;

/// Script-capable URI schemes, followed by a colon in literal or reference
/// form. `&column;` is a misspelling seen in real payloads and is matched
/// as written.
static SCRIPT_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:(?:java|vb|live)script|behaviour|mocha)(?::|&colon;|&column;)")
        .expect("static regex")
});

/// Returns `true` when the pair looks like a script injection: a `style`
/// carrying `expression`, or any value using a script scheme.
///
/// Both sides are lowercased and the value is entity-decoded first, so
/// callers may pass raw text.
#[must_use]
pub fn is_unsafe_attribute(name: &str, value: &str) -> bool {
    let name = name.to_lowercase();
    let lowered = value.to_lowercase();
    let value = decode_entities(&lowered);

    (name == "style" && value.contains("expression")) || SCRIPT_SCHEME.is_match(&value)
}
