//! Property tests for type-directed dispatch.

use quickcheck_macros::quickcheck;
use serde_json::Value;
use sift_filter::InputFilter;

#[quickcheck]
fn html_kind_is_idempotent(input: String) -> bool {
    let filter = InputFilter::default();
    let once = filter.clean_str(&input, "html");
    filter.clean(&once, "html") == once
}

#[quickcheck]
fn uint_is_never_negative(input: String) -> bool {
    InputFilter::default()
        .clean_str(&input, "uint")
        .as_u64()
        .is_some()
}

#[quickcheck]
fn word_keeps_only_letters_and_underscore(input: String) -> bool {
    match InputFilter::default().clean_str(&input, "word") {
        Value::String(word) => word.chars().all(|c| c.is_ascii_alphabetic() || c == '_'),
        _ => false,
    }
}

#[quickcheck]
fn path_uses_only_path_characters(input: String) -> bool {
    match InputFilter::default().clean_str(&input, "path") {
        Value::String(path) => path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_.-/\\:".contains(c)),
        _ => false,
    }
}
