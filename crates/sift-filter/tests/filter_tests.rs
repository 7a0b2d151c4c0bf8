//! Integration tests for type-directed dispatch.

use serde_json::{Value, json};
use sift_filter::{FilterKind, InputFilter, ListMode, SanitizerConfig};
use strum::IntoEnumIterator;

/// Helper to build a filter permitting `a`, `img` and their usual attributes
fn filter() -> InputFilter {
    InputFilter::new(SanitizerConfig::new(
        ["a", "img"],
        ["href", "src"],
        ListMode::AllowOnlyListed,
        ListMode::AllowOnlyListed,
        true,
    ))
}

#[test]
fn test_kind_names_case_insensitive() {
    assert_eq!(FilterKind::from_name("int"), Some(FilterKind::Int));
    assert_eq!(FilterKind::from_name("Integer"), Some(FilterKind::Int));
    assert_eq!(FilterKind::from_name("DOUBLE"), Some(FilterKind::Float));
    assert_eq!(FilterKind::from_name("bool"), Some(FilterKind::Boolean));
    assert_eq!(FilterKind::from_name(" html "), Some(FilterKind::Html));
    assert_eq!(FilterKind::from_name("intger"), None);
}

#[test]
fn test_kind_display_round_trips() {
    for kind in FilterKind::iter() {
        assert_eq!(FilterKind::from_name(&kind.to_string()), Some(kind));
    }
}

#[test]
fn test_numeric_kinds() {
    let filter = InputFilter::default();
    assert_eq!(filter.clean_str("  +42 abc", "int"), json!(42));
    assert_eq!(filter.clean_str("abc", "uint"), json!(0));
    assert_eq!(filter.clean_str("-3", "UINT"), json!(3));
    assert_eq!(filter.clean_str("v1.5", "float"), json!(1.5));
    assert_eq!(filter.clean(&json!(7.9), "int"), json!(7));
    assert_eq!(filter.clean(&json!(true), "int"), json!(1));
    assert_eq!(filter.clean(&json!(null), "float"), json!(0.0));
}

#[test]
fn test_boolean_kind() {
    let filter = InputFilter::default();
    assert_eq!(filter.clean_str("0", "bool"), json!(false));
    assert_eq!(filter.clean_str("no", "boolean"), json!(true));
    assert_eq!(filter.clean(&json!(0), "bool"), json!(false));
}

#[test]
fn test_raw_and_array_kinds() {
    let filter = InputFilter::default();
    let value = json!({ "x": "<script>" });
    assert_eq!(filter.clean(&value, "raw"), value);
    assert_eq!(filter.clean_str("<b>", "array"), json!(["<b>"]));
    assert_eq!(filter.clean(&json!(null), "array"), json!([]));
    assert_eq!(filter.clean(&json!(["<b>", 1]), "array"), json!(["<b>", 1]));
}

#[test]
fn test_string_kind_decodes_first() {
    let filter = filter();
    assert_eq!(
        filter.clean_str("&lt;script&gt;alert(1)&lt;/script&gt;", "string"),
        json!("alert(1)")
    );
    assert_eq!(
        filter.clean_str("&lt;script&gt;alert(1)&lt;/script&gt;", "html"),
        json!("&lt;script&gt;alert(1)&lt;/script&gt;")
    );
}

#[test]
fn test_html_kind() {
    let filter = filter();
    assert_eq!(
        filter.clean_str(r#"<img src="x" onerror="alert(1)">"#, "html"),
        json!(r#"<img src="x" />"#)
    );
    assert_eq!(
        filter.clean_str(r#"<a href="javascript:alert(1)">x</a>"#, "html"),
        json!("<a>x</a>")
    );
}

#[test]
fn test_string_kinds_on_scalars() {
    let filter = InputFilter::default();
    assert_eq!(filter.clean(&json!(12), "string"), json!("12"));
    assert_eq!(filter.clean(&json!(null), "word"), json!(""));
    assert_eq!(filter.clean_str("a b!", "alnum"), json!("ab"));
    assert_eq!(filter.clean_str("..cmd!", "cmd"), json!("cmd"));
    assert_eq!(filter.clean_str("/a//b", "path"), json!("/a/b"));
    assert_eq!(filter.clean_str(" x ", "trim"), json!("x"));
    assert_eq!(filter.clean_str("a&b", "username"), json!("ab"));
    assert_eq!(filter.clean_str("a?b=", "base64"), json!("ab="));
}

#[test]
fn test_arrays_cleaned_element_wise() {
    let filter = InputFilter::default();
    assert_eq!(
        filter.clean(&json!(["1a", "b2", ["-3"]]), "int"),
        json!([1, 2, [-3]])
    );
}

#[test]
fn test_objects_cleaned_field_wise_in_order() {
    let filter = InputFilter::default();
    let cleaned = filter.clean(
        &json!({ "zeta": "<b>z</b>", "alpha": { "inner": "<i>a</i>" }, "mid": 3 }),
        "string",
    );
    assert_eq!(
        cleaned,
        json!({ "zeta": "z", "alpha": { "inner": "a" }, "mid": "3" })
    );
    let keys: Vec<&String> = cleaned.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_unrecognized_kind() {
    let filter = InputFilter::default();
    assert_eq!(filter.clean_str("<b>x</b>", "mystery"), json!("x"));
    assert_eq!(filter.clean_str("", "mystery"), json!(""));
    assert_eq!(filter.clean(&json!(5), "mystery"), json!(5));
    assert_eq!(filter.clean(&json!(null), "mystery"), Value::Null);
    assert_eq!(
        filter.clean(&json!(["<i>y</i>", false]), "mystery"),
        json!(["y", false])
    );
}

#[test]
fn test_filter_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InputFilter>();
}

#[test]
fn test_string_with_many_ampersands_passes_through() {
    let input = "&".repeat(100_000);
    assert_eq!(InputFilter::default().clean_str(&input, "string"), Value::String(input));
}
