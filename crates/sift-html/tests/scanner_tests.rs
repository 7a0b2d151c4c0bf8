//! Integration tests for tag and attribute boundary scanning.

use sift_html::{ParsedTag, split_attributes};

#[test]
fn test_parse_opening_tag() {
    let tag = ParsedTag::parse(r#"a href="x" title=t"#).unwrap();
    assert_eq!(tag.name, "a");
    assert!(!tag.is_closing_tag);
    assert_eq!(tag.raw_attributes, vec![r#"href="x""#, "title=t"]);
    assert!(!tag.is_void_element());
}

#[test]
fn test_parse_closing_tag() {
    let tag = ParsedTag::parse("/b").unwrap();
    assert_eq!(tag.name, "b");
    assert!(tag.is_closing_tag);
    assert!(tag.raw_attributes.is_empty());
}

#[test]
fn test_closing_tag_ignores_attributes() {
    let tag = ParsedTag::parse(r#"/b class="x""#).unwrap();
    assert!(tag.raw_attributes.is_empty());
}

#[test]
fn test_void_element() {
    assert!(ParsedTag::parse("IMG").unwrap().is_void_element());
    assert!(ParsedTag::parse("br").unwrap().is_void_element());
}

#[test]
fn test_irregular_names_rejected() {
    for content in ["", "/", "1a", "br/", "<script", " b", "a-b", "é", "a\nhref=x"] {
        assert!(ParsedTag::parse(content).is_none(), "{content:?}");
    }
}

#[test]
fn test_alphanumeric_names_accepted() {
    assert_eq!(ParsedTag::parse("h1").unwrap().name, "h1");
    assert_eq!(ParsedTag::parse("DiV").unwrap().name, "DiV");
}

#[test]
fn test_split_quoted_value_with_spaces() {
    assert_eq!(
        split_attributes(r#"a href="x y" title=t disabled"#),
        vec![r#"href="x y""#, "title=t", "disabled"]
    );
}

#[test]
fn test_split_space_before_equals() {
    assert_eq!(
        split_attributes(r#"a title = "x""#),
        vec!["title", r#"= "x""#]
    );
}

#[test]
fn test_split_space_after_equals() {
    assert_eq!(split_attributes(r#"a title= "x y""#), vec![r#"title= "x y""#]);
}

#[test]
fn test_split_unterminated_quote_falls_back_to_space() {
    assert_eq!(
        split_attributes(r#"a title="unterminated rest"#),
        vec![r#"title="unterminated"#, "rest"]
    );
}

#[test]
fn test_split_single_quotes_are_not_grouped() {
    assert_eq!(
        split_attributes("a title='x y'"),
        vec!["title='x", "y'"]
    );
}

#[test]
fn test_split_double_spaces_yield_empty_tokens() {
    assert_eq!(split_attributes("a  b"), vec!["", "b"]);
}

#[test]
fn test_split_trailing_slash() {
    assert_eq!(split_attributes(r#"img src="x" /"#), vec![r#"src="x""#, "/"]);
}

#[test]
fn test_split_no_attributes() {
    assert!(split_attributes("p").is_empty());
}
