//! Integration tests for sanitizer configuration.

use sift_html::{ConfigError, ListMode, SanitizerConfig};

#[test]
fn test_default_config() {
    let config = SanitizerConfig::default();
    assert!(config.tag_allow_list().is_empty());
    assert!(config.attribute_allow_list().is_empty());
    assert_eq!(config.tag_mode(), ListMode::AllowOnlyListed);
    assert_eq!(config.attribute_mode(), ListMode::AllowOnlyListed);
    assert!(config.xss_auto_clean());
    assert!(!config.permits_tag("b"));
}

#[test]
fn test_lists_lowercased_on_intake() {
    let config = SanitizerConfig::new(
        ["B", " Img "],
        ["HREF"],
        ListMode::AllowOnlyListed,
        ListMode::AllowOnlyListed,
        true,
    );
    assert!(config.tag_allow_list().contains("b"));
    assert!(config.tag_allow_list().contains("img"));
    assert!(config.permits_tag("IMG"));
    assert!(config.permits_attribute("Href"));
    assert!(!config.permits_attribute("src"));
}

#[test]
fn test_list_mode_permits() {
    assert!(ListMode::AllowOnlyListed.permits(true));
    assert!(!ListMode::AllowOnlyListed.permits(false));
    assert!(!ListMode::BlockOnlyListed.permits(true));
    assert!(ListMode::BlockOnlyListed.permits(false));
}

#[test]
fn test_list_mode_parse() {
    assert_eq!(ListMode::parse("allow").unwrap(), ListMode::AllowOnlyListed);
    assert_eq!(ListMode::parse("BLOCK").unwrap(), ListMode::BlockOnlyListed);
    assert_eq!(
        ListMode::parse("block_only_listed").unwrap(),
        ListMode::BlockOnlyListed
    );
    assert!(matches!(
        ListMode::parse("sometimes"),
        Err(ConfigError::UnknownMode(mode)) if mode == "sometimes"
    ));
}

#[test]
fn test_list_mode_display() {
    assert_eq!(ListMode::AllowOnlyListed.to_string(), "allow_only_listed");
    assert_eq!(ListMode::BlockOnlyListed.to_string(), "block_only_listed");
}

#[test]
fn test_list_mode_from_constant() {
    assert_eq!(ListMode::try_from(0).unwrap(), ListMode::AllowOnlyListed);
    assert_eq!(ListMode::try_from(1).unwrap(), ListMode::BlockOnlyListed);
    assert!(matches!(
        ListMode::try_from(2),
        Err(ConfigError::InvalidModeValue(2))
    ));
}

#[test]
fn test_from_json() {
    let config = SanitizerConfig::from_json(
        r#"{ "tags": ["A", "b"], "attributes": ["href"],
             "tag_mode": "allow", "attribute_mode": "block_only_listed",
             "xss_auto_clean": false }"#,
    )
    .unwrap();
    assert!(config.permits_tag("a"));
    assert!(!config.permits_tag("i"));
    assert_eq!(config.attribute_mode(), ListMode::BlockOnlyListed);
    assert!(!config.permits_attribute("href"));
    assert!(!config.xss_auto_clean());
}

#[test]
fn test_from_json_defaults() {
    assert_eq!(
        SanitizerConfig::from_json("{}").unwrap(),
        SanitizerConfig::default()
    );
}

#[test]
fn test_from_json_rejects_unknown_fields() {
    assert!(matches!(
        SanitizerConfig::from_json(r#"{ "tag": ["a"] }"#),
        Err(ConfigError::Json(_))
    ));
    assert!(SanitizerConfig::from_json(r#"{ "tag_mode": "maybe" }"#).is_err());
}

#[test]
fn test_from_missing_path() {
    let error = SanitizerConfig::from_path("/nonexistent/sift.json".as_ref()).unwrap_err();
    assert!(matches!(error, ConfigError::Io { .. }));
    assert!(error.to_string().contains("/nonexistent/sift.json"));
}
