//! Tag- and attribute-level HTML sanitization.
//!
//! # Scope
//!
//! This crate implements:
//! - **Attribute value escaping** - quoted values cannot end a tag early
//! - **CSS expression stripping** - `expression(...)`, even behind comments
//! - **Attribute checks** - script schemes and style expressions
//! - **Attribute and tag policy** - allow/block lists plus fixed blacklists
//! - **Fixpoint driver** - rescans until nested evasions are gone
//!
//! # Not a parser
//!
//! There is no DOM and no grammar. Output is not guaranteed to be
//! well-formed; opening and closing tags are filtered independently.
//!
//! ```
//! use sift_html::{HtmlSanitizer, ListMode, SanitizerConfig};
//!
//! let config = SanitizerConfig::new(
//!     ["img"],
//!     ["src"],
//!     ListMode::AllowOnlyListed,
//!     ListMode::AllowOnlyListed,
//!     true,
//! );
//! let sanitizer = HtmlSanitizer::new(config);
//! assert_eq!(
//!     sanitizer.sanitize(r#"<img src="x" onerror="alert(1)">"#),
//!     r#"<img src="x" />"#
//! );
//! ```

/// Attribute parsing and filtering.
pub mod attributes;
/// Policy configuration and the fixed name sets.
pub mod config;
/// CSS expression stripping.
pub mod css;
/// Quoted attribute value pre-escaping.
pub mod escape;
/// Sanitizer entry point and fixpoint driver.
pub mod sanitizer;
/// Tag boundary scanning.
pub mod scanner;
/// Script-injection attribute checks.
pub mod validator;

pub use attributes::AttributeToken;
pub use config::{ConfigError, ListMode, SanitizerConfig};
pub use css::strip_css_expressions;
pub use escape::escape_attribute_values;
pub use sanitizer::HtmlSanitizer;
pub use scanner::{ParsedTag, split_attributes};
pub use validator::is_unsafe_attribute;
