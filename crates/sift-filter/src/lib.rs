//! Type-directed input filtering.
//!
//! # Scope
//!
//! This crate provides:
//! - **Filter kinds** - `INT`, `FLOAT`, `WORD`, `PATH`, `STRING`, `HTML`, ...
//! - **Coercers** - small, infallible transforms for the primitive kinds
//! - **Dispatch** - [`InputFilter::clean`], recursing through arrays and
//!   objects and handing markup to the `sift-html` engine
//!
//! ```
//! use serde_json::json;
//! use sift_filter::InputFilter;
//!
//! let filter = InputFilter::default();
//! assert_eq!(filter.clean_str("  +42 abc", "int"), json!(42));
//! assert_eq!(filter.clean_str("<b>hi</b>", "string"), json!("hi"));
//! assert_eq!(
//!     filter.clean(&json!({ "a": "1", "b": ["x2", "3y"] }), "uint"),
//!     json!({ "a": 1, "b": [2, 3] })
//! );
//! ```

/// Primitive coercers.
pub mod coerce;
/// Dispatch over dynamic values.
pub mod filter;
/// Filter type names.
pub mod kind;

pub use filter::InputFilter;
pub use kind::FilterKind;
pub use sift_html::{ListMode, SanitizerConfig};
