//! Common utilities for the sift sanitizer.
//!
//! This crate provides shared infrastructure used by the HTML engine and the
//! input filter:
//! - **Entity decoding** - named and numeric character references
//! - **Warning System** - deduplicated warnings routed through `log`

/// Character reference decoding.
pub mod entities;
/// Deduplicated warnings.
pub mod warning;

pub use entities::{decode_entities, lookup_entity};
