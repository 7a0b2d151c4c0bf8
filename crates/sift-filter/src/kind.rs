//! Filter type names.

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

/// The semantic type a value is coerced to.
///
/// Names parse case-insensitively; `INTEGER`, `DOUBLE` and `BOOL` are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum FilterKind {
    /// Returned unchanged.
    #[strum(serialize = "RAW")]
    Raw,
    /// Wrapped into an array, elements untouched.
    #[strum(serialize = "ARRAY")]
    Array,
    /// First signed integer literal, else 0.
    #[strum(to_string = "INT", serialize = "INTEGER")]
    Int,
    /// Absolute value of [`FilterKind::Int`].
    #[strum(serialize = "UINT")]
    Uint,
    /// First signed decimal literal with optional exponent, else 0.0.
    #[strum(to_string = "FLOAT", serialize = "DOUBLE")]
    Float,
    /// Truthiness of the raw value.
    #[strum(to_string = "BOOLEAN", serialize = "BOOL")]
    Boolean,
    /// Letters and underscore only.
    #[strum(serialize = "WORD")]
    Word,
    /// Letters and digits only.
    #[strum(serialize = "ALNUM")]
    Alnum,
    /// Command token: letters, digits, `_`, `.` and `-`, no leading dots.
    #[strum(serialize = "CMD")]
    Cmd,
    /// Base64 alphabet only.
    #[strum(serialize = "BASE64")]
    Base64,
    /// Entity-decoded, then HTML-sanitized.
    #[strum(serialize = "STRING")]
    String,
    /// HTML-sanitized without decoding.
    #[strum(serialize = "HTML")]
    Html,
    /// Restricted POSIX or Windows path, separators collapsed.
    #[strum(serialize = "PATH")]
    Path,
    /// Surrounding whitespace removed.
    #[strum(serialize = "TRIM")]
    Trim,
    /// Control characters and `<>"'%&` removed.
    #[strum(serialize = "USERNAME")]
    Username,
}

impl FilterKind {
    /// Look up a filter by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name.trim()).ok()
    }

    /// Whether this filter applies element-wise to arrays and objects.
    #[must_use]
    pub const fn recurses(self) -> bool {
        !matches!(self, Self::Raw | Self::Array)
    }
}
