//! Sanitizer configuration.
//!
//! A [`SanitizerConfig`] is built once and never mutated. To change policy,
//! build a new config and a new sanitizer around it.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Tags removed whenever `xss_auto_clean` is on, whatever the lists say.
pub const BLOCKED_TAGS: &[&str] = &[
    "applet", "body", "bgsound", "base", "basefont", "canvas", "embed", "frame", "frameset",
    "head", "html", "id", "iframe", "ilayer", "layer", "link", "meta", "name", "object", "script",
    "style", "title", "xml",
];

/// Attributes removed whenever `xss_auto_clean` is on. Every `on*` event
/// handler is removed as well.
pub const BLOCKED_ATTRIBUTES: &[&str] = &[
    "action",
    "background",
    "codebase",
    "dynsrc",
    "formaction",
    "lowsrc",
];

/// Attributes that may appear bare (`<input disabled>`).
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

/// Elements re-emitted in self-closing form.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Errors raised while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A list mode string was neither `allow` nor `block`.
    #[error("unknown list mode '{0}' (expected 'allow' or 'block')")]
    UnknownMode(String),

    /// A numeric list mode outside `0..=1`.
    #[error("invalid list mode value {0} (expected 0 for allow, 1 for block)")]
    InvalidModeValue(u8),

    /// The config file could not be read.
    #[error("failed to read config file '{}'", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The config document is not valid JSON for this schema.
    #[error("invalid config document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether a name list enumerates what is permitted or what is forbidden.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    /// Only listed names pass.
    #[default]
    #[strum(to_string = "allow_only_listed", serialize = "allow")]
    #[serde(alias = "allow")]
    AllowOnlyListed,
    /// Every name passes except listed ones.
    #[strum(to_string = "block_only_listed", serialize = "block")]
    #[serde(alias = "block")]
    BlockOnlyListed,
}

impl ListMode {
    /// Parse a mode name case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownMode`] for anything but
    /// `allow`/`allow_only_listed`/`block`/`block_only_listed`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        name.trim()
            .parse()
            .map_err(|_| ConfigError::UnknownMode(name.to_string()))
    }

    /// Decide whether a name passes, given whether it appears in the list.
    ///
    /// Disallowed when (listed AND block mode) OR (not listed AND allow mode).
    #[must_use]
    pub const fn permits(self, listed: bool) -> bool {
        match self {
            Self::AllowOnlyListed => listed,
            Self::BlockOnlyListed => !listed,
        }
    }
}

impl TryFrom<u8> for ListMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::AllowOnlyListed),
            1 => Ok(Self::BlockOnlyListed),
            other => Err(ConfigError::InvalidModeValue(other)),
        }
    }
}

/// Immutable sanitizer policy.
///
/// All names are stored lowercase; lookups lowercase their input first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct SanitizerConfig {
    tag_allow_list: HashSet<String>,
    tag_mode: ListMode,
    attribute_allow_list: HashSet<String>,
    attribute_mode: ListMode,
    xss_auto_clean: bool,
}

impl SanitizerConfig {
    /// Build a configuration. Both lists are lowercased on intake.
    #[must_use]
    pub fn new<T, A>(
        tags: T,
        attributes: A,
        tag_mode: ListMode,
        attribute_mode: ListMode,
        xss_auto_clean: bool,
    ) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            tag_allow_list: lowercase_set(tags),
            tag_mode,
            attribute_allow_list: lowercase_set(attributes),
            attribute_mode,
            xss_auto_clean,
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// Every field is optional:
    ///
    /// ```json
    /// { "tags": ["a", "b"], "attributes": ["href"],
    ///   "tag_mode": "allow", "attribute_mode": "allow",
    ///   "xss_auto_clean": true }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document does not match.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&document)
    }

    /// Whether the tag list permits `name`.
    #[must_use]
    pub fn permits_tag(&self, name: &str) -> bool {
        self.tag_mode
            .permits(self.tag_allow_list.contains(&name.to_lowercase()))
    }

    /// Whether the attribute list permits `name`.
    #[must_use]
    pub fn permits_attribute(&self, name: &str) -> bool {
        self.attribute_mode
            .permits(self.attribute_allow_list.contains(&name.to_lowercase()))
    }

    /// The configured tag names.
    #[must_use]
    pub const fn tag_allow_list(&self) -> &HashSet<String> {
        &self.tag_allow_list
    }

    /// How the tag list is interpreted.
    #[must_use]
    pub const fn tag_mode(&self) -> ListMode {
        self.tag_mode
    }

    /// The configured attribute names.
    #[must_use]
    pub const fn attribute_allow_list(&self) -> &HashSet<String> {
        &self.attribute_allow_list
    }

    /// How the attribute list is interpreted.
    #[must_use]
    pub const fn attribute_mode(&self) -> ListMode {
        self.attribute_mode
    }

    /// Whether the fixed blacklists and heuristics are applied.
    #[must_use]
    pub const fn xss_auto_clean(&self) -> bool {
        self.xss_auto_clean
    }
}

impl Default for SanitizerConfig {
    /// Empty lists in allow-only mode: every tag and attribute is stripped.
    fn default() -> Self {
        Self::from(ConfigFile::default())
    }
}

/// On-disk shape of a configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    tags: Vec<String>,
    attributes: Vec<String>,
    tag_mode: ListMode,
    attribute_mode: ListMode,
    xss_auto_clean: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            attributes: Vec::new(),
            tag_mode: ListMode::AllowOnlyListed,
            attribute_mode: ListMode::AllowOnlyListed,
            xss_auto_clean: true,
        }
    }
}

impl From<ConfigFile> for SanitizerConfig {
    fn from(file: ConfigFile) -> Self {
        Self::new(
            file.tags,
            file.attributes,
            file.tag_mode,
            file.attribute_mode,
            file.xss_auto_clean,
        )
    }
}

fn lowercase_set<I>(names: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Whether `name` (any case) is on the fixed tag blacklist.
#[must_use]
pub fn is_blocked_tag(name: &str) -> bool {
    contains_ignore_case(BLOCKED_TAGS, name)
}

/// Whether `name` (any case) is on the fixed attribute blacklist.
#[must_use]
pub fn is_blocked_attribute(name: &str) -> bool {
    contains_ignore_case(BLOCKED_ATTRIBUTES, name)
}

/// Whether `name` (any case) may appear without a value.
#[must_use]
pub fn is_boolean_attribute(name: &str) -> bool {
    contains_ignore_case(BOOLEAN_ATTRIBUTES, name)
}

/// Whether `name` (any case) is a void element.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    contains_ignore_case(VOID_ELEMENTS, name)
}

fn contains_ignore_case(set: &[&str], name: &str) -> bool {
    set.iter().any(|entry| entry.eq_ignore_ascii_case(name))
}
