//! Serializable override profile.
//!
//! An [`OverrideProfile`] captures an icon set's style selection and
//! overrides in a form that can be stored as JSON and applied later.
//!
//! # Example
//!
//! ```
//! use icon_alias::OverrideProfile;
//!
//! let profile = OverrideProfile::new()
//!     .with_style("solid")
//!     .with_alias("actions.delete", "trash-regular")
//!     .with_alias_style("actions.create", "regular");
//!
//! let json = profile.to_json().unwrap();
//! let restored = OverrideProfile::from_json(&json).unwrap();
//! assert_eq!(restored.style.as_deref(), Some("solid"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Style selection and overrides, referring to styles by name and icons by
/// value.
///
/// # JSON Format
///
/// ```json
/// {
///   "style": "solid",
///   "defaultStyle": "regular",
///   "aliases": { "actions.delete": "trash-regular" },
///   "icons": { "plus-regular": "plus-solid" },
///   "aliasStyles": { "actions.create": "regular" },
///   "iconStyles": { "search-regular": "solid" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct OverrideProfile {
    /// Globally selected style name. `None` means not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Default style name. `None` means not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,

    /// Alias → replacement icon value.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: IndexMap<String, String>,

    /// Default icon value → replacement icon value.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub icons: IndexMap<String, String>,

    /// Alias → style name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub alias_styles: IndexMap<String, String>,

    /// Default icon value → style name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub icon_styles: IndexMap<String, String>,
}

impl OverrideProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the globally selected style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Sets the default style.
    pub fn with_default_style(mut self, style: impl Into<String>) -> Self {
        self.default_style = Some(style.into());
        self
    }

    /// Replaces an alias with an icon value.
    pub fn with_alias(mut self, alias: impl Into<String>, value: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), value.into());
        self
    }

    /// Replaces an icon with another icon value.
    pub fn with_icon(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.icons.insert(from.into(), to.into());
        self
    }

    /// Uses a style for an alias.
    pub fn with_alias_style(mut self, alias: impl Into<String>, style: impl Into<String>) -> Self {
        self.alias_styles.insert(alias.into(), style.into());
        self
    }

    /// Uses a style for an icon.
    pub fn with_icon_style(mut self, icon: impl Into<String>, style: impl Into<String>) -> Self {
        self.icon_styles.insert(icon.into(), style.into());
        self
    }

    /// Returns true if the profile sets nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
