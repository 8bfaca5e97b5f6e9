//! Style variants and the per-icon-set style catalog.
//!
//! A [`Style`] pairs the lowercase token used to select it (`"solid"`) with
//! the suffix glued onto base identity names (`"Solid"` in `PlusSolid`).
//! Each icon set declares an ordered [`StyleCatalog`]; the first declared
//! style is the catalog default.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Style
// ============================================================================

/// A named visual variant of an icon set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Style {
    name: String,
    suffix: String,
}

impl Style {
    /// Creates a style from its selection name and identity suffix.
    pub fn new(name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suffix: suffix.into(),
        }
    }

    /// The lowercase token used for style selection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The suffix appended to base identity names.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

// ============================================================================
// StyleRef
// ============================================================================

/// A style given either by name or as a [`Style`] value.
///
/// Setters accept anything convertible into a `StyleRef`, so both
/// `"solid"` and `&Style` work at call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleRef {
    Name(String),
    Style(Style),
}

impl StyleRef {
    /// The style name this reference refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Style(style) => style.name(),
        }
    }
}

impl From<&str> for StyleRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for StyleRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for StyleRef {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<Style> for StyleRef {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}

impl From<&Style> for StyleRef {
    fn from(style: &Style) -> Self {
        Self::Style(style.clone())
    }
}

// ============================================================================
// SuffixPosition
// ============================================================================

/// Where a style suffix sits in identity names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SuffixPosition {
    /// `PlusSolid`
    #[default]
    Trailing,
    /// `SolidPlus`
    Leading,
}

impl SuffixPosition {
    /// Joins a base name and a style suffix.
    pub fn compose(self, base: &str, suffix: &str) -> String {
        match self {
            Self::Trailing => format!("{base}{suffix}"),
            Self::Leading => format!("{suffix}{base}"),
        }
    }

    /// Removes `suffix` from `identity`, returning the base name.
    ///
    /// Returns `None` if the suffix is empty or not on the expected side.
    pub fn strip<'a>(self, identity: &'a str, suffix: &str) -> Option<&'a str> {
        if suffix.is_empty() {
            return None;
        }
        match self {
            Self::Trailing => identity.strip_suffix(suffix),
            Self::Leading => identity.strip_prefix(suffix),
        }
    }
}

// ============================================================================
// StyleCatalog
// ============================================================================

/// The ordered, non-empty set of styles available to one icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Style>", into = "Vec<Style>")]
pub struct StyleCatalog {
    styles: Vec<Style>,
}

impl StyleCatalog {
    /// Creates a catalog from styles in declaration order.
    ///
    /// Fails with [`Error::EmptyCatalog`] if no style is given. When two
    /// styles share a name, the first one wins lookups by name.
    pub fn new(styles: impl IntoIterator<Item = Style>) -> Result<Self> {
        let styles: Vec<Style> = styles.into_iter().collect();
        if styles.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self { styles })
    }

    /// The general-purpose catalog shared by most icon sets.
    ///
    /// Regular, Solid, Filled, Outline, Light, Bold, Duotone, Sharp.
    pub fn standard() -> Self {
        let styles = [
            "Regular", "Solid", "Filled", "Outline", "Light", "Bold", "Duotone", "Sharp",
        ]
        .into_iter()
        .map(|suffix| Style::new(suffix.to_lowercase(), suffix))
        .collect();
        Self { styles }
    }

    /// Finds a style by its exact (case-sensitive) name.
    pub fn by_name(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|style| style.name == name)
    }

    /// All styles in declaration order.
    pub fn all(&self) -> &[Style] {
        &self.styles
    }

    /// Style names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.styles.iter().map(Style::name).collect()
    }

    /// The first declared style.
    pub fn default_style(&self) -> &Style {
        &self.styles[0]
    }

    /// Returns true if `style` is declared by this catalog.
    pub fn contains(&self, style: &Style) -> bool {
        self.styles.contains(style)
    }

    /// Returns true if the referenced style is declared by this catalog.
    pub fn has(&self, style: impl Into<StyleRef>) -> bool {
        match style.into() {
            StyleRef::Name(name) => self.by_name(&name).is_some(),
            StyleRef::Style(style) => self.contains(&style),
        }
    }

    /// Resolves a style reference against the catalog.
    ///
    /// Fails with [`Error::InvalidStyle`] listing every declared style name.
    pub fn validate(&self, style: impl Into<StyleRef>) -> Result<Style> {
        let style = style.into();
        let found = match &style {
            StyleRef::Name(name) => self.by_name(name),
            StyleRef::Style(style) => self.styles.iter().find(|s| *s == style),
        };
        found
            .cloned()
            .ok_or_else(|| Error::invalid_style(style.name(), &self.names()))
    }

    /// Splits the longest matching trailing suffix off `identity`.
    ///
    /// Returns the remaining base and the style whose suffix matched. Among
    /// suffixes of equal length, the first in declaration order wins. Empty
    /// suffixes never match.
    pub fn split_suffix<'a>(&self, identity: &'a str) -> Option<(&'a str, &Style)> {
        self.split_at(identity, SuffixPosition::Trailing)
    }

    /// Like [`split_suffix`](Self::split_suffix), for either position.
    pub fn split_at<'a>(
        &self,
        identity: &'a str,
        position: SuffixPosition,
    ) -> Option<(&'a str, &Style)> {
        self.longest_match(|style| {
            position
                .strip(identity, style.suffix())
                .map(|base| (base, style.suffix().len()))
        })
    }

    /// Picks the style whose match is longest, first declared on ties.
    fn longest_match<T>(
        &self,
        mut matcher: impl FnMut(&Style) -> Option<(T, usize)>,
    ) -> Option<(T, &Style)> {
        let mut best: Option<(T, usize, &Style)> = None;
        for style in &self.styles {
            if let Some((value, len)) = matcher(style) {
                if best.as_ref().is_none_or(|(_, best_len, _)| len > *best_len) {
                    best = Some((value, len, style));
                }
            }
        }
        best.map(|(value, _, style)| (value, style))
    }

    /// Returns an iterator over the styles.
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }
}

impl TryFrom<Vec<Style>> for StyleCatalog {
    type Error = Error;

    fn try_from(styles: Vec<Style>) -> Result<Self> {
        Self::new(styles)
    }
}

impl From<StyleCatalog> for Vec<Style> {
    fn from(catalog: StyleCatalog) -> Self {
        catalog.styles
    }
}

impl<'a> IntoIterator for &'a StyleCatalog {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}
