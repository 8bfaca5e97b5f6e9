//! Fluent configuration surface for an icon set.
//!
//! [`IconSetConfig`] owns the style selection and the four override layers.
//! Every setter validates its input against the style catalog before writing
//! anything, and returns the configuration so calls can be chained:
//!
//! ```
//! use icon_alias::{IconSetConfig, IconVariant, StyleCatalog};
//!
//! # fn main() -> icon_alias::Result<()> {
//! let mut config = IconSetConfig::new(StyleCatalog::standard());
//! config
//!     .solid()?
//!     .override_style_for_alias(["actions.create", "actions.edit"], "regular")?
//!     .override_alias("actions.delete", IconVariant::new("TrashSolid", "trash-solid"));
//!
//! assert_eq!(config.current_style().unwrap().name(), "solid");
//! # Ok(())
//! # }
//! ```

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::icon::{IconKey, IconVariant};
use crate::layer::{DependencyVersion, OverrideTable};
use crate::style::{Style, StyleCatalog, StyleRef};

// ============================================================================
// OneOrMany
// ============================================================================

/// Setter targets given as a single item or as a sequence.
pub trait OneOrMany<T> {
    fn into_vec(self) -> Vec<T>;
}

impl OneOrMany<String> for &str {
    fn into_vec(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl OneOrMany<String> for String {
    fn into_vec(self) -> Vec<String> {
        vec![self]
    }
}

impl OneOrMany<String> for &String {
    fn into_vec(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: Into<String>> OneOrMany<String> for Vec<S> {
    fn into_vec(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String>, const N: usize> OneOrMany<String> for [S; N] {
    fn into_vec(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String> + Clone> OneOrMany<String> for &[S] {
    fn into_vec(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl OneOrMany<IconKey> for IconKey {
    fn into_vec(self) -> Vec<IconKey> {
        vec![self]
    }
}

impl OneOrMany<IconKey> for IconVariant {
    fn into_vec(self) -> Vec<IconKey> {
        vec![self.into()]
    }
}

impl OneOrMany<IconKey> for &IconVariant {
    fn into_vec(self) -> Vec<IconKey> {
        vec![self.into()]
    }
}

impl OneOrMany<IconKey> for &str {
    fn into_vec(self) -> Vec<IconKey> {
        vec![self.into()]
    }
}

impl OneOrMany<IconKey> for String {
    fn into_vec(self) -> Vec<IconKey> {
        vec![self.into()]
    }
}

impl<K: Into<IconKey>> OneOrMany<IconKey> for Vec<K> {
    fn into_vec(self) -> Vec<IconKey> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<K: Into<IconKey>, const N: usize> OneOrMany<IconKey> for [K; N] {
    fn into_vec(self) -> Vec<IconKey> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<K: Into<IconKey> + Clone> OneOrMany<IconKey> for &[K] {
    fn into_vec(self) -> Vec<IconKey> {
        self.iter().cloned().map(Into::into).collect()
    }
}

// ============================================================================
// IconSetConfig
// ============================================================================

/// Style selection and overrides for one icon set.
#[derive(Debug, Clone)]
pub struct IconSetConfig {
    catalog: StyleCatalog,

    /// The four override layers.
    overrides: OverrideTable,

    current_style: Option<Style>,
    default_style: Option<Style>,

    /// Bumped whenever the current or default style changes.
    style_version: u64,
}

impl IconSetConfig {
    /// Creates an empty configuration for the given catalog.
    pub fn new(catalog: StyleCatalog) -> Self {
        Self {
            catalog,
            overrides: OverrideTable::default(),
            current_style: None,
            default_style: None,
            style_version: 0,
        }
    }

    /// The style catalog setters validate against.
    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// The override layers.
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// The globally selected style, if any.
    pub fn current_style(&self) -> Option<&Style> {
        self.current_style.as_ref()
    }

    /// The configured default style, if any.
    pub fn default_style(&self) -> Option<&Style> {
        self.default_style.as_ref()
    }

    /// The style used when the chosen style yields no valid candidate.
    ///
    /// The configured default style, or else the catalog's first style.
    pub fn fallback_style(&self) -> &Style {
        self.default_style
            .as_ref()
            .unwrap_or_else(|| self.catalog.default_style())
    }

    /// The style that governs `alias` absent any exact override.
    pub fn style_for(&self, alias: &str, default_value: &str) -> &Style {
        self.overrides
            .style_for(alias, default_value)
            .or(self.current_style.as_ref())
            .unwrap_or_else(|| self.fallback_style())
    }

    /// Combined version of all configuration state.
    ///
    /// Changes whenever a setter changes anything.
    pub fn version(&self) -> DependencyVersion {
        let layers = self.overrides.layer_versions();
        DependencyVersion::combine(&[
            layers.alias_exact,
            layers.icon_exact,
            layers.alias_style,
            layers.icon_style,
            self.style_version,
        ])
    }

    // ------------------------------------------------------------------------
    // Styles
    // ------------------------------------------------------------------------

    /// All styles available to this icon set.
    pub fn available_styles(&self) -> &[Style] {
        self.catalog.all()
    }

    /// Names of all styles available to this icon set, in declaration order.
    pub fn available_style_names(&self) -> Vec<&str> {
        self.catalog.names()
    }

    /// Returns true if the style is available to this icon set.
    pub fn has_style(&self, style: impl Into<StyleRef>) -> bool {
        self.catalog.has(style)
    }

    /// Selects the style used for every alias without a style override.
    pub fn set_style(&mut self, style: impl Into<StyleRef>) -> Result<&mut Self> {
        let style = self.catalog.validate(style)?;
        tracing::debug!("Selected style '{}'", style.name());
        if self.current_style.as_ref() != Some(&style) {
            self.current_style = Some(style);
            self.style_version = self.style_version.wrapping_add(1);
        }
        Ok(self)
    }

    /// Sets the style used when nothing else picks one, and as the fallback
    /// when a chosen style has no matching variant.
    pub fn set_default_style(&mut self, style: impl Into<StyleRef>) -> Result<&mut Self> {
        let style = self.catalog.validate(style)?;
        if self.default_style.as_ref() != Some(&style) {
            self.default_style = Some(style);
            self.style_version = self.style_version.wrapping_add(1);
        }
        Ok(self)
    }

    /// Selects a style through its per-style selector name.
    ///
    /// Behaves like [`set_style`](Self::set_style), but an unknown name fails
    /// with [`Error::UnknownSelector`].
    ///
    /// Fluent methods exist only for the standard style names (`.solid()`,
    /// `.duotone()`, ...). Catalogs declaring other styles, such as `thin` or
    /// `brands`, select them through this method.
    pub fn invoke_style_selector(&mut self, name: &str) -> Result<&mut Self> {
        if self.catalog.by_name(name).is_none() {
            return Err(Error::unknown_selector(name, &self.catalog.names()));
        }
        self.set_style(name)
    }

    // ------------------------------------------------------------------------
    // Exact overrides
    // ------------------------------------------------------------------------

    /// Resolves `alias` to `variant`, ignoring all style configuration.
    pub fn override_alias(&mut self, alias: impl Into<String>, variant: IconVariant) -> &mut Self {
        self.overrides.alias_exact.set(alias, variant);
        self
    }

    /// Bulk form of [`override_alias`](Self::override_alias).
    pub fn override_aliases<K: Into<String>>(
        &mut self,
        overrides: impl IntoIterator<Item = (K, IconVariant)>,
    ) -> &mut Self {
        for (alias, variant) in overrides {
            self.overrides.alias_exact.set(alias, variant);
        }
        self
    }

    /// Resolves every alias whose default variant is `from` to `to`.
    pub fn override_icon(&mut self, from: impl Into<IconKey>, to: IconVariant) -> &mut Self {
        self.overrides.icon_exact.set(from.into().into_value(), to);
        self
    }

    /// Bulk form of [`override_icon`](Self::override_icon). Keys may be
    /// variants or raw values.
    pub fn override_icons<K: Into<IconKey>>(
        &mut self,
        overrides: impl IntoIterator<Item = (K, IconVariant)>,
    ) -> &mut Self {
        for (from, to) in overrides {
            self.overrides.icon_exact.set(from.into().into_value(), to);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Style overrides
    // ------------------------------------------------------------------------

    /// Uses `style` for one or more aliases.
    pub fn override_style_for_alias(
        &mut self,
        aliases: impl OneOrMany<String>,
        style: impl Into<StyleRef>,
    ) -> Result<&mut Self> {
        let style = self.catalog.validate(style)?;
        for alias in aliases.into_vec() {
            self.overrides.alias_style.set(alias, style.clone());
        }
        Ok(self)
    }

    /// Uses `style` for every alias whose default variant is one of `icons`.
    pub fn override_style_for_icon(
        &mut self,
        icons: impl OneOrMany<IconKey>,
        style: impl Into<StyleRef>,
    ) -> Result<&mut Self> {
        let style = self.catalog.validate(style)?;
        for icon in icons.into_vec() {
            self.overrides.icon_style.set(icon.into_value(), style.clone());
        }
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Exact overrides keyed by alias.
    pub fn alias_overrides(&self) -> &IndexMap<String, IconVariant> {
        self.overrides.alias_exact.entries()
    }

    /// Exact overrides keyed by default variant value.
    pub fn icon_overrides(&self) -> &IndexMap<String, IconVariant> {
        self.overrides.icon_exact.entries()
    }

    /// Style overrides keyed by alias.
    pub fn alias_style_overrides(&self) -> &IndexMap<String, Style> {
        self.overrides.alias_style.entries()
    }

    /// Style overrides keyed by default variant value.
    pub fn icon_style_overrides(&self) -> &IndexMap<String, Style> {
        self.overrides.icon_style.entries()
    }
}

/// Generates one selector method per standard style name.
macro_rules! style_selectors {
    ($($name:ident),* $(,)?) => {
        impl IconSetConfig {
            $(
                #[doc = concat!(
                    "Selects the `", stringify!($name), "` style.\n\n",
                    "Fails with [`Error::UnknownSelector`] if the catalog does not declare it."
                )]
                pub fn $name(&mut self) -> Result<&mut Self> {
                    self.invoke_style_selector(stringify!($name))
                }
            )*
        }
    };
}

style_selectors!(regular, solid, filled, outline, light, bold, duotone, sharp);
