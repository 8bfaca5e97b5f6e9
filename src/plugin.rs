//! Icon set lifecycle: configuration, cached resolution, and registration.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::IconSetConfig;
use crate::declaration::IconSetDeclaration;
use crate::error::{Error, Result};
use crate::icon::IconVariant;
use crate::layer::DependencyVersion;
use crate::profile::OverrideProfile;
use crate::resolve::{Resolution, ResolutionEngine};
use crate::style::Style;

// ============================================================================
// IconRegistry
// ============================================================================

/// A sink that receives the final alias → identifier mapping.
pub trait IconRegistry {
    /// Registers resolved icons. Later registrations of an alias replace
    /// earlier ones.
    fn register(&mut self, icons: IndexMap<String, String>);
}

impl IconRegistry for IndexMap<String, String> {
    fn register(&mut self, icons: IndexMap<String, String>) {
        self.extend(icons);
    }
}

impl IconRegistry for HashMap<String, String> {
    fn register(&mut self, icons: IndexMap<String, String>) {
        self.extend(icons);
    }
}

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from an [`OverrideProfile`].
pub trait Configurable {
    /// Applies a profile's settings on top of the current configuration.
    ///
    /// Nothing is written unless every style and icon in the profile is
    /// valid.
    fn apply_profile(&mut self, profile: &OverrideProfile) -> Result<()>;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> OverrideProfile;
}

// ============================================================================
// IconSet
// ============================================================================

/// An icon set: a declaration plus its configuration.
///
/// Configure through [`config_mut`](Self::config_mut), then call
/// [`boot`](Self::boot) to hand the resolved icons to a registry. The last
/// resolution is cached until the configuration changes.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use icon_alias::{IconSet, IconSetDeclaration, IconVariant, IconVocabulary, StyleCatalog};
///
/// # fn main() -> icon_alias::Result<()> {
/// let vocabulary = IconVocabulary::from_variants([
///     IconVariant::new("PlusRegular", "plus-regular"),
///     IconVariant::new("PlusSolid", "plus-solid"),
/// ]);
/// let declaration = IconSetDeclaration::new("test-icons", StyleCatalog::standard(), vocabulary)
///     .with_alias("actions.create", IconVariant::new("PlusRegular", "plus-regular"));
///
/// let mut icons = IconSet::new(declaration)?;
/// icons.config_mut().solid()?;
///
/// let mut registry: IndexMap<String, String> = IndexMap::new();
/// icons.boot(&mut registry);
/// assert_eq!(registry["actions.create"], "plus-solid");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IconSet {
    declaration: IconSetDeclaration,
    config: IconSetConfig,

    /// Last resolution and the configuration version it was computed at.
    resolved: Option<(Resolution, DependencyVersion)>,
}

impl IconSet {
    /// Creates an icon set from a validated declaration.
    ///
    /// The declaration's default style, if any, seeds the configuration.
    pub fn new(declaration: IconSetDeclaration) -> Result<Self> {
        declaration.validate()?;

        let mut config = IconSetConfig::new(declaration.styles().clone());
        if let Some(name) = declaration.default_style() {
            config.set_default_style(name)?;
        }

        Ok(Self {
            declaration,
            config,
            resolved: None,
        })
    }

    /// Creates an icon set from a JSON declaration.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(IconSetDeclaration::from_json(json)?)
    }

    /// The icon set's identifier.
    pub fn id(&self) -> &str {
        self.declaration.id()
    }

    pub fn declaration(&self) -> &IconSetDeclaration {
        &self.declaration
    }

    pub fn config(&self) -> &IconSetConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Drops the cached resolution: the configuration may be replaced
    /// wholesale, which its version counter cannot track.
    pub fn config_mut(&mut self) -> &mut IconSetConfig {
        self.resolved = None;
        &mut self.config
    }

    /// Resolves every alias, reusing the last result if nothing changed.
    pub fn resolve(&mut self) -> &Resolution {
        let version = self.config.version();
        let cached = self
            .resolved
            .take()
            .filter(|(_, resolved_at)| *resolved_at == version);
        let entry = cached.unwrap_or_else(|| {
            let resolution = ResolutionEngine::new(&self.declaration, &self.config).resolve();
            (resolution, version)
        });
        &self.resolved.insert(entry).0
    }

    /// Returns true if a resolution is cached for the current configuration.
    pub fn is_resolved(&self) -> bool {
        self.resolved
            .as_ref()
            .is_some_and(|(_, resolved_at)| *resolved_at == self.config.version())
    }

    /// Runs one resolution pass and registers the result.
    pub fn boot(&mut self, registry: &mut impl IconRegistry) {
        tracing::debug!("Booting icon set '{}'", self.id());
        let icons = self.resolve().icons().clone();
        registry.register(icons);
    }

    fn variant(&self, value: &str) -> Result<IconVariant> {
        self.declaration
            .vocabulary()
            .try_by_value(value)
            .cloned()
            .ok_or_else(|| Error::unknown_icon(value))
    }
}

impl Configurable for IconSet {
    /// Applies a profile's settings to this icon set.
    ///
    /// # Example
    ///
    /// ```
    /// use icon_alias::{Configurable, IconSet, OverrideProfile};
    ///
    /// let json = r#"{
    ///     "id": "test-icons",
    ///     "styles": [
    ///         { "name": "regular", "suffix": "Regular" },
    ///         { "name": "solid", "suffix": "Solid" }
    ///     ],
    ///     "icons": [
    ///         { "name": "PlusRegular", "value": "plus-regular" },
    ///         { "name": "PlusSolid", "value": "plus-solid" }
    ///     ],
    ///     "aliases": { "actions.create": "plus-regular" }
    /// }"#;
    /// let mut icons = IconSet::from_json(json).unwrap();
    ///
    /// icons.apply_profile(&OverrideProfile::new().with_style("solid")).unwrap();
    /// assert_eq!(icons.resolve().get("actions.create"), Some("plus-solid"));
    /// ```
    fn apply_profile(&mut self, profile: &OverrideProfile) -> Result<()> {
        let catalog = self.config.catalog();
        let validate = |name: &Option<String>| -> Result<Option<Style>> {
            name.as_deref().map(|name| catalog.validate(name)).transpose()
        };
        let style = validate(&profile.style)?;
        let default_style = validate(&profile.default_style)?;

        let aliases = profile
            .aliases
            .iter()
            .map(|(alias, value)| Ok::<_, Error>((alias.clone(), self.variant(value)?)))
            .collect::<Result<Vec<_>>>()?;
        let icons = profile
            .icons
            .iter()
            .map(|(from, to)| Ok::<_, Error>((from.clone(), self.variant(to)?)))
            .collect::<Result<Vec<_>>>()?;
        let alias_styles = profile
            .alias_styles
            .iter()
            .map(|(alias, name)| Ok::<_, Error>((alias.clone(), catalog.validate(name)?)))
            .collect::<Result<Vec<_>>>()?;
        let icon_styles = profile
            .icon_styles
            .iter()
            .map(|(icon, name)| Ok::<_, Error>((icon.clone(), catalog.validate(name)?)))
            .collect::<Result<Vec<_>>>()?;

        let config = &mut self.config;
        if let Some(style) = style {
            config.set_style(style)?;
        }
        if let Some(style) = default_style {
            config.set_default_style(style)?;
        }
        config.override_aliases(aliases).override_icons(icons);
        for (alias, style) in alias_styles {
            config.override_style_for_alias(alias, style)?;
        }
        for (icon, style) in icon_styles {
            config.override_style_for_icon(icon, style)?;
        }
        Ok(())
    }

    /// Exports the current configuration as a profile.
    fn export_profile(&self) -> OverrideProfile {
        let names = |styles: &IndexMap<String, Style>| -> IndexMap<String, String> {
            styles
                .iter()
                .map(|(key, style)| (key.clone(), style.name().to_string()))
                .collect()
        };
        let values = |variants: &IndexMap<String, IconVariant>| -> IndexMap<String, String> {
            variants
                .iter()
                .map(|(key, variant)| (key.clone(), variant.value().to_string()))
                .collect()
        };

        OverrideProfile {
            style: self.config.current_style().map(|s| s.name().to_string()),
            default_style: self.config.default_style().map(|s| s.name().to_string()),
            aliases: values(self.config.alias_overrides()),
            icons: values(self.config.icon_overrides()),
            alias_styles: names(self.config.alias_style_overrides()),
            icon_styles: names(self.config.icon_style_overrides()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
