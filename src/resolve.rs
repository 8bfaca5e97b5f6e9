//! Alias resolution.
//!
//! The [`ResolutionEngine`] turns an icon set's declared alias map into the
//! final alias → identifier mapping. For each alias, in declaration order:
//!
//! 1. An exact alias override, then an exact icon override, is used as is.
//! 2. Otherwise a style is chosen: alias style override, icon style
//!    override, current style, default style, catalog default.
//! 3. The candidate identity name is the default variant's base name joined
//!    with the chosen style's suffix. If the vocabulary lacks it, the
//!    candidate for the default style is tried instead.
//! 4. If that is missing too, the alias keeps its declared default variant
//!    and is reported as degraded.
//!
//! The configured prefix, if any, is prepended as `<prefix>-<value>`.

use indexmap::IndexMap;

use crate::config::IconSetConfig;
use crate::declaration::IconSetDeclaration;
use crate::icon::IconVariant;

// ============================================================================
// Resolution
// ============================================================================

/// The output of one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    icons: IndexMap<String, String>,
    degraded: Vec<String>,
}

impl Resolution {
    /// Resolved identifiers keyed by alias, in declaration order.
    pub fn icons(&self) -> &IndexMap<String, String> {
        &self.icons
    }

    /// The resolved identifier for `alias`.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.icons.get(alias).map(String::as_str)
    }

    /// Aliases whose style candidates were all missing from the vocabulary
    /// and that resolved to their declared default variant instead.
    pub fn degraded(&self) -> &[String] {
        &self.degraded
    }

    /// Number of resolved aliases.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if no alias was resolved.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Consumes the resolution, returning the alias → identifier map.
    pub fn into_icons(self) -> IndexMap<String, String> {
        self.icons
    }
}

// ============================================================================
// ResolutionEngine
// ============================================================================

/// Outcome of resolving a single alias.
enum Resolved<'a> {
    Found(&'a IconVariant),
    Degraded(&'a IconVariant),
}

/// Resolves a declaration's aliases under a configuration.
///
/// The engine only borrows its inputs; resolving twice with the same inputs
/// yields the same output.
pub struct ResolutionEngine<'a> {
    declaration: &'a IconSetDeclaration,
    config: &'a IconSetConfig,
}

impl<'a> ResolutionEngine<'a> {
    pub fn new(declaration: &'a IconSetDeclaration, config: &'a IconSetConfig) -> Self {
        Self {
            declaration,
            config,
        }
    }

    /// Runs one resolution pass over every declared alias.
    pub fn resolve(&self) -> Resolution {
        let mut resolution = Resolution::default();

        for (alias, default) in self.declaration.aliases() {
            let variant = match self.resolve_variant(alias, default) {
                Resolved::Found(variant) => variant,
                Resolved::Degraded(variant) => {
                    resolution.degraded.push(alias.clone());
                    variant
                }
            };
            resolution
                .icons
                .insert(alias.clone(), self.identifier(variant));
        }

        tracing::debug!(
            "Resolved {} aliases for icon set '{}' ({} degraded)",
            resolution.icons.len(),
            self.declaration.id(),
            resolution.degraded.len()
        );
        resolution
    }

    /// Resolves one alias to its final variant.
    fn resolve_variant(&self, alias: &str, default: &'a IconVariant) -> Resolved<'a> {
        let overrides = self.config.overrides();
        if let Some(exact) = overrides.exact_for(alias, default.value()) {
            return Resolved::Found(exact);
        }

        let vocabulary = self.declaration.vocabulary();
        let position = self.declaration.suffix_position();

        let style = self.config.style_for(alias, default.value());
        let base = vocabulary.base_name_at(default, self.config.catalog(), position);

        let candidate = position.compose(base, style.suffix());
        if let Some(found) = vocabulary.try_by_identity(&candidate) {
            return Resolved::Found(found);
        }

        let fallback = position.compose(base, self.config.fallback_style().suffix());
        if let Some(found) = vocabulary.try_by_identity(&fallback) {
            return Resolved::Found(found);
        }

        tracing::warn!(
            "No variant '{}' or '{}' for alias '{}'; keeping '{}'",
            candidate,
            fallback,
            alias,
            default.value()
        );
        Resolved::Degraded(default)
    }

    /// The externally visible identifier for a variant.
    fn identifier(&self, variant: &IconVariant) -> String {
        match self.declaration.prefix() {
            Some(prefix) => format!("{prefix}-{}", variant.value()),
            None => variant.value().to_string(),
        }
    }
}

/// Resolves a declaration's aliases under `config`.
pub fn resolve(declaration: &IconSetDeclaration, config: &IconSetConfig) -> Resolution {
    ResolutionEngine::new(declaration, config).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconVocabulary;
    use crate::style::{Style, StyleCatalog, SuffixPosition};
    use proptest::prelude::*;

    fn catalog() -> StyleCatalog {
        StyleCatalog::new([Style::new("regular", "Regular"), Style::new("solid", "Solid")])
            .unwrap()
    }

    fn variant(identity: &str, value: &str) -> IconVariant {
        IconVariant::new(identity, value)
    }

    fn vocabulary() -> IconVocabulary {
        IconVocabulary::from_variants([
            variant("PlusRegular", "plus-regular"),
            variant("PlusSolid", "plus-solid"),
            variant("TrashRegular", "trash-regular"),
            variant("TrashSolid", "trash-solid"),
            variant("SearchRegular", "search-regular"),
        ])
    }

    fn declaration() -> IconSetDeclaration {
        IconSetDeclaration::new("test-icons", catalog(), vocabulary())
            .with_alias("actions.create", variant("PlusRegular", "plus-regular"))
            .with_alias("actions.delete", variant("TrashRegular", "trash-regular"))
            .with_alias("actions.search", variant("SearchRegular", "search-regular"))
    }

    fn config() -> IconSetConfig {
        IconSetConfig::new(catalog())
    }

    #[test]
    fn unconfigured_uses_catalog_default() {
        let resolution = resolve(&declaration(), &config());
        assert_eq!(resolution.get("actions.create"), Some("plus-regular"));
        assert_eq!(resolution.get("actions.delete"), Some("trash-regular"));
        assert!(resolution.degraded().is_empty());
    }

    #[test]
    fn output_follows_declaration_order() {
        let resolution = resolve(&declaration(), &config());
        let aliases: Vec<&str> = resolution.icons().keys().map(String::as_str).collect();
        assert_eq!(aliases, ["actions.create", "actions.delete", "actions.search"]);
    }

    #[test]
    fn solid_selector_switches_variant() {
        let mut config = config();
        config.solid().unwrap();

        let resolution = resolve(&declaration(), &config);
        assert_eq!(resolution.get("actions.create"), Some("plus-solid"));
    }

    #[test]
    fn prefix_is_prepended() {
        let mut config = config();
        config.solid().unwrap();

        let declaration = declaration().with_prefix("prefix");
        let resolution = resolve(&declaration, &config);
        assert_eq!(resolution.get("actions.create"), Some("prefix-plus-solid"));
    }

    #[test]
    fn alias_style_override_reverts_global_style() {
        let mut config = config();
        config
            .solid()
            .unwrap()
            .override_style_for_alias("actions.create", "regular")
            .unwrap();

        let resolution = resolve(&declaration(), &config);
        assert_eq!(resolution.get("actions.create"), Some("plus-regular"));
        assert_eq!(resolution.get("actions.delete"), Some("trash-solid"));
    }

    #[test]
    fn exact_alias_override_ignores_styles() {
        let mut config = config();
        config
            .solid()
            .unwrap()
            .override_style_for_alias("actions.create", "regular")
            .unwrap()
            .override_alias("actions.create", variant("TrashSolid", "trash-solid"));

        let resolution = resolve(&declaration(), &config);
        assert_eq!(resolution.get("actions.create"), Some("trash-solid"));
    }

    #[test]
    fn icon_overrides_apply_to_every_alias_sharing_the_default() {
        let declaration = declaration()
            .with_alias("actions.add", variant("PlusRegular", "plus-regular"));

        let mut config = config();
        config
            .override_style_for_icon("plus-regular", "solid")
            .unwrap();
        let resolution = resolve(&declaration, &config);
        assert_eq!(resolution.get("actions.create"), Some("plus-solid"));
        assert_eq!(resolution.get("actions.add"), Some("plus-solid"));
        assert_eq!(resolution.get("actions.delete"), Some("trash-regular"));

        config.override_icon("plus-regular", variant("SearchRegular", "search-regular"));
        let resolution = resolve(&declaration, &config);
        assert_eq!(resolution.get("actions.create"), Some("search-regular"));
        assert_eq!(resolution.get("actions.add"), Some("search-regular"));
    }

    #[test]
    fn missing_candidate_falls_back_to_default_style() {
        let catalog = StyleCatalog::new([
            Style::new("regular", "Regular"),
            Style::new("solid", "Solid"),
            Style::new("filled", "Filled"),
        ])
        .unwrap();
        let declaration = IconSetDeclaration::new("test-icons", catalog.clone(), vocabulary())
            .with_alias("actions.create", variant("PlusRegular", "plus-regular"));

        let mut config = IconSetConfig::new(catalog);
        config.set_default_style("regular").unwrap().filled().unwrap();

        let resolution = resolve(&declaration, &config);
        assert_eq!(resolution.get("actions.create"), Some("plus-regular"));
        assert!(resolution.degraded().is_empty());
    }

    #[test]
    fn missing_fallback_keeps_declared_default() {
        let declaration = IconSetDeclaration::new(
            "test-icons",
            catalog(),
            IconVocabulary::from_variants([variant("Github", "github")]),
        )
        .with_alias("brand.github", variant("Github", "github"));

        let mut config = config();
        config.solid().unwrap();

        let resolution = resolve(&declaration, &config);
        assert_eq!(resolution.get("brand.github"), Some("github"));
        assert_eq!(resolution.degraded(), ["brand.github"]);
    }

    #[test]
    fn leading_suffix_identities() {
        let vocabulary = IconVocabulary::from_variants([
            variant("RegularPlus", "regular_plus"),
            variant("SolidPlus", "solid_plus"),
        ]);
        let declaration = IconSetDeclaration::new("test-icons", catalog(), vocabulary)
            .with_suffix_position(SuffixPosition::Leading)
            .with_alias("actions.create", variant("RegularPlus", "regular_plus"));

        let mut config = config();
        config.solid().unwrap();

        let resolution = resolve(&declaration, &config);
        assert_eq!(resolution.get("actions.create"), Some("solid_plus"));
    }

    #[test]
    fn candidate_uses_style_suffix_not_name() {
        let catalog =
            StyleCatalog::new([Style::new("regular", "Regular"), Style::new("solid", "Fill")])
                .unwrap();
        let vocabulary = IconVocabulary::from_variants([
            variant("PlusRegular", "plus-regular"),
            variant("PlusFill", "plus-fill"),
        ]);
        let declaration = IconSetDeclaration::new("test-icons", catalog.clone(), vocabulary)
            .with_alias("actions.create", variant("PlusRegular", "plus-regular"));

        let mut config = IconSetConfig::new(catalog);
        config.solid().unwrap();

        let resolution = resolve(&declaration, &config);
        assert_eq!(resolution.get("actions.create"), Some("plus-fill"));
        assert!(resolution.degraded().is_empty());
    }

    #[test]
    fn values_need_not_mirror_identity_names() {
        let vocabulary = IconVocabulary::from_variants([
            variant("PlusRegular", "add"),
            variant("PlusSolid", "add-heavy"),
        ]);
        let declaration = IconSetDeclaration::new("test-icons", catalog(), vocabulary)
            .with_alias("actions.create", variant("PlusRegular", "add"));

        let mut config = config();
        config.solid().unwrap();

        let resolution = resolve(&declaration, &config);
        assert_eq!(resolution.get("actions.create"), Some("add-heavy"));
    }

    #[test]
    fn precedence_highest_layer_governs() {
        let catalog = StyleCatalog::standard();
        let vocabulary: IconVocabulary = catalog
            .iter()
            .map(|style| {
                variant(
                    &format!("Plus{}", style.suffix()),
                    &format!("plus-{}", style.name()),
                )
            })
            .chain([
                variant("StarSolid", "star-solid"),
                variant("TrashSolid", "trash-solid"),
            ])
            .collect();
        let declaration = IconSetDeclaration::new("test-icons", catalog.clone(), vocabulary)
            .with_alias("actions.create", variant("PlusRegular", "plus-regular"));

        let mut config = IconSetConfig::new(catalog);
        let resolved = |config: &IconSetConfig| {
            resolve(&declaration, config)
                .get("actions.create")
                .map(str::to_string)
        };

        // Each layer added outranks every layer added before it.
        assert_eq!(resolved(&config).as_deref(), Some("plus-regular"));

        config.set_default_style("light").unwrap();
        assert_eq!(resolved(&config).as_deref(), Some("plus-light"));

        config.bold().unwrap();
        assert_eq!(resolved(&config).as_deref(), Some("plus-bold"));

        config.override_style_for_icon("plus-regular", "duotone").unwrap();
        assert_eq!(resolved(&config).as_deref(), Some("plus-duotone"));

        config.override_style_for_alias("actions.create", "sharp").unwrap();
        assert_eq!(resolved(&config).as_deref(), Some("plus-sharp"));

        config.override_icon("plus-regular", variant("StarSolid", "star-solid"));
        assert_eq!(resolved(&config).as_deref(), Some("star-solid"));

        config.override_alias("actions.create", variant("TrashSolid", "trash-solid"));
        assert_eq!(resolved(&config).as_deref(), Some("trash-solid"));
    }

    proptest! {
        #[test]
        fn resolving_twice_is_identical(
            style_index in 0usize..2,
            override_alias in prop::bool::ANY,
        ) {
            let declaration = declaration();
            let mut config = config();
            let name = catalog().names()[style_index].to_string();
            config.set_style(name.as_str()).unwrap();
            if override_alias {
                config.override_style_for_alias("actions.delete", "regular").unwrap();
            }

            prop_assert_eq!(resolve(&declaration, &config), resolve(&declaration, &config));
        }

        #[test]
        fn no_overrides_means_selected_style(style_index in 0usize..2) {
            let declaration = declaration();
            let mut config = config();
            let style = catalog().all()[style_index].clone();
            config.set_style(&style).unwrap();

            let resolution = resolve(&declaration, &config);
            prop_assert_eq!(
                resolution.get("actions.create").unwrap(),
                format!("plus-{}", style.name())
            );
        }
    }
}
