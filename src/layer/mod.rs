//! Override layers for icon resolution.
//!
//! Each [`OverrideLayer`] is a keyed, last-write-wins mapping with version
//! tracking. The version increments on every effective change, which lets
//! callers detect when a previously resolved mapping is stale.
//!
//! # Precedence
//!
//! ```text
//! alias exact  ─┐
//! icon exact    │  full bypass: the override is the final variant
//!              ─┘
//! alias style  ─┐
//! icon style    │  choose the style used to build the candidate value
//! current style │
//! default style │
//! catalog default
//!              ─┘
//! ```

use indexmap::IndexMap;

use crate::icon::IconVariant;
use crate::style::Style;

// ============================================================================
// Layer Dependencies
// ============================================================================

/// Represents the combined version of the layers a result depends on.
///
/// This is used to detect when a cached resolution is stale because a layer
/// has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DependencyVersion(u64);

impl DependencyVersion {
    /// Nothing has changed yet.
    pub const NONE: Self = Self(0);

    /// Combines multiple layer versions into one.
    pub fn combine(versions: &[u64]) -> Self {
        Self(versions.iter().fold(0u64, |acc, v| acc.wrapping_add(*v)))
    }
}

// ============================================================================
// Layer Versions
// ============================================================================

/// Snapshot of all override layer versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerVersions {
    pub alias_exact: u64,
    pub icon_exact: u64,
    pub alias_style: u64,
    pub icon_style: u64,
}

// ============================================================================
// Generic Layer
// ============================================================================

/// A keyed override layer with version tracking.
///
/// Keys are aliases or icon values depending on the layer. Writing the same
/// value twice is not a change and leaves the version untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideLayer<V> {
    entries: IndexMap<String, V>,
    version: u64,
}

impl<V> Default for OverrideLayer<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            version: 0,
        }
    }
}

impl<V: PartialEq> OverrideLayer<V> {
    /// Sets the override for `key`. Returns true if it changed.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> bool {
        let key = key.into();
        if self.entries.get(&key) == Some(&value) {
            return false;
        }
        self.entries.insert(key, value);
        self.version = self.version.wrapping_add(1);
        true
    }
}

impl<V> OverrideLayer<V> {
    /// Returns the override for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns true if `key` has an override.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the current version number.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the layer has no overrides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over overrides in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The underlying mapping.
    pub fn entries(&self) -> &IndexMap<String, V> {
        &self.entries
    }
}

// ============================================================================
// Override Table
// ============================================================================

/// The four override layers of an icon set.
///
/// Exact layers replace the final variant outright; style layers only pick
/// the style used to build a candidate. Icon-level layers are keyed by the
/// value of an alias's declared default variant, so aliases sharing a
/// default variant share the override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    /// Alias → variant.
    pub alias_exact: OverrideLayer<IconVariant>,

    /// Default variant value → variant.
    pub icon_exact: OverrideLayer<IconVariant>,

    /// Alias → style.
    pub alias_style: OverrideLayer<Style>,

    /// Default variant value → style.
    pub icon_style: OverrideLayer<Style>,
}

impl OverrideTable {
    /// Returns a snapshot of all layer versions.
    pub fn layer_versions(&self) -> LayerVersions {
        LayerVersions {
            alias_exact: self.alias_exact.version(),
            icon_exact: self.icon_exact.version(),
            alias_style: self.alias_style.version(),
            icon_style: self.icon_style.version(),
        }
    }

    /// The exact override for an alias, checking the alias layer first.
    pub fn exact_for(&self, alias: &str, default_value: &str) -> Option<&IconVariant> {
        self.alias_exact
            .get(alias)
            .or_else(|| self.icon_exact.get(default_value))
    }

    /// The style override for an alias, checking the alias layer first.
    pub fn style_for(&self, alias: &str, default_value: &str) -> Option<&Style> {
        self.alias_style
            .get(alias)
            .or_else(|| self.icon_style.get(default_value))
    }

    /// Returns true if no layer has any override.
    pub fn is_empty(&self) -> bool {
        self.alias_exact.is_empty()
            && self.icon_exact.is_empty()
            && self.alias_style.is_empty()
            && self.icon_style.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_set_tracks_changes() {
        let mut layer = OverrideLayer::default();
        assert_eq!(layer.version(), 0);

        assert!(layer.set("actions.create", Style::new("solid", "Solid")));
        assert_eq!(layer.version(), 1);

        // Same value: no change
        assert!(!layer.set("actions.create", Style::new("solid", "Solid")));
        assert_eq!(layer.version(), 1);

        // Last write wins
        assert!(layer.set("actions.create", Style::new("regular", "Regular")));
        assert_eq!(layer.version(), 2);
        assert_eq!(layer.get("actions.create").unwrap().name(), "regular");
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn exact_alias_beats_exact_icon() {
        let mut table = OverrideTable::default();
        table
            .icon_exact
            .set("plus-regular", IconVariant::new("PlusSolid", "plus-solid"));
        assert_eq!(
            table.exact_for("actions.create", "plus-regular").unwrap().value(),
            "plus-solid"
        );

        table
            .alias_exact
            .set("actions.create", IconVariant::new("TrashSolid", "trash-solid"));
        assert_eq!(
            table.exact_for("actions.create", "plus-regular").unwrap().value(),
            "trash-solid"
        );
        assert!(table.exact_for("actions.delete", "trash-regular").is_none());
    }

    #[test]
    fn style_alias_beats_style_icon() {
        let mut table = OverrideTable::default();
        table.icon_style.set("plus-regular", Style::new("solid", "Solid"));
        table
            .alias_style
            .set("actions.create", Style::new("regular", "Regular"));

        assert_eq!(
            table.style_for("actions.create", "plus-regular").unwrap().name(),
            "regular"
        );
        assert_eq!(
            table.style_for("actions.edit", "plus-regular").unwrap().name(),
            "solid"
        );
    }

    #[test]
    fn layer_versions_snapshot() {
        let mut table = OverrideTable::default();
        assert_eq!(table.layer_versions(), LayerVersions::default());
        assert!(table.is_empty());

        table.icon_style.set("plus-regular", Style::new("solid", "Solid"));
        let versions = table.layer_versions();
        assert_eq!(versions.icon_style, 1);
        assert_eq!(versions.alias_style, 0);
        assert!(!table.is_empty());
    }

    #[test]
    fn combine_sums_versions() {
        assert_eq!(DependencyVersion::combine(&[]), DependencyVersion::NONE);
        assert_ne!(DependencyVersion::combine(&[1, 2]), DependencyVersion::NONE);
        assert_eq!(
            DependencyVersion::combine(&[1, 2]),
            DependencyVersion::combine(&[2, 1])
        );
    }
}
