//! Icon variants and the closed vocabulary of an icon set.
//!
//! An [`IconVariant`] carries two names: the internal identity name
//! (`PlusRegular`, built from a base name and a style suffix) and the
//! externally visible value (`plus-regular`). The [`IconVocabulary`] decides
//! membership by value and indexes variants by identity name for resolution.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::{StyleCatalog, SuffixPosition};

// ============================================================================
// IconVariant
// ============================================================================

/// One concrete icon of an icon set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IconVariant {
    #[serde(rename = "name")]
    identity_name: String,
    value: String,
}

impl IconVariant {
    /// Creates a variant from its identity name and value.
    pub fn new(identity_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identity_name: identity_name.into(),
            value: value.into(),
        }
    }

    /// The internal variant name, conceptually `<BaseName><StyleSuffix>`.
    pub fn identity_name(&self) -> &str {
        &self.identity_name
    }

    /// The stable external identifier.
    pub fn value(&self) -> &str {
        &self.value
    }
}

// ============================================================================
// IconKey
// ============================================================================

/// An icon given either as a variant or by its raw value.
///
/// Icon-level overrides are keyed by value, so both forms address the same
/// override entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconKey {
    Variant(IconVariant),
    Value(String),
}

impl IconKey {
    /// The icon value this key addresses.
    pub fn value(&self) -> &str {
        match self {
            Self::Variant(variant) => variant.value(),
            Self::Value(value) => value,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Self::Variant(variant) => variant.value,
            Self::Value(value) => value,
        }
    }
}

impl From<IconVariant> for IconKey {
    fn from(variant: IconVariant) -> Self {
        Self::Variant(variant)
    }
}

impl From<&IconVariant> for IconKey {
    fn from(variant: &IconVariant) -> Self {
        Self::Variant(variant.clone())
    }
}

impl From<&str> for IconKey {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for IconKey {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

// ============================================================================
// IconVocabulary
// ============================================================================

/// The closed set of valid variants for one icon set, indexed by value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<IconVariant>", into = "Vec<IconVariant>")]
pub struct IconVocabulary {
    variants: IndexMap<String, IconVariant>,

    /// Identity name → value.
    identities: IndexMap<String, String>,
}

impl IconVocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vocabulary from variants. Later duplicates of a value or an
    /// identity name replace earlier ones.
    pub fn from_variants(variants: impl IntoIterator<Item = IconVariant>) -> Self {
        let mut vocabulary = Self::new();
        for variant in variants {
            vocabulary.add_variant(variant);
        }
        vocabulary
    }

    /// Adds a variant to the vocabulary.
    pub fn add_variant(&mut self, variant: IconVariant) {
        if let Some(old) = self.variants.get(&variant.value) {
            if self.identities.get(&old.identity_name) == Some(&old.value) {
                self.identities.shift_remove(&old.identity_name);
            }
        }
        if let Some(old_value) = self
            .identities
            .insert(variant.identity_name.clone(), variant.value.clone())
        {
            if old_value != variant.value {
                self.variants.shift_remove(&old_value);
            }
        }
        self.variants.insert(variant.value.clone(), variant);
    }

    /// Looks up a variant by value.
    pub fn try_by_value(&self, value: &str) -> Option<&IconVariant> {
        self.variants.get(value)
    }

    /// Looks up a variant by identity name.
    pub fn try_by_identity(&self, identity_name: &str) -> Option<&IconVariant> {
        self.identities
            .get(identity_name)
            .and_then(|value| self.variants.get(value))
    }

    /// Returns true if `value` is a member of the vocabulary.
    pub fn contains_value(&self, value: &str) -> bool {
        self.variants.contains_key(value)
    }

    /// The variant's identity name with its trailing style suffix removed.
    ///
    /// The longest matching suffix wins; see [`StyleCatalog::split_suffix`].
    /// A name carrying no declared suffix is returned unchanged.
    pub fn base_name<'a>(&self, variant: &'a IconVariant, catalog: &StyleCatalog) -> &'a str {
        self.base_name_at(variant, catalog, SuffixPosition::Trailing)
    }

    /// Like [`base_name`](Self::base_name), with the suffix at `position`.
    pub fn base_name_at<'a>(
        &self,
        variant: &'a IconVariant,
        catalog: &StyleCatalog,
        position: SuffixPosition,
    ) -> &'a str {
        catalog
            .split_at(&variant.identity_name, position)
            .map_or(variant.identity_name.as_str(), |(base, _)| base)
    }

    /// Returns the number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Returns an iterator over the variants in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &IconVariant> {
        self.variants.values()
    }
}

impl From<Vec<IconVariant>> for IconVocabulary {
    fn from(variants: Vec<IconVariant>) -> Self {
        Self::from_variants(variants)
    }
}

impl From<IconVocabulary> for Vec<IconVariant> {
    fn from(vocabulary: IconVocabulary) -> Self {
        vocabulary.variants.into_values().collect()
    }
}

impl FromIterator<IconVariant> for IconVocabulary {
    fn from_iter<I: IntoIterator<Item = IconVariant>>(iter: I) -> Self {
        Self::from_variants(iter)
    }
}

impl<'a> IntoIterator for &'a IconVocabulary {
    type Item = &'a IconVariant;
    type IntoIter = indexmap::map::Values<'a, String, IconVariant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.values()
    }
}
