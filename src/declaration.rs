//! Icon set declarations.
//!
//! An [`IconSetDeclaration`] is the immutable description of one icon set:
//! its style catalog, the closed vocabulary of variants, the alias map, and
//! the settings that shape identity names. Declarations are built in code or
//! loaded from JSON:
//!
//! ```json
//! {
//!   "id": "test-icons",
//!   "prefix": "test",
//!   "suffixPosition": "trailing",
//!   "styles": [{ "name": "regular", "suffix": "Regular" }],
//!   "icons": [{ "name": "PlusRegular", "value": "plus-regular" }],
//!   "aliases": { "actions.create": "plus-regular" }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::icon::{IconVariant, IconVocabulary};
use crate::style::{StyleCatalog, SuffixPosition};

// ============================================================================
// IconSetDeclaration
// ============================================================================

/// The static description of an icon set.
#[derive(Debug, Clone)]
pub struct IconSetDeclaration {
    id: String,
    styles: StyleCatalog,
    vocabulary: IconVocabulary,
    aliases: IndexMap<String, IconVariant>,
    prefix: Option<String>,
    suffix_position: SuffixPosition,
    default_style: Option<String>,
}

impl IconSetDeclaration {
    /// Creates a declaration with no aliases.
    pub fn new(id: impl Into<String>, styles: StyleCatalog, vocabulary: IconVocabulary) -> Self {
        Self {
            id: id.into(),
            styles,
            vocabulary,
            aliases: IndexMap::new(),
            prefix: None,
            suffix_position: SuffixPosition::default(),
            default_style: None,
        }
    }

    /// Maps an alias to its default variant.
    pub fn with_alias(mut self, alias: impl Into<String>, variant: IconVariant) -> Self {
        self.aliases.insert(alias.into(), variant);
        self
    }

    /// Maps several aliases to their default variants.
    pub fn with_aliases<K: Into<String>>(
        mut self,
        aliases: impl IntoIterator<Item = (K, IconVariant)>,
    ) -> Self {
        self.aliases
            .extend(aliases.into_iter().map(|(alias, variant)| (alias.into(), variant)));
        self
    }

    /// Prefixes every resolved value with `<prefix>-`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets where style suffixes sit in identity names.
    pub fn with_suffix_position(mut self, position: SuffixPosition) -> Self {
        self.suffix_position = position;
        self
    }

    /// Names the style used as the initial default style.
    pub fn with_default_style(mut self, name: impl Into<String>) -> Self {
        self.default_style = Some(name.into());
        self
    }

    /// Checks that every alias points into the vocabulary and that the
    /// default style, if named, is declared.
    pub fn validate(&self) -> Result<()> {
        if let Some(variant) = self
            .aliases
            .values()
            .find(|variant| !self.vocabulary.contains_value(variant.value()))
        {
            return Err(Error::unknown_icon(variant.value()));
        }
        if let Some(name) = &self.default_style {
            self.styles.validate(name)?;
        }
        Ok(())
    }

    /// Parses and validates a JSON declaration.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DeclarationFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    /// Serializes the declaration to its JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&DeclarationFile::from(self))?)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn styles(&self) -> &StyleCatalog {
        &self.styles
    }

    pub fn vocabulary(&self) -> &IconVocabulary {
        &self.vocabulary
    }

    /// Aliases and their default variants, in declaration order.
    pub fn aliases(&self) -> &IndexMap<String, IconVariant> {
        &self.aliases
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix_position(&self) -> SuffixPosition {
        self.suffix_position
    }

    pub fn default_style(&self) -> Option<&str> {
        self.default_style.as_deref()
    }
}

// ============================================================================
// DeclarationFile
// ============================================================================

/// The serializable form of an [`IconSetDeclaration`].
///
/// Aliases refer to variants by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct DeclarationFile {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default)]
    pub suffix_position: SuffixPosition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,

    /// Styles in declaration order. Must not be empty.
    #[cfg_attr(feature = "jsonschema", schemars(with = "Vec<crate::style::Style>"))]
    pub styles: StyleCatalog,

    #[cfg_attr(feature = "jsonschema", schemars(with = "Vec<IconVariant>"))]
    pub icons: IconVocabulary,

    /// Alias → default variant value.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

impl TryFrom<DeclarationFile> for IconSetDeclaration {
    type Error = Error;

    fn try_from(file: DeclarationFile) -> Result<Self> {
        let aliases = file
            .aliases
            .into_iter()
            .map(|(alias, value)| {
                let variant = file
                    .icons
                    .try_by_value(&value)
                    .cloned()
                    .ok_or_else(|| Error::unknown_icon(&value))?;
                Ok::<_, Error>((alias, variant))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        let declaration = Self {
            id: file.id,
            styles: file.styles,
            vocabulary: file.icons,
            aliases,
            prefix: file.prefix,
            suffix_position: file.suffix_position,
            default_style: file.default_style,
        };
        declaration.validate()?;
        Ok(declaration)
    }
}

impl From<&IconSetDeclaration> for DeclarationFile {
    fn from(declaration: &IconSetDeclaration) -> Self {
        Self {
            id: declaration.id.clone(),
            prefix: declaration.prefix.clone(),
            suffix_position: declaration.suffix_position,
            default_style: declaration.default_style.clone(),
            styles: declaration.styles.clone(),
            icons: declaration.vocabulary.clone(),
            aliases: declaration
                .aliases
                .iter()
                .map(|(alias, variant)| (alias.clone(), variant.value().to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "id": "test-icons",
        "prefix": "test",
        "styles": [
            { "name": "regular", "suffix": "Regular" },
            { "name": "solid", "suffix": "Solid" }
        ],
        "icons": [
            { "name": "PlusRegular", "value": "plus-regular" },
            { "name": "PlusSolid", "value": "plus-solid" }
        ],
        "aliases": { "actions.create": "plus-regular" }
    }"#;

    #[test]
    fn parses_json_declaration_with_defaults() {
        let declaration = IconSetDeclaration::from_json(JSON).unwrap();

        assert_eq!(declaration.id(), "test-icons");
        assert_eq!(declaration.prefix(), Some("test"));
        assert_eq!(declaration.suffix_position(), SuffixPosition::Trailing);
        assert_eq!(declaration.styles().names(), ["regular", "solid"]);
        assert_eq!(declaration.vocabulary().len(), 2);
        assert_eq!(
            declaration.aliases()["actions.create"].identity_name(),
            "PlusRegular"
        );
    }

    #[test]
    fn alias_to_unknown_value_is_rejected() {
        let json = JSON.replace(r#""actions.create": "plus-regular""#, r#""actions.create": "plus-thin""#);
        let err = IconSetDeclaration::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::UnknownIcon { ref value } if value == "plus-thin"));
    }

    #[test]
    fn empty_style_list_is_rejected() {
        let json = r#"{ "id": "x", "styles": [], "icons": [] }"#;
        assert!(matches!(
            IconSetDeclaration::from_json(json),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn unknown_default_style_is_rejected() {
        let declaration = IconSetDeclaration::new(
            "x",
            StyleCatalog::standard(),
            IconVocabulary::new(),
        )
        .with_default_style("heavy");
        assert!(matches!(
            declaration.validate(),
            Err(Error::InvalidStyle { .. })
        ));
    }

    #[test]
    fn builder_keeps_alias_order() {
        let declaration = IconSetDeclaration::new(
            "x",
            StyleCatalog::standard(),
            IconVocabulary::new(),
        )
        .with_alias("b", IconVariant::new("B", "b"))
        .with_aliases([("a", IconVariant::new("A", "a"))])
        .with_suffix_position(SuffixPosition::Leading);

        let aliases: Vec<&str> = declaration.aliases().keys().map(String::as_str).collect();
        assert_eq!(aliases, ["b", "a"]);
        assert_eq!(declaration.suffix_position(), SuffixPosition::Leading);
    }

    #[test]
    fn json_form_round_trips_through_declaration() {
        let declaration = IconSetDeclaration::from_json(JSON).unwrap();
        let json = declaration.to_json().unwrap();
        assert!(json.contains("\"suffixPosition\": \"trailing\""));

        let restored = IconSetDeclaration::from_json(&json).unwrap();
        assert_eq!(restored.aliases(), declaration.aliases());
        assert_eq!(restored.prefix(), declaration.prefix());
    }
}
