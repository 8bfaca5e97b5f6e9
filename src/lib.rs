//! icon-alias: Style-aware icon alias resolution
//!
//! This crate resolves stable alias names (`"actions.create"`) into concrete
//! icon identifiers (`"plus-solid"`) drawn from an icon set's closed
//! vocabulary, under a layered override and style configuration.
//!
//! # Example
//!
//! ```
//! use icon_alias::{
//!     IconSet, IconSetDeclaration, IconVariant, IconVocabulary, Style, StyleCatalog,
//! };
//!
//! # fn main() -> icon_alias::Result<()> {
//! let styles = StyleCatalog::new([
//!     Style::new("regular", "Regular"),
//!     Style::new("solid", "Solid"),
//! ])?;
//! let vocabulary = IconVocabulary::from_variants([
//!     IconVariant::new("PlusRegular", "plus-regular"),
//!     IconVariant::new("PlusSolid", "plus-solid"),
//!     IconVariant::new("TrashRegular", "trash-regular"),
//!     IconVariant::new("TrashSolid", "trash-solid"),
//! ]);
//! let declaration = IconSetDeclaration::new("test-icons", styles, vocabulary)
//!     .with_alias("actions.create", IconVariant::new("PlusRegular", "plus-regular"))
//!     .with_alias("actions.delete", IconVariant::new("TrashRegular", "trash-regular"));
//!
//! let mut icons = IconSet::new(declaration)?;
//!
//! // Select solid globally, but keep the create action regular
//! icons
//!     .config_mut()
//!     .solid()?
//!     .override_style_for_alias("actions.create", "regular")?;
//!
//! let resolution = icons.resolve();
//! assert_eq!(resolution.get("actions.create"), Some("plus-regular"));
//! assert_eq!(resolution.get("actions.delete"), Some("trash-solid"));
//! # Ok(())
//! # }
//! ```
//!
//! # Serializable Profiles
//!
//! Overrides can be stored as an [`OverrideProfile`] and applied with the
//! [`Configurable`] trait:
//!
//! ```
//! use icon_alias::{Configurable, IconSet, OverrideProfile};
//!
//! let mut icons = IconSet::from_json(r#"{
//!     "id": "test-icons",
//!     "styles": [{ "name": "regular", "suffix": "Regular" }],
//!     "icons": [{ "name": "PlusRegular", "value": "plus-regular" }],
//!     "aliases": { "actions.create": "plus-regular" }
//! }"#).unwrap();
//!
//! let profile = OverrideProfile::new().with_style("regular");
//! icons.apply_profile(&profile).unwrap();
//!
//! let exported = icons.export_profile();
//! let json = exported.to_json().unwrap();
//! assert_eq!(json, r#"{"style":"regular"}"#);
//! ```

mod config;
mod declaration;
mod error;
mod icon;
mod layer;
mod plugin;
mod profile;
mod resolve;
mod style;

pub use config::{IconSetConfig, OneOrMany};
pub use declaration::{DeclarationFile, IconSetDeclaration};
pub use error::{Error, Result};
pub use icon::{IconKey, IconVariant, IconVocabulary};
pub use layer::{DependencyVersion, LayerVersions, OverrideLayer, OverrideTable};
pub use plugin::{Configurable, IconRegistry, IconSet};
pub use profile::OverrideProfile;
pub use resolve::{Resolution, ResolutionEngine, resolve};
pub use style::{Style, StyleCatalog, StyleRef, SuffixPosition};
