//! Error types for icon set configuration.

/// Result type alias for icon set operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while declaring or configuring an icon set.
///
/// Resolution itself never fails; every error here surfaces synchronously
/// at the call that received the bad input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A style name or value that the icon set's catalog does not declare.
    #[error("Style '{style}' is not available for this icon set. Available styles: {available}")]
    InvalidStyle { style: String, available: String },

    /// A per-style selector invoked for a style the catalog does not declare.
    #[error("Method '{method}' does not exist. Available style methods: {available}")]
    UnknownSelector { method: String, available: String },

    /// A style catalog must declare at least one style.
    #[error("Style catalog must declare at least one style")]
    EmptyCatalog,

    /// An icon value that is not part of the icon set's vocabulary.
    #[error("Icon '{value}' is not part of this icon set")]
    UnknownIcon { value: String },

    /// Malformed declaration or profile JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a style error listing the available style names.
    pub fn invalid_style(style: impl Into<String>, available: &[&str]) -> Self {
        Self::InvalidStyle {
            style: style.into(),
            available: available.join(", "),
        }
    }

    /// Create a selector error listing the available style names.
    pub fn unknown_selector(method: impl Into<String>, available: &[&str]) -> Self {
        Self::UnknownSelector {
            method: method.into(),
            available: available.join(", "),
        }
    }

    /// Create an unknown icon error.
    pub fn unknown_icon(value: impl Into<String>) -> Self {
        Self::UnknownIcon {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_style_message_lists_styles_in_order() {
        let err = Error::invalid_style("filled", &["regular", "solid"]);
        assert_eq!(
            err.to_string(),
            "Style 'filled' is not available for this icon set. Available styles: regular, solid"
        );
    }

    #[test]
    fn unknown_selector_message() {
        let err = Error::unknown_selector("filled", &["regular", "solid"]);
        assert_eq!(
            err.to_string(),
            "Method 'filled' does not exist. Available style methods: regular, solid"
        );
    }
}
