//! Error types for QueryDesk UI value parsing

use thiserror::Error;

/// Errors raised when turning user-supplied strings into component values.
///
/// Rendering itself never fails; these only surface at the edges (CLI
/// arguments, content front matter) where names arrive as text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Token is not one of GET, POST, PUT, DELETE
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),

    /// Not a known tag color
    #[error("Unknown tag color '{0}'. Must be one of: sky, amber, rose, zinc")]
    UnknownColor(String),

    /// Not a known tag variant
    #[error("Unknown tag variant '{0}'. Must be one of: small, medium")]
    UnknownVariant(String),

    /// Headings only come in levels 2 and 3
    #[error("Unsupported heading level: {0}")]
    UnsupportedHeadingLevel(u8),
}

/// Result type alias for UI value parsing
pub type Result<T> = std::result::Result<T, UiError>;
