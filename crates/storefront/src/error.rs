//! Error types for catalog loading and rendering.
//!
//! Loader entry points swallow these errors (they log and return an empty
//! catalog); the types exist so the fallible internals can use `?` and so
//! callers that want the failure, such as the CLI, can see it.

use thiserror::Error;

use crate::storage::StorageError;

/// Failure while reading catalog data or writing cart data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Key-value storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// HTTP request for a static resource failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a static resource from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A resource base or name could not be turned into a location.
    #[error("Invalid resource location: {0}")]
    InvalidLocation(String),
}

/// Failure while producing markup.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// The document has no element with the container id.
    #[error("No element with id: {0}")]
    MissingContainer(String),

    /// The container element is never closed.
    #[error("Unclosed container element: {0}")]
    UnclosedContainer(String),
}

/// Result type alias for `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;
