//! Error types for the catalog boundary

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that occur while talking to the book catalog
///
/// A search that comes back with an error-shaped body instead of a book
/// array is *not* one of these; that is a defined no-results outcome and is
/// modeled as [`crate::catalog::SearchReply::Malformed`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog returned status {status} for {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}
