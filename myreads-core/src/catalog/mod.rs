//! The catalog client boundary
//!
//! The shelf store talks to the remote book catalog exclusively through the
//! [`CatalogClient`] trait, so tests can script every network outcome and the
//! transport can be swapped without touching the shelf logic.

mod http;

pub use http::{HttpCatalog, DEFAULT_BASE_URL};

use crate::error::Result;
use crate::types::{Book, Shelf};
use async_trait::async_trait;

/// What a catalog search came back with.
///
/// The catalog answers an empty or unmatched query with an error-shaped
/// object where the book array should be. That is a defined no-results
/// outcome, not a failure, so it gets its own variant instead of an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchReply {
    /// The query matched; results in catalog order
    Books(Vec<Book>),

    /// The response resolved but carried no book array
    Malformed,
}

/// Abstract book catalog
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch every book the user has shelved
    async fn fetch_all(&self) -> Result<Vec<Book>>;

    /// Fetch a single book record by its catalog id
    async fn fetch_by_id(&self, id: &str) -> Result<Book>;

    /// Assign `shelf` to the book with `id`.
    ///
    /// The response body is discarded; resolution is the only confirmation
    /// the store needs before it mutates local state.
    async fn update_shelf(&self, id: &str, shelf: Shelf) -> Result<()>;

    /// Free-text search over the catalog
    async fn search(&self, query: &str) -> Result<SearchReply>;
}
