//! CLI command implementations

mod move_book;
mod search;
mod shelves;

pub use move_book::move_book;
pub use search::search;
pub use shelves::shelves;

use myreads_core::catalog::DEFAULT_BASE_URL;
use myreads_core::{Book, HttpCatalog, ShelfStore};
use std::sync::Arc;

/// Build a shelf store against the configured catalog endpoint.
///
/// `MYREADS_API_URL` overrides the public catalog. `MYREADS_API_TOKEN` pins
/// the account whose shelves are shown; without it a fresh token is
/// generated per invocation, which means a fresh, empty set of shelves.
pub(crate) fn build_store() -> ShelfStore {
    let base_url =
        std::env::var("MYREADS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let token =
        std::env::var("MYREADS_API_TOKEN").unwrap_or_else(|_| uuid::Uuid::new_v4().to_string());

    ShelfStore::new(Arc::new(HttpCatalog::new(base_url, token)))
}

/// Render one book line
pub(crate) fn format_book(book: &Book) -> String {
    if book.authors.is_empty() {
        format!("{} - {}", book.id, book.title)
    } else {
        format!("{} - {} ({})", book.id, book.title, book.authors.join(", "))
    }
}
