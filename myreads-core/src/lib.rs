//! MyReads Core Library
//!
//! Shelf bookkeeping for the MyReads bookshelf manager. The [`ShelfStore`]
//! owns the in-memory reading shelves and reconciles every mutation against
//! the remote book catalog behind the [`CatalogClient`] trait. Nothing
//! changes locally until the catalog confirms it, so consumers always render
//! server-confirmed state.

pub mod catalog;
pub mod error;
pub mod store;
pub mod types;

pub use catalog::{CatalogClient, HttpCatalog, SearchReply};
pub use error::{CatalogError, Result};
pub use store::{ShelfStore, Shelves};
pub use types::{Book, Shelf};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("nggnmAEACAAJ", "The Dispossessed");
        assert_eq!(book.title, "The Dispossessed");
        assert_eq!(book.shelf, Shelf::None);
    }
}
