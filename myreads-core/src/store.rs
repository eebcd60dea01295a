//! The shelf store
//!
//! Authoritative in-memory reflection of the user's shelves and of the
//! latest search, reconciled against the catalog after every mutation. The
//! store never applies a change the server has not confirmed: a failed call
//! leaves the shelves stale but consistent, never partially applied.

use crate::catalog::{CatalogClient, SearchReply};
use crate::error::Result;
use crate::types::{Book, Shelf};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shelf state as consumers see it.
///
/// A book id appears in at most one of the three shelf sequences at any
/// time. Sequences keep catalog order for the initial load and append order
/// for later moves; nothing is sorted.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelves {
    pub currently_reading: Vec<Book>,
    pub want_to_read: Vec<Book>,
    pub read: Vec<Book>,

    /// Current search text, echoed before the search resolves
    pub query: String,

    /// Result of the most recent confirmed search
    pub query_result: Vec<Book>,
}

impl Shelves {
    /// Books on a real shelf; `None` for [`Shelf::None`]
    pub fn shelf(&self, shelf: Shelf) -> Option<&[Book]> {
        match shelf {
            Shelf::CurrentlyReading => Some(self.currently_reading.as_slice()),
            Shelf::WantToRead => Some(self.want_to_read.as_slice()),
            Shelf::Read => Some(self.read.as_slice()),
            Shelf::None => None,
        }
    }

    fn shelf_mut(&mut self, shelf: Shelf) -> Option<&mut Vec<Book>> {
        match shelf {
            Shelf::CurrentlyReading => Some(&mut self.currently_reading),
            Shelf::WantToRead => Some(&mut self.want_to_read),
            Shelf::Read => Some(&mut self.read),
            Shelf::None => None,
        }
    }

    /// Which real shelf currently holds `id`, if any
    pub fn shelf_of(&self, id: &str) -> Shelf {
        for shelf in Shelf::REAL_SHELVES {
            if self
                .shelf(shelf)
                .is_some_and(|books| books.iter().any(|b| b.id == id))
            {
                return shelf;
            }
        }
        Shelf::None
    }
}

struct Inner {
    catalog: Arc<dyn CatalogClient>,
    shelves: RwLock<Shelves>,

    /// Generation counter for searches; a resolving search applies its
    /// result only if no newer search has been issued since.
    search_gen: AtomicU64,
}

/// Single source of truth for shelf state.
///
/// Cheap to clone; all clones share the same state. Consumers read through
/// [`ShelfStore::snapshot`] and mutate only through the operations here, so
/// there are no concurrent mutators besides interleaved task continuations.
#[derive(Clone)]
pub struct ShelfStore {
    inner: Arc<Inner>,
}

impl ShelfStore {
    /// Create an empty store backed by the given catalog
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            inner: Arc::new(Inner {
                catalog,
                shelves: RwLock::new(Shelves::default()),
                search_gen: AtomicU64::new(0),
            }),
        }
    }

    /// Rebuild the three shelves from a full catalog fetch.
    ///
    /// Books whose shelf is `none`, or a name this client does not know,
    /// land on no shelf. A rejected fetch leaves existing state untouched
    /// and returns the error; the caller decides whether anyone hears about
    /// it.
    pub async fn initialize(&self) -> Result<()> {
        let books = self.inner.catalog.fetch_all().await?;

        let mut partitioned = Shelves::default();
        for book in books {
            if let Some(shelf) = partitioned.shelf_mut(book.shelf) {
                shelf.push(book);
            }
        }

        let mut shelves = self.inner.shelves.write().await;
        shelves.currently_reading = partitioned.currently_reading;
        shelves.want_to_read = partitioned.want_to_read;
        shelves.read = partitioned.read;
        tracing::debug!(
            currently_reading = shelves.currently_reading.len(),
            want_to_read = shelves.want_to_read.len(),
            read = shelves.read.len(),
            "shelves initialized"
        );
        Ok(())
    }

    /// Run a catalog search for `text`.
    ///
    /// The query text is stored before the request goes out, so a consumer
    /// rendering mid-flight sees what was typed. On resolution the result is
    /// applied only if this is still the newest search, so a slow response
    /// cannot clobber a later query's results. A malformed reply clears the
    /// results; a rejected request leaves them alone and returns the error.
    pub async fn search(&self, text: &str) -> Result<()> {
        let token = self.inner.search_gen.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut shelves = self.inner.shelves.write().await;
            shelves.query = text.to_string();
        }

        let reply = self.inner.catalog.search(text).await?;

        let mut shelves = self.inner.shelves.write().await;
        if self.inner.search_gen.load(Ordering::SeqCst) != token {
            tracing::debug!(query = text, "dropping stale search result");
            return Ok(());
        }
        shelves.query_result = match reply {
            SearchReply::Books(books) => books,
            SearchReply::Malformed => Vec::new(),
        };
        Ok(())
    }

    /// Move a book between shelves, server first.
    ///
    /// Nothing changes locally until the catalog confirms the update. After
    /// confirmation the book is filtered out of `old_shelf` (a no-op when it
    /// was never there) and, for a real target shelf, re-fetched from the
    /// catalog and appended to the end of `new_shelf`.
    pub async fn change_shelf(&self, book_id: &str, old_shelf: Shelf, new_shelf: Shelf) -> Result<()> {
        self.inner.catalog.update_shelf(book_id, new_shelf).await?;

        if old_shelf != Shelf::None {
            let mut shelves = self.inner.shelves.write().await;
            if let Some(books) = shelves.shelf_mut(old_shelf) {
                books.retain(|b| b.id != book_id);
            }
        }

        if new_shelf != Shelf::None {
            let book = self.inner.catalog.fetch_by_id(book_id).await?;
            let mut shelves = self.inner.shelves.write().await;
            if let Some(books) = shelves.shelf_mut(new_shelf) {
                books.push(book);
            }
        }

        tracing::debug!(book_id, from = %old_shelf, to = %new_shelf, "shelf change confirmed");
        Ok(())
    }

    /// Read-only copy of the current state for rendering
    pub async fn snapshot(&self) -> Shelves {
        self.inner.shelves.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_of_reports_the_holding_shelf() {
        let shelves = Shelves {
            read: vec![Book::new("id1", "Dune").with_shelf(Shelf::Read)],
            ..Shelves::default()
        };
        assert_eq!(shelves.shelf_of("id1"), Shelf::Read);
        assert_eq!(shelves.shelf_of("id2"), Shelf::None);
    }
}
