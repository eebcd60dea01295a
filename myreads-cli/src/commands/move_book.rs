//! Move command implementation

use super::{build_store, format_book};
use anyhow::{Context, Result};
use myreads_core::Shelf;

/// Move a book between shelves and print the shelves it touched.
///
/// Unlike the read-only views, a failure here is reported: the store left
/// everything as it was, and the caller should know nothing happened.
pub async fn move_book(book_id: &str, from: Shelf, to: Shelf) -> Result<()> {
    let store = build_store();

    store.initialize().await.context("failed to load shelves")?;

    store
        .change_shelf(book_id, from, to)
        .await
        .with_context(|| format!("failed to move {} to {}", book_id, to))?;

    tracing::info!(book_id, from = %from, to = %to, "book moved");

    let snapshot = store.snapshot().await;
    let mut touched = vec![from];
    if to != from {
        touched.push(to);
    }
    for shelf in touched {
        if let Some(books) = snapshot.shelf(shelf) {
            println!("{}:", shelf.label());
            if books.is_empty() {
                println!("  (empty)");
            }
            for book in books {
                println!("  {}", format_book(book));
            }
        }
    }

    Ok(())
}
