//! Shelves command implementation

use super::{build_store, format_book};
use anyhow::Result;
use myreads_core::Shelf;

/// List the three reading shelves.
///
/// A catalog that cannot be reached renders as empty shelves; the failure is
/// logged, never fatal, so the view always comes up.
pub async fn shelves(json: bool) -> Result<()> {
    let store = build_store();

    if let Err(e) = store.initialize().await {
        tracing::warn!("failed to load shelves: {}", e);
    }

    let snapshot = store.snapshot().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    for shelf in Shelf::REAL_SHELVES {
        println!("{}:", shelf.label());
        let books = snapshot.shelf(shelf).unwrap_or_default();
        if books.is_empty() {
            println!("  (empty)");
        }
        for book in books {
            println!("  {}", format_book(book));
        }
        println!();
    }

    Ok(())
}
