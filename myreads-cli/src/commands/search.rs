//! Search command implementation

use super::{build_store, format_book};
use anyhow::Result;

/// Search the catalog and print each hit with the shelf it is already on.
///
/// A rejected search renders as no results, matching the shelves view's
/// tolerance for an unreachable catalog.
pub async fn search(query: &str, json: bool) -> Result<()> {
    let store = build_store();

    // load the shelves first so results can show their current assignment
    if let Err(e) = store.initialize().await {
        tracing::warn!("failed to load shelves: {}", e);
    }
    if let Err(e) = store.search(query).await {
        tracing::warn!("search failed: {}", e);
    }

    let snapshot = store.snapshot().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot.query_result)?);
        return Ok(());
    }

    if snapshot.query_result.is_empty() {
        println!("No results for \"{}\"", snapshot.query);
        return Ok(());
    }

    for book in &snapshot.query_result {
        let shelf = snapshot.shelf_of(&book.id);
        println!("[{}] {}", shelf, format_book(book));
    }

    Ok(())
}
