//! The Book type as the catalog serves it

use super::Shelf;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog book.
///
/// Only the fields the shelf logic needs are modeled. Everything else the
/// catalog sends (covers, descriptions, page counts) rides along untouched
/// in `extra` and is written back verbatim when the book is re-serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Opaque catalog identifier
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Missing on some search results
    #[serde(default)]
    pub authors: Vec<String>,

    /// Missing or unrecognized wire values decode to [`Shelf::None`]
    #[serde(default)]
    pub shelf: Shelf,

    /// Descriptive metadata the core never interprets
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Book {
    /// Create an unshelved book with the given id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            shelf: Shelf::None,
            extra: Map::new(),
        }
    }

    /// Builder-style shelf assignment
    pub fn with_shelf(mut self, shelf: Shelf) -> Self {
        self.shelf = shelf;
        self
    }

    /// Get the primary author (first listed)
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(|s| s.as_str())
    }
}
