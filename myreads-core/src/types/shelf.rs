//! Shelf names and their wire representation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reading-status bucket.
///
/// `None` doubles as the off-shelf state and the catch-all for shelf names
/// this client does not recognize, so a book carrying an unknown shelf value
/// simply lands on no shelf instead of failing to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shelf {
    CurrentlyReading,
    WantToRead,
    Read,
    #[default]
    #[serde(other)]
    None,
}

impl Shelf {
    /// The three real shelves, in display order
    pub const REAL_SHELVES: [Shelf; 3] = [Shelf::CurrentlyReading, Shelf::WantToRead, Shelf::Read];

    /// Wire name of this shelf
    pub fn as_str(&self) -> &'static str {
        match self {
            Shelf::CurrentlyReading => "currentlyReading",
            Shelf::WantToRead => "wantToRead",
            Shelf::Read => "read",
            Shelf::None => "none",
        }
    }

    /// Human-readable heading for this shelf
    pub fn label(&self) -> &'static str {
        match self {
            Shelf::CurrentlyReading => "Currently Reading",
            Shelf::WantToRead => "Want to Read",
            Shelf::Read => "Read",
            Shelf::None => "Unshelved",
        }
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shelf {
    type Err = String;

    /// Parse user input. Unlike deserialization, which folds unknown values
    /// into `None`, a typo here is rejected so a bad CLI argument cannot
    /// silently unshelve a book.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "currentlyreading" | "currently-reading" | "reading" => Ok(Shelf::CurrentlyReading),
            "wanttoread" | "want-to-read" | "want" => Ok(Shelf::WantToRead),
            "read" => Ok(Shelf::Read),
            "none" => Ok(Shelf::None),
            _ => Err(format!(
                "unknown shelf '{}' (expected currentlyReading, wantToRead, read, or none)",
                s
            )),
        }
    }
}
