//! Core types for the MyReads shelf model

mod book;
mod shelf;

pub use book::Book;
pub use shelf::Shelf;
