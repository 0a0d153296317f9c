//! The reading list
//!
//! This module holds the book record, the ordered list that users address
//! by 1-based position, and loading/saving the list as a JSON file.

pub mod book;
pub mod list;

// Re-export main types
pub use book::*;
pub use list::*;
