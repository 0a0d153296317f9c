//! Console rendering of the reading list
//!
//! Rows are derived from a `BookList` as plain data first and styled only
//! when the table is drawn.

pub mod rows;
pub mod table;

// Re-export main types
pub use rows::*;
pub use table::*;
