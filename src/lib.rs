//! Bookcheck - a reading list on the command line
//!
//! Books are kept in a JSON file in the working directory. Each invocation
//! loads the list, performs one operation (add, complete, delete, list)
//! and saves the list again when it changed.

// Public modules
pub mod books;
pub mod cli;
pub mod error;
pub mod render;

// Re-export commonly used types
pub use books::{Book, BookList, LoadOutcome};
pub use error::{BookcheckError, Result};

/// Current version of bookcheck
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
