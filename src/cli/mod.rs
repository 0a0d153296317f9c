//! CLI interface and argument parsing
//!
//! This module turns one command line into exactly one operation on the
//! reading list: parse flags, load the list, apply the operation, save.

pub mod app;
pub mod args;
pub mod context;
pub mod input;

// Re-export main types
pub use app::*;
pub use context::*;
