//! Invocation context
//!
//! The context carries the settings of one invocation: where the books
//! live, how strictly storage problems are treated, and how chatty the
//! diagnostics on stderr are.

use crate::books::DEFAULT_BOOK_FILE;
use std::path::PathBuf;

/// Invocation settings shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    /// Storage file for the reading list
    pub book_file: PathBuf,

    /// Surface unreadable or malformed storage instead of starting empty
    pub strict: bool,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Normal = 0,
    Verbose = 1,
}

impl Context {
    /// Create a context with default settings
    pub fn new() -> Self {
        Context {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            strict: false,
            verbosity: Verbosity::Normal,
        }
    }

    /// Set the storage file
    pub fn with_book_file(mut self, path: PathBuf) -> Self {
        self.book_file = path;
        self
    }

    /// Set strict loading
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("[DEBUG] {}", message);
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
