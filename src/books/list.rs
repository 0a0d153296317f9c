//! Ordered reading list with positional operations and JSON persistence

use crate::books::Book;
use crate::error::{ListError, ListResult, StorageError, StorageResult};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default storage file, relative to the working directory
pub const DEFAULT_BOOK_FILE: &str = ".books.json";

/// What a successful load found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file at the path; the list is untouched
    Missing,
    /// Zero-byte file; the list is untouched
    Empty,
    /// The list was replaced with this many books
    Loaded(usize),
}

/// Books in insertion order.
///
/// Users refer to entries by 1-based position. Positions are not stable:
/// deleting an entry shifts every later entry down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookList {
    books: Vec<Book>,
}

impl BookList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Get the book at a 1-based position
    pub fn get(&self, position: i64) -> Option<&Book> {
        self.index_of(position).ok().map(|idx| &self.books[idx])
    }

    /// Append a new pending book and return it
    pub fn add(&mut self, name: impl Into<String>) -> &Book {
        self.books.push(Book::new(name));
        &self.books[self.books.len() - 1]
    }

    /// Mark the book at a 1-based position as finished now
    pub fn complete(&mut self, position: i64) -> ListResult<&Book> {
        let idx = self.index_of(position)?;
        let book = &mut self.books[idx];
        book.complete_at(Local::now());
        Ok(book)
    }

    /// Remove the book at a 1-based position and return it
    pub fn delete(&mut self, position: i64) -> ListResult<Book> {
        let idx = self.index_of(position)?;
        Ok(self.books.remove(idx))
    }

    /// Number of books not yet finished
    pub fn count_pending(&self) -> usize {
        self.books.iter().filter(|book| !book.done).count()
    }

    /// Number of finished books
    pub fn count_completed(&self) -> usize {
        self.books.iter().filter(|book| book.done).count()
    }

    /// Convert a 1-based position into a vector index
    fn index_of(&self, position: i64) -> ListResult<usize> {
        usize::try_from(position)
            .ok()
            .filter(|&p| p >= 1 && p <= self.books.len())
            .map(|p| p - 1)
            .ok_or(ListError::InvalidIndex {
                position,
                len: self.books.len(),
            })
    }

    /// Replace the list with the contents of a JSON file.
    ///
    /// A missing or zero-byte file leaves the list as it was. On any error the
    /// list is also left unchanged; callers decide whether to surface it.
    pub fn load(&mut self, path: &Path) -> StorageResult<LoadOutcome> {
        let contents = match fs::read(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoadOutcome::Missing),
            Err(e) => {
                return Err(StorageError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        if contents.is_empty() {
            return Ok(LoadOutcome::Empty);
        }

        *self = serde_json::from_slice(&contents).map_err(|e| StorageError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(LoadOutcome::Loaded(self.len()))
    }

    /// Write the whole list to a JSON file, overwriting it in place
    pub fn store(&self, path: &Path) -> StorageResult<()> {
        let data = serde_json::to_vec(self).map_err(StorageError::Serialize)?;

        fs::write(path, data).map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
