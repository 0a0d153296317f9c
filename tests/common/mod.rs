//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty working directory and the path of its book file
pub fn create_workdir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let book_file = temp_dir.path().join(".books.json");
    (temp_dir, book_file)
}

/// Create a working directory whose book file holds `content`
pub fn create_workdir_with_books(content: &str) -> (TempDir, PathBuf) {
    let (temp_dir, book_file) = create_workdir();
    fs::write(&book_file, content).unwrap();
    (temp_dir, book_file)
}

/// The bookcheck binary, running in `dir` without colors
pub fn bookcheck(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookcheck").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}
