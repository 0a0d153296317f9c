//! End-to-end tests for the bookcheck binary

mod common;

use common::bookcheck;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_no_flag_is_invalid_command() {
    let (temp_dir, book_file) = common::create_workdir();

    bookcheck(temp_dir.path())
        .assert()
        .success()
        .stdout("invalid command\n");

    assert!(!book_file.exists());
}

#[test]
fn test_add_from_arguments_and_list() {
    let (temp_dir, book_file) = common::create_workdir();

    bookcheck(temp_dir.path())
        .args(["-add", "The", "Name", "of", "the", "Rose"])
        .assert()
        .success()
        .stdout("");
    assert!(book_file.exists());

    bookcheck(temp_dir.path())
        .arg("-list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Name of the Rose"))
        .stdout(predicate::str::contains("CreatedAt"))
        .stdout(predicate::str::contains("you have 1 pending books"));
}

#[test]
fn test_add_from_stdin() {
    let (temp_dir, _book_file) = common::create_workdir();

    bookcheck(temp_dir.path())
        .arg("-add")
        .write_stdin("Wolf Hall\n")
        .assert()
        .success();

    bookcheck(temp_dir.path())
        .args(["-list", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("║ 1 ║ Wolf Hall ║ no   ║"));
}

#[test]
fn test_add_empty_stdin_fails() {
    let (temp_dir, book_file) = common::create_workdir();

    bookcheck(temp_dir.path())
        .arg("-add")
        .write_stdin("\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty book's name is not allowed"));

    assert!(!book_file.exists());
}

#[test]
fn test_complete_and_summary() {
    let (temp_dir, _book_file) = common::create_workdir();

    for title in ["Book A", "Book B"] {
        bookcheck(temp_dir.path()).args(["-add", title]).assert().success();
    }
    bookcheck(temp_dir.path())
        .args(["-complete", "1"])
        .assert()
        .success();

    bookcheck(temp_dir.path())
        .args(["-list", "-no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✔ Book A"))
        .stdout(predicate::str::contains("yes"))
        .stdout(predicate::str::contains("you have 1 pending books"));
}

#[test]
fn test_delete_reindexes() {
    let (temp_dir, _book_file) = common::create_workdir();

    for title in ["First", "Second", "Third"] {
        bookcheck(temp_dir.path()).args(["-add", title]).assert().success();
    }
    bookcheck(temp_dir.path()).args(["-del", "1"]).assert().success();

    bookcheck(temp_dir.path())
        .args(["-list", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("║ 1 ║ Second"))
        .stdout(predicate::str::contains("║ 2 ║ Third"))
        .stdout(predicate::str::contains("First").not());
}

#[test]
fn test_invalid_index_fails_without_saving() {
    let (temp_dir, book_file) = common::create_workdir();

    bookcheck(temp_dir.path()).args(["-add", "Dune"]).assert().success();
    let before = fs::read_to_string(&book_file).unwrap();

    bookcheck(temp_dir.path())
        .args(["-complete", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid index"));
    bookcheck(temp_dir.path())
        .args(["-del", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid index"));

    assert_eq!(fs::read_to_string(&book_file).unwrap(), before);
}

#[test]
fn test_corrupt_file_is_treated_as_empty() {
    let (temp_dir, _book_file) = common::create_workdir_with_books("{{ definitely not json");

    bookcheck(temp_dir.path())
        .arg("-list")
        .assert()
        .success()
        .stdout(predicate::str::contains("you have 0 pending books"))
        .stderr("");
}

#[test]
fn test_corrupt_file_in_strict_mode() {
    let (temp_dir, _book_file) = common::create_workdir_with_books("{{ definitely not json");

    bookcheck(temp_dir.path())
        .args(["-strict", "-list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed book file"));
}

#[test]
fn test_custom_book_file() {
    let (temp_dir, book_file) = common::create_workdir();

    bookcheck(temp_dir.path())
        .args(["-file", "reading.json", "-add", "Ulysses"])
        .assert()
        .success();

    assert!(temp_dir.path().join("reading.json").exists());
    assert!(!book_file.exists());
}

#[test]
fn test_save_failure_is_reported() {
    let (temp_dir, _book_file) = common::create_workdir();

    bookcheck(temp_dir.path())
        .args(["-file", "missing/dir/books.json", "-add", "Ulysses"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn test_verbose_prints_debug_lines() {
    let (temp_dir, _book_file) = common::create_workdir();

    bookcheck(temp_dir.path())
        .args(["-v", "-add", "Ulysses"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[DEBUG]"));
}
