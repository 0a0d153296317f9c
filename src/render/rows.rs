//! Book rows and their styled table form

use crate::books::{Book, BookList};
use crate::render::table::{Align, Cell, Table};
use chrono::{DateTime, TimeZone};
use colored::Color;
use std::fmt::Display;

/// Mark shown before the title of a finished book
pub const DONE_MARK: char = '✔';

/// `DD Mon YY HH:MM -ZZZZ`, RFC 822 with a numeric zone
const TIMESTAMP_FORMAT: &str = "%d %b %y %H:%M %z";

/// Shown in place of a completion time for pending books
const UNSET_TIMESTAMP: &str = "-";

/// One book as it appears in the listing, with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub position: usize,
    pub name: String,
    pub done: bool,
    pub added: String,
    pub completed_at: Option<String>,
}

impl BookRow {
    pub fn from_book(position: usize, book: &Book) -> Self {
        BookRow {
            position,
            name: book.name.clone(),
            done: book.done,
            added: format_timestamp(&book.added),
            completed_at: book.completed_at.as_ref().map(format_timestamp),
        }
    }

    /// Title as displayed, with the done mark for finished books
    pub fn title(&self) -> String {
        if self.done {
            format!("{} {}", DONE_MARK, self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn done_label(&self) -> &'static str {
        if self.done {
            "yes"
        } else {
            "no"
        }
    }

    fn color(&self) -> Color {
        if self.done {
            Color::Green
        } else {
            Color::Blue
        }
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(self.position.to_string()),
            Cell::new(self.title()).color(self.color()),
            Cell::new(self.done_label()).color(self.color()),
            Cell::new(self.added.clone()),
            Cell::new(
                self.completed_at
                    .clone()
                    .unwrap_or_else(|| UNSET_TIMESTAMP.to_string()),
            ),
        ]
    }
}

/// Rows for every book in list order
pub fn book_rows(list: &BookList) -> Vec<BookRow> {
    list.iter()
        .enumerate()
        .map(|(idx, book)| BookRow::from_book(idx + 1, book))
        .collect()
}

/// Footer line summarizing the list
pub fn summary(list: &BookList) -> String {
    format!("you have {} pending books", list.count_pending())
}

/// Format a timestamp the way the listing shows it
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the listing table for a reading list
pub fn book_table(list: &BookList) -> Table {
    let mut table = Table::new(vec![
        Cell::new("#").align(Align::Center),
        Cell::new("Book").align(Align::Center),
        Cell::new("Done").align(Align::Center),
        Cell::new("CreatedAt").align(Align::Right),
        Cell::new("CompletedAt").align(Align::Right),
    ]);

    for row in book_rows(list) {
        table.push_row(row.cells());
    }

    table.set_footer(
        Cell::new(summary(list))
            .align(Align::Center)
            .color(Color::Red),
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 18, 5, 0).unwrap();
        assert_eq!(format_timestamp(&at), "09 Mar 24 18:05 +0000");

        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = east.with_ymd_and_hms(2023, 11, 2, 8, 15, 42).unwrap();
        assert_eq!(format_timestamp(&at), "02 Nov 23 08:15 +0200");
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let mut list = BookList::new();
        list.add("Book A");
        list.add("Book B");
        list.complete(1).unwrap();

        let rows = book_rows(&list);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].position, 1);
        assert!(rows[0].done);
        assert_eq!(rows[0].title(), "✔ Book A");
        assert_eq!(rows[0].done_label(), "yes");
        assert!(rows[0].completed_at.is_some());

        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[1].title(), "Book B");
        assert_eq!(rows[1].done_label(), "no");
        assert!(rows[1].completed_at.is_none());
    }

    #[test]
    fn test_summary_counts_pending() {
        let mut list = BookList::new();
        list.add("Book A");
        list.add("Book B");
        list.add("Book C");
        list.complete(2).unwrap();

        assert_eq!(summary(&list), "you have 2 pending books");
    }

    #[test]
    fn test_book_table_contents() {
        colored::control::set_override(false);

        let mut list = BookList::new();
        list.add("Dune");
        let added = format_timestamp(&list.books()[0].added);

        let rendered = book_table(&list).render();
        assert!(rendered.contains("CreatedAt"));
        assert!(rendered.contains("CompletedAt"));
        assert!(rendered.contains("║ 1 ║ Dune ║ no   ║"));
        assert!(rendered.contains(&added));
        assert!(rendered.contains("you have 1 pending books"));
    }
}
