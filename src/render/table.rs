//! Box-drawing table
//!
//! A small fixed-style table: a header, body rows and an optional footer
//! cell spanning every column. Widths are measured on the plain text so
//! that ANSI styling never skews the layout.

use colored::{Color, Colorize};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a cell's text within its column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub text: String,
    pub align: Align,
    pub color: Option<Color>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Width of the text in terminal columns
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }

    /// Pad to `width` and apply the cell color
    fn render(&self, width: usize) -> String {
        let padded = pad(&self.text, width, self.align);
        match self.color {
            Some(color) => padded.color(color).to_string(),
            None => padded,
        }
    }
}

/// A table with a header row, body rows and an optional spanning footer
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<Cell>,
    body: Vec<Vec<Cell>>,
    footer: Option<Cell>,
}

impl Table {
    pub fn new(header: Vec<Cell>) -> Self {
        Table {
            header,
            ..Default::default()
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.body.push(row);
    }

    pub fn set_footer(&mut self, footer: Cell) {
        self.footer = Some(footer);
    }

    /// Content width of every column.
    ///
    /// The last column absorbs any extra width the footer needs.
    pub fn column_widths(&self) -> Vec<usize> {
        let columns = self.header.len();
        let mut widths: Vec<usize> = self.header.iter().map(Cell::width).collect();

        for row in &self.body {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        if let (Some(footer), Some(last)) = (&self.footer, widths.last().copied()) {
            let spanned = self.inner_width(&widths) - 2;
            if footer.width() > spanned {
                widths[columns - 1] = last + footer.width() - spanned;
            }
        }

        widths
    }

    /// Width between the outer borders
    fn inner_width(&self, widths: &[usize]) -> usize {
        widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1)
    }

    fn render_row(&self, cells: &[Cell], widths: &[usize]) -> String {
        let empty = Cell::default();
        let inner: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| format!(" {} ", cells.get(i).unwrap_or(&empty).render(width)))
            .collect();
        format!("║{}║", inner.join("║"))
    }

    /// Render the whole table, one line per row, with a trailing newline
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let rule = |left: &str, joint: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "═".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(joint), right)
        };

        let mut lines = vec![rule("╔", "╦", "╗"), self.render_row(&self.header, &widths)];
        lines.push(rule("╠", "╬", "╣"));
        for row in &self.body {
            lines.push(self.render_row(row, &widths));
        }

        match &self.footer {
            Some(footer) => {
                let span = self.inner_width(&widths);
                lines.push(rule("╠", "╩", "╣"));
                lines.push(format!("║ {} ║", footer.render(span - 2)));
                lines.push(format!("╚{}╝", "═".repeat(span)));
            }
            None => lines.push(rule("╚", "╩", "╝")),
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Pad `text` with spaces to `width` columns
fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
