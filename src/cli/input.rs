//! Title input for new books

use crate::error::{ListError, Result};
use std::io::BufRead;

/// Resolve the title of a book to add.
///
/// Positional arguments are joined with single spaces. Without arguments a
/// single line is read from `reader`; an empty line or end of input is
/// rejected.
pub fn read_title<R: BufRead>(reader: &mut R, args: &[String]) -> Result<String> {
    let title = if args.is_empty() {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        line.trim_end_matches(['\n', '\r']).to_string()
    } else {
        args.join(" ")
    };

    if title.is_empty() {
        return Err(ListError::EmptyName.into());
    }

    Ok(title)
}
