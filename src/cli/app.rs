//! Main CLI application

use crate::books::{BookList, LoadOutcome, DEFAULT_BOOK_FILE};
use crate::cli::args::normalize_args;
use crate::cli::input::read_title;
use crate::cli::{Context, Verbosity};
use crate::error::Result;
use crate::render::book_table;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// The single operation an invocation performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a book; the words of the title, empty to read it from stdin
    Add(Vec<String>),
    /// Mark the book at a 1-based position as finished
    Complete(i64),
    /// Delete the book at a 1-based position
    Delete(i64),
    /// Print the listing
    List,
    /// No recognized flag
    Invalid,
}

impl Action {
    /// Whether the list must be saved after this action succeeds
    pub fn mutates(&self) -> bool {
        matches!(self, Action::Add(_) | Action::Complete(_) | Action::Delete(_))
    }
}

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    /// Create a new app
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with the given arguments and terminal streams
    pub fn run<I, R, W>(self, args: I, input: &mut R, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = String>,
        R: BufRead,
        W: Write,
    {
        let matches = self
            .command
            .try_get_matches_from(normalize_args(args))
            .unwrap_or_else(|e| e.exit());

        if matches.get_flag("no-color") {
            colored::control::set_override(false);
        }

        let ctx = get_context(&matches);
        let action = get_action(&matches);
        ctx.print_debug(&format!("Action: {:?}", action));

        execute(&action, &ctx, input, out)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
fn build_command() -> Command {
    Command::new("bookcheck")
        .version(crate::VERSION)
        .about("Keep track of the books you are reading")
        .args_override_self(true)
        .arg(
            Arg::new("add")
                .long("add")
                .help("Add a new book (title from arguments or stdin)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("complete")
                .long("complete")
                .value_name("N")
                .help("Mark book N as completed")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("del")
                .long("del")
                .value_name("N")
                .help("Delete book N")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List all books")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to the book file")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_BOOK_FILE),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on an unreadable or malformed book file instead of starting empty")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print the listing without colors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .value_name("TITLE")
                .help("Title of the book to add")
                .num_args(1..)
                .action(ArgAction::Append)
                .trailing_var_arg(true),
        )
}

/// Build the invocation context from matches
fn get_context(matches: &ArgMatches) -> Context {
    let verbosity = if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let book_file = matches
        .get_one::<PathBuf>("file")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE));

    Context::new()
        .with_book_file(book_file)
        .with_strict(matches.get_flag("strict"))
        .with_verbosity(verbosity)
}

/// Pick the action from matches.
///
/// When several flags are given, add wins over complete, complete over del,
/// and del over list. Positions of zero or less select nothing.
fn get_action(matches: &ArgMatches) -> Action {
    let position = |name: &str| matches.get_one::<i64>(name).copied().filter(|p| *p > 0);

    if matches.get_flag("add") {
        let title = matches
            .get_many::<String>("title")
            .map(|words| words.cloned().collect())
            .unwrap_or_default();
        Action::Add(title)
    } else if let Some(p) = position("complete") {
        Action::Complete(p)
    } else if let Some(p) = position("del") {
        Action::Delete(p)
    } else if matches.get_flag("list") {
        Action::List
    } else {
        Action::Invalid
    }
}

/// Load the list for an invocation.
///
/// Unless the context is strict, an unreadable or malformed file is treated
/// as an empty list.
pub fn load_books(ctx: &Context) -> Result<BookList> {
    let mut books = BookList::new();
    let path = ctx.book_file.display();

    match books.load(&ctx.book_file) {
        Ok(LoadOutcome::Missing) => ctx.print_debug(&format!("No book file at {}", path)),
        Ok(LoadOutcome::Empty) => ctx.print_debug(&format!("Book file {} is empty", path)),
        Ok(LoadOutcome::Loaded(n)) => ctx.print_debug(&format!("Loaded {} books from {}", n, path)),
        Err(e) if !ctx.strict && e.is_recoverable_on_load() => {
            ctx.print_debug(&format!("Ignoring book file: {}", e));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(books)
}

/// Perform one action: load, apply, save if the list changed
pub fn execute<R, W>(action: &Action, ctx: &Context, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut books = load_books(ctx)?;

    match action {
        Action::Add(words) => {
            let title = read_title(input, words)?;
            ctx.print_debug(&format!("Adding '{}' as #{}", title, books.len() + 1));
            books.add(title);
        }
        Action::Complete(position) => {
            let book = books.complete(*position)?;
            ctx.print_debug(&format!("Completed #{} '{}'", position, book.name));
        }
        Action::Delete(position) => {
            let book = books.delete(*position)?;
            ctx.print_debug(&format!("Deleted #{} '{}'", position, book.name));
        }
        Action::List => write!(out, "{}", book_table(&books))?,
        Action::Invalid => writeln!(out, "invalid command")?,
    }

    if action.mutates() {
        books.store(&ctx.book_file)?;
        ctx.print_debug(&format!("Saved {} books to {}", books.len(), ctx.book_file.display()));
    }

    Ok(())
}

/// Run the CLI application with the process arguments and terminal
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    App::new().run(std::env::args(), &mut stdin.lock(), &mut stdout.lock())
}
