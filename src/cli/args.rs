//! Go-style flag spellings
//!
//! Users type `-add`, `-complete 3` or `-del=2`, with a single dash before
//! long names. clap only knows `--name`, so the raw arguments are rewritten
//! before parsing. Flag parsing stops at the first non-flag argument (or
//! `--`); everything after it is positional, even if it starts with a dash.

/// Long flags that take a value in the next argument
const VALUE_FLAGS: &[&str] = &["complete", "del", "file"];

/// Short flags that take a value in the next argument
const SHORT_VALUE_FLAGS: &[&str] = &["-f"];

/// Long flags without a value
const SWITCH_FLAGS: &[&str] = &["add", "list", "strict", "no-color", "verbose", "help", "version"];

/// Rewrite `-name` / `-name=value` into clap's `--name` form.
///
/// The first element (program name) is passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<String> = args.next().into_iter().collect();
    let mut expects_value = false;

    while let Some(arg) = args.next() {
        if expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        if arg == "--" || !arg.starts_with('-') || arg == "-" {
            // End of flags: hand the rest to clap as positionals
            normalized.push("--".to_string());
            if arg != "--" {
                normalized.push(arg);
            }
            normalized.extend(args.by_ref());
            break;
        }

        let body = arg.trim_start_matches('-');
        let (name, inline_value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        if VALUE_FLAGS.contains(&name) {
            expects_value = inline_value.is_none();
            normalized.push(format!("--{}", body));
        } else if SWITCH_FLAGS.contains(&name) {
            normalized.push(format!("--{}", body));
        } else {
            // Short flags (-v, -f, -h) and unknown flags go to clap as typed
            expects_value = SHORT_VALUE_FLAGS.contains(&arg.as_str());
            normalized.push(arg);
        }
    }

    normalized
}
