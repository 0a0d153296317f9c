use std::process;

fn main() {
    if let Err(e) = bookcheck::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
