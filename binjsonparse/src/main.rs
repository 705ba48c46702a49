//! Command-line tool that validates JSON files and prints their parsed values.
//!
//! Usage: jsonparse [OPTIONS] [FILE]...
//!
//! Each argument that names a regular file is read and parsed in order.
//! Success prints `Parsed: <file>` followed by the value tree. The first
//! failure prints the error and exits with status 1. Exits 0 when every file
//! parsed, or when no files were given.
//!
//! Logging goes to stderr and is filtered by `JSONPARSE_LOG` (or `RUST_LOG`),
//! default `warn`.

use clap::Parser;
use libjsonparse::{parse_with_options, EscapeStyle, ParseOptions};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jsonparse", version, about = "Validate JSON files and print their parsed values")]
struct Cli {
    /// Files to parse. Arguments that are not regular files are skipped.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Decode \b \f \n \r \t to the escape letter instead of the control character
    #[arg(long)]
    letter_escapes: bool,

    /// Reject documents nested deeper than N arrays/objects
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Only report failures; do not print parsed values
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        let escapes = if self.letter_escapes {
            EscapeStyle::Letter
        } else {
            EscapeStyle::Standard
        };
        ParseOptions {
            escapes,
            max_depth: self.max_depth,
        }
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let options = cli.parse_options();

    for path in &cli.files {
        if !path.is_file() {
            warn!(path = %path.display(), "skipping: not a regular file");
            continue;
        }
        if let Err(message) = process_file(path, &options, cli.quiet) {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}

/// Read and parse one file, printing the value unless `quiet`.
fn process_file(path: &Path, options: &ParseOptions, quiet: bool) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {}", path.display(), e))?;

    let value = parse_with_options(&content, options)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    debug!(path = %path.display(), root = value.kind(), "parsed file");

    if !quiet {
        println!("Parsed: {}", path.display());
        println!("{:?}", value);
        println!();
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("JSONPARSE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
