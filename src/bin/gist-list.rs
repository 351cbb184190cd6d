//! CLI tool to list your gists, oldest update first.
//!
//! Usage:
//!   gist-list
//!   gist-list -L 20
//!   gist-list --input saved-listing.tsv
//!
//! Running with no flags is the standard behaviour: list up to 100 gists via
//! `gh gist list`. The flags are optional overrides.
//!
//! Nothing is printed unless every listed gist parses.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use gist_list::{DEFAULT_LIMIT, GhCli, ListingFile, ListingSource, build_report};
use log::info;

/// List gists from `gh gist list`, sorted by last update (oldest first).
#[derive(Parser)]
#[command(name = "gist-list")]
struct Cli {
    /// Maximum number of gists to request
    #[arg(short = 'L', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Program used to list gists, invoked as `<PROGRAM> gist list -L <N>`
    #[arg(long, value_name = "PROGRAM", default_value = "gh")]
    gh: String,

    /// Read a saved listing instead of running the listing program
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Log source and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let source: Box<dyn ListingSource> = match &cli.input {
        Some(path) => Box::new(ListingFile::new(path)),
        None => Box::new(GhCli::new(&cli.gh)),
    };

    match build_report(source.as_ref(), cli.limit) {
        Ok((report, count)) => {
            if let Err(e) = io::stdout().write_all(report.as_bytes()) {
                eprintln!("Error writing output: {e}");
                process::exit(1);
            }
            info!("listed {count} gists from {}", source.describe());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
