// src/bin/cli.rs
use std::process::ExitCode;

use docs_scrape::cli;

fn main() -> ExitCode {
    cli::run()
}
