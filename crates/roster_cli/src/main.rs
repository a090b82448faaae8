//! `roster` binary entry point.
//!
//! Parses arguments, runs the command against real stdin/stdout, and maps
//! failures onto exit codes.

use clap::Parser;
use roster_cli::cli::Cli;
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if let Err(err) = roster_cli::run_command(cli, &mut input, &mut output) {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}
