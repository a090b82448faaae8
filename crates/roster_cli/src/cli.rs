//! CLI struct definitions for the `roster` command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "roster",
    version = env!("CARGO_PKG_VERSION"),
    about = "Minimal user registry: create and list users backed by SQLite."
)]
pub struct Cli {
    /// Path to the SQLite database file.
    #[clap(long, default_value = "roster.db", global = true)]
    pub db: PathBuf,

    /// Directory for rolling log files. Logging is disabled when absent.
    #[clap(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Additionally report generated id, elapsed time and peak memory.
    #[clap(long, short = 'v', global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new user. Missing names are prompted for interactively.
    #[clap(name = "create-user")]
    CreateUser {
        /// First name. Prompted for when omitted.
        first_name: Option<String>,
        /// Last name. Prompted for when omitted.
        last_name: Option<String>,
    },
    /// List all users ordered by id.
    List,
}
