//! Command dispatch for the `roster` binary.
//!
//! # Responsibility
//! - Wire argument parsing, prompting, persistence and reporting together.
//! - Map domain errors onto process exit codes.
//!
//! # Invariants
//! - Validation failures exit 1, conflicts exit 2, database/IO failures 3.
//! - All user-facing errors are printed as `error: ...` on stderr.

use log::{error, info};
use roster_core::db::{open_db, DbError};
use roster_core::{default_log_level, init_logging, RepoError, SqliteUserRepository, UserService};
use std::io::{self, BufRead, Write};
use std::time::Instant;

pub mod cli;
pub mod prompt;
pub mod report;

use cli::{Cli, Command};

/// Terminal error for a command run, carrying its exit code.
#[derive(Debug)]
pub enum CliError {
    Repo(RepoError),
    Db(DbError),
    Io(io::Error),
    Logging(String),
}

impl CliError {
    /// Maps the failure onto the documented process exit codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Repo(RepoError::Validation(_)) => 1,
            Self::Repo(RepoError::Conflict { .. }) => 2,
            _ => 3,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Logging(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Runs one parsed command against the given IO streams.
///
/// `input`/`output` are injected so tests can drive the interactive path
/// with in-memory buffers.
pub fn run_command<R: BufRead, W: Write>(
    cli: Cli,
    input: &mut R,
    output: &mut W,
) -> Result<(), CliError> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), &log_dir.to_string_lossy()).map_err(CliError::Logging)?;
    }

    match cli.command {
        Command::CreateUser {
            first_name,
            last_name,
        } => {
            let started_at = Instant::now();
            let (first, last) = prompt::resolve_names(first_name, last_name, input, output)?;

            let conn = open_db(&cli.db)?;
            let service = UserService::new(SqliteUserRepository::new(&conn));

            let user = match service.create_user(first, last) {
                Ok(user) => user,
                Err(err) => {
                    error!("event=create_user module=cli status=error error={err}");
                    return Err(err.into());
                }
            };

            info!(
                "event=create_user module=cli status=ok id={} duration_ms={}",
                user.id.unwrap_or_default(),
                started_at.elapsed().as_millis()
            );
            report::report_created(output, &user, started_at.elapsed(), cli.verbose)?;
            Ok(())
        }
        Command::List => {
            let conn = open_db(&cli.db)?;
            let service = UserService::new(SqliteUserRepository::new(&conn));

            let users = service.list_users()?;
            for user in &users {
                if let Some(id) = user.id {
                    writeln!(output, "{id:>4}  {}", user.full_name())?;
                }
            }
            if cli.verbose {
                writeln!(output, "total: {}", users.len())?;
            }
            Ok(())
        }
    }
}
