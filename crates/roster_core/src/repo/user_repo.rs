//! User repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable persistence APIs over the `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `User::validate()` before SQL mutations.
//! - First-name uniqueness is enforced with a pre-insert lookup; a conflict
//!   fails the call before any write occurs.
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::user::{User, UserValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT id, first_name, last_name FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(UserValidationError),
    Conflict { first_name: String },
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict { first_name } => write!(
                f,
                "a user with first name `{first_name}` already exists"
            ),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Conflict { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<UserValidationError> for RepoError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for user persistence operations.
pub trait UserRepository {
    /// Inserts a new user and returns the generated id.
    ///
    /// Fails with `RepoError::Conflict` when a user with the same first
    /// name already exists. No row is written in that case.
    fn insert_user(&self, user: &User) -> RepoResult<i64>;
    fn find_by_first_name(&self, first_name: &str) -> RepoResult<Option<User>>;
    fn get_user(&self, id: i64) -> RepoResult<Option<User>>;
    fn list_users(&self) -> RepoResult<Vec<User>>;
    fn count_users(&self) -> RepoResult<u64>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, user: &User) -> RepoResult<i64> {
        user.validate()?;

        if self.find_by_first_name(&user.first_name)?.is_some() {
            return Err(RepoError::Conflict {
                first_name: user.first_name.clone(),
            });
        }

        self.conn.execute(
            "INSERT INTO users (first_name, last_name) VALUES (?1, ?2);",
            params![user.first_name.as_str(), user.last_name.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_first_name(&self, first_name: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE first_name = ?1;"))?;

        let mut rows = stmt.query(params![first_name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn get_user(&self, id: i64) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn count_users(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let id: i64 = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in users.id"
        )));
    }

    let user = User {
        id: Some(id),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    };
    user.validate()?;
    Ok(user)
}
