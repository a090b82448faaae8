//! User domain model and full-name validation.
//!
//! # Responsibility
//! - Define the canonical user record persisted by the registry.
//! - Provide the name format check shared by prompt loops and write paths.
//!
//! # Invariants
//! - `first_name` and `last_name` are non-empty and match the name format.
//! - `id` is `None` until the record has been persisted once.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name parts are runs of alphabetic characters joined by a single space,
/// hyphen, or apostrophe. Covers unicode names; rejects digits and symbols.
static FULL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Alphabetic}+(?:[ '\-]\p{Alphabetic}+)*$").expect("valid name regex"));

/// Validation failures for user name fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyFirstName,
    EmptyLastName,
    MalformedFirstName(String),
    MalformedLastName(String),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
            Self::MalformedFirstName(value) => {
                write!(f, "first name `{value}` is not a valid name")
            }
            Self::MalformedLastName(value) => {
                write!(f, "last name `{value}` is not a valid name")
            }
        }
    }
}

impl Error for UserValidationError {}

/// Checks a single name field against the shared format rule.
///
/// # Contract
/// - Empty or whitespace-only input fails.
/// - Input with digits or symbols outside space/hyphen/apostrophe fails.
/// - The caller maps the generic failure onto the field-specific variant.
pub fn validate_full_name(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if !FULL_NAME_RE.is_match(trimmed) {
        return Err(format!("`{trimmed}` is not a valid name"));
    }
    Ok(())
}

/// Canonical user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database id, generated on first persist.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Creates an unpersisted user from raw name input.
    ///
    /// Names are trimmed; validation is deferred to `validate()` so prompt
    /// loops can surface precise errors before construction.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
        }
    }

    /// Validates both name fields.
    ///
    /// Called by the repository before any SQL mutation, in addition to the
    /// inline prompt validation on the interactive path.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(UserValidationError::EmptyFirstName);
        }
        if validate_full_name(&self.first_name).is_err() {
            return Err(UserValidationError::MalformedFirstName(
                self.first_name.clone(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(UserValidationError::EmptyLastName);
        }
        if validate_full_name(&self.last_name).is_err() {
            return Err(UserValidationError::MalformedLastName(
                self.last_name.clone(),
            ));
        }
        Ok(())
    }

    /// Returns `first_name last_name` for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns whether this record has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
