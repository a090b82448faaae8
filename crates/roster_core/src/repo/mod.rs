//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `User::validate()` before persistence.
//! - The first-name uniqueness check runs before any insert statement.

pub mod user_repo;
