//! User use-case service.
//!
//! # Responsibility
//! - Provide the user-creation entry point called by the console command.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or the pre-insert
//!   duplicate check.
//! - Service layer remains storage-agnostic.

use crate::model::user::User;
use crate::repo::user_repo::{RepoResult, UserRepository};
use log::info;

/// Use-case service wrapper for user registry operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists a new user from the two name fields.
    ///
    /// # Contract
    /// - Names are trimmed before persistence.
    /// - Fails with a validation error on empty or malformed names.
    /// - Fails with a conflict error when the first name is already taken;
    ///   no row is written in that case.
    /// - Returns the persisted user carrying its generated id.
    pub fn create_user(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> RepoResult<User> {
        let mut user = User::new(first_name, last_name);
        let id = self.repo.insert_user(&user)?;
        user.id = Some(id);

        info!(
            "event=user_created module=service status=ok id={} first_name={}",
            id, user.first_name
        );
        Ok(user)
    }

    /// Gets one user by id.
    pub fn get_user(&self, id: i64) -> RepoResult<Option<User>> {
        self.repo.get_user(id)
    }

    /// Lists all users ordered by id.
    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.repo.list_users()
    }

    /// Counts persisted users.
    pub fn count_users(&self) -> RepoResult<u64> {
        self.repo.count_users()
    }
}
