//! Driven port for user account storage.

use async_trait::async_trait;

use crate::domain::user::{User, UserDraft};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Store could not be reached.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// The username is already taken.
        DuplicateUsername { username: String } =>
            "username already exists: {username}",
    }
}

/// Port for user account persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserRepositoryError>;

    /// Find a user by unique username.
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, UserRepositoryError>;

    /// Create a user with a fresh id.
    ///
    /// Fails with [`UserRepositoryError::DuplicateUsername`] when the
    /// username is taken.
    async fn create(&self, draft: UserDraft) -> Result<User, UserRepositoryError>;
}
