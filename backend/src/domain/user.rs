//! User data model.
//!
//! A minimal pre-existing account entity, unrelated to the teacher domain.
//! It has a storage port and adapter but no HTTP surface.

use serde::{Deserialize, Serialize};

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Auto-incrementing identifier assigned by the store.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Password credential, stored as supplied.
    pub password: String,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Unique login name.
    pub username: String,
    /// Password credential.
    pub password: String,
}
