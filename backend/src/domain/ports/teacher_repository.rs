//! Driven port for teacher and rating storage.
//!
//! Adapters own the maps (or tables) behind this trait. Compound mutations —
//! merge-update, session increment, rating append with mean recompute — are
//! single methods so an adapter can make them atomic. Expected absence is an
//! `Option`/`bool` sentinel, never an error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::rating::Rating;
use crate::domain::teacher::{Teacher, TeacherId, TeacherUpdate};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by teacher repository adapters.
    pub enum TeacherRepositoryError {
        /// Store could not be reached.
        Connection { message: String } =>
            "teacher repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "teacher repository query failed: {message}",
    }
}

/// Port for teacher and rating persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Insert a fully constructed teacher record.
    async fn insert(&self, teacher: Teacher) -> Result<(), TeacherRepositoryError>;

    /// Find a teacher by id.
    async fn find_by_id(&self, id: &TeacherId)
    -> Result<Option<Teacher>, TeacherRepositoryError>;

    /// All stored teachers, in no particular order.
    async fn list(&self) -> Result<Vec<Teacher>, TeacherRepositoryError>;

    /// Shallow-merge an update into a teacher, refreshing `updated_at`.
    ///
    /// Returns the updated record, or `None` when the id is absent.
    async fn update(
        &self,
        id: &TeacherId,
        update: TeacherUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Teacher>, TeacherRepositoryError>;

    /// Remove a teacher and cascade-delete its ratings.
    ///
    /// Returns whether a record was removed.
    async fn delete(&self, id: &TeacherId) -> Result<bool, TeacherRepositoryError>;

    /// Increment `total_sessions` by one, refreshing `updated_at`.
    ///
    /// Returns whether the teacher existed. Never creates a record.
    async fn increment_sessions(
        &self,
        id: &TeacherId,
        now: DateTime<Utc>,
    ) -> Result<bool, TeacherRepositoryError>;

    /// Append a rating and store the recomputed mean on the teacher.
    ///
    /// Returns the created rating, or `None` when the teacher is absent; no
    /// orphaned rating is written in that case.
    async fn append_rating(
        &self,
        id: &TeacherId,
        score: f64,
        now: DateTime<Utc>,
    ) -> Result<Option<Rating>, TeacherRepositoryError>;

    /// All ratings for a teacher, oldest first. Empty when the teacher is
    /// absent or unrated.
    async fn ratings_for(&self, id: &TeacherId) -> Result<Vec<Rating>, TeacherRepositoryError>;
}
