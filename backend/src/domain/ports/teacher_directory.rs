//! Driving ports consumed by the HTTP adapter.
//!
//! Split command/query so handlers depend only on the operations they use.
//! Services in [`crate::domain::teacher_service`] implement both over any
//! [`TeacherRepository`](super::TeacherRepository).

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::prompt::GeneratedPrompt;
use crate::domain::rating::Rating;
use crate::domain::search::{PageRequest, SearchFilters, TeacherPage};
use crate::domain::teacher::{Teacher, TeacherDraft, TeacherId, TeacherUpdate};

/// Mutating teacher operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherCommand: Send + Sync {
    /// Create a teacher from a validated draft.
    async fn create_teacher(&self, draft: TeacherDraft) -> Result<Teacher, Error>;

    /// Shallow-merge a partial update into an existing teacher.
    async fn update_teacher(
        &self,
        id: &TeacherId,
        update: TeacherUpdate,
    ) -> Result<Teacher, Error>;

    /// Delete a teacher, cascading its ratings.
    async fn delete_teacher(&self, id: &TeacherId) -> Result<(), Error>;

    /// Increment a teacher's session counter.
    async fn increment_session(&self, id: &TeacherId) -> Result<(), Error>;

    /// Append a rating and recompute the stored average.
    async fn add_rating(&self, id: &TeacherId, score: f64) -> Result<Rating, Error>;

    /// Seed the fixed sample teachers through the normal create path.
    async fn create_default_teachers(&self) -> Result<Vec<Teacher>, Error>;
}

/// Read-only teacher operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherQuery: Send + Sync {
    /// Fetch one teacher.
    async fn get_teacher(&self, id: &TeacherId) -> Result<Teacher, Error>;

    /// All teachers, newest first.
    async fn list_teachers(&self) -> Result<Vec<Teacher>, Error>;

    /// Filtered, paginated search.
    async fn search_teachers(
        &self,
        filters: SearchFilters,
        page: PageRequest,
    ) -> Result<TeacherPage, Error>;

    /// All teachers whose primary domain matches exactly, case-insensitively.
    async fn teachers_by_domain(&self, domain: &str) -> Result<Vec<Teacher>, Error>;

    /// Mean of a teacher's ratings, `None` while unrated.
    async fn average_rating(&self, id: &TeacherId) -> Result<Option<f64>, Error>;

    /// Render the teacher's system prompt.
    async fn generate_prompt(&self, id: &TeacherId) -> Result<GeneratedPrompt, Error>;
}
