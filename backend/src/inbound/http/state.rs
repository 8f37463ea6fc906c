//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the driving ports and remain testable against any repository. The
//! store is injected explicitly; there is no ambient global storage.

use std::sync::Arc;

use crate::domain::ports::{TeacherCommand, TeacherQuery};
use crate::domain::{TeacherCommandService, TeacherQueryService};
use crate::outbound::memory::InMemoryTeacherRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Mutating teacher operations.
    pub teachers: Arc<dyn TeacherCommand>,
    /// Read-only teacher operations.
    pub teachers_query: Arc<dyn TeacherQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(teachers: Arc<dyn TeacherCommand>, teachers_query: Arc<dyn TeacherQuery>) -> Self {
        Self {
            teachers,
            teachers_query,
        }
    }

    /// State backed by a fresh in-memory store, shared between the command
    /// and query sides.
    ///
    /// # Examples
    /// ```
    /// use tutordesk::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory();
    /// let _commands = state.teachers.clone();
    /// ```
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryTeacherRepository::new());
        Self::new(
            Arc::new(TeacherCommandService::new(Arc::clone(&repo))),
            Arc::new(TeacherQueryService::new(repo)),
        )
    }
}
