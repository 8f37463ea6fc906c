//! OpenAPI document assembly.
//!
//! Collects every REST endpoint's `utoipa::path` metadata plus the schemas
//! they reference. Swagger UI serves the generated document in debug builds.

use utoipa::OpenApi;

use crate::domain::prompt::GeneratedPrompt;
use crate::domain::rating::Rating;
use crate::domain::search::{PageInfo, TeacherPage};
use crate::domain::teacher::{Adaptation, Personality, Specialization, Teacher, TeacherDraft, TeacherUpdate};
use crate::domain::{Error, ErrorCode};
use crate::inbound::http::styles::{StyleCatalog, StyleOption};
use crate::inbound::http::teachers::{CreateDefaultsResponse, MessageResponse, RatingRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tutordesk backend API",
        description = "REST interface for managing AI teacher profiles, ratings, and prompts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::teachers::list_teachers,
        crate::inbound::http::teachers::create_teacher,
        crate::inbound::http::teachers::search_teachers,
        crate::inbound::http::teachers::create_default_teachers,
        crate::inbound::http::teachers::teachers_by_domain,
        crate::inbound::http::teachers::get_teacher,
        crate::inbound::http::teachers::update_teacher,
        crate::inbound::http::teachers::delete_teacher,
        crate::inbound::http::teachers::add_rating,
        crate::inbound::http::teachers::increment_session,
        crate::inbound::http::teachers::generate_prompt,
        crate::inbound::http::styles::list_styles,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Teacher,
        TeacherDraft,
        TeacherUpdate,
        Personality,
        Specialization,
        Adaptation,
        Rating,
        RatingRequest,
        GeneratedPrompt,
        TeacherPage,
        PageInfo,
        StyleCatalog,
        StyleOption,
        MessageResponse,
        CreateDefaultsResponse,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "teachers", description = "Teacher profile management"),
        (name = "styles", description = "Static profile-builder options"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_teacher_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/enhanced-teacher",
            "/api/v1/enhanced-teacher/search",
            "/api/v1/enhanced-teacher/styles/all",
            "/api/v1/enhanced-teacher/create-defaults",
            "/api/v1/enhanced-teacher/domain/{domain}",
            "/api/v1/enhanced-teacher/{teacher_id}",
            "/api/v1/enhanced-teacher/{teacher_id}/rating",
            "/api/v1/enhanced-teacher/{teacher_id}/increment-session",
            "/api/v1/enhanced-teacher/{teacher_id}/generate-prompt",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path}"
            );
        }
    }

    #[test]
    fn document_registers_the_error_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(
            components
                .schemas
                .keys()
                .any(|name| name.ends_with("Error")),
            "error schema absent"
        );
    }
}
