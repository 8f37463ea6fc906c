//! Teacher API handlers.
//!
//! ```text
//! GET    /api/v1/enhanced-teacher
//! POST   /api/v1/enhanced-teacher
//! GET    /api/v1/enhanced-teacher/search?domain=math&page=1&limit=10
//! POST   /api/v1/enhanced-teacher/create-defaults
//! GET    /api/v1/enhanced-teacher/domain/{domain}
//! GET    /api/v1/enhanced-teacher/{teacher_id}
//! PUT    /api/v1/enhanced-teacher/{teacher_id}
//! DELETE /api/v1/enhanced-teacher/{teacher_id}
//! POST   /api/v1/enhanced-teacher/{teacher_id}/rating
//! POST   /api/v1/enhanced-teacher/{teacher_id}/increment-session
//! POST   /api/v1/enhanced-teacher/{teacher_id}/generate-prompt
//! ```
//!
//! Routes with literal segments (`/search`, `/create-defaults`, `/domain`)
//! must be registered before the `/{teacher_id}` routes so they are not
//! swallowed by the id matcher.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::prompt::GeneratedPrompt;
use crate::domain::rating::Rating;
use crate::domain::search::{PageRequest, SearchFilters, TeacherPage};
use crate::domain::teacher::{Teacher, TeacherDraft, TeacherUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_teacher_id, require_non_empty};

/// Generic acknowledgement payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Response for the create-defaults seeding endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDefaultsResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The seeded teachers.
    pub teachers: Vec<Teacher>,
    /// Number of teachers seeded.
    pub count: usize,
}

/// Request body for appending a rating.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RatingRequest {
    /// Score to record; no bound is enforced.
    pub rating: f64,
}

fn validate_draft(draft: &TeacherDraft) -> Result<(), Error> {
    require_non_empty(&draft.name, FieldName::new("name"))?;
    require_non_empty(&draft.title, FieldName::new("title"))?;
    require_non_empty(
        &draft.specialization.primary_domain,
        FieldName::new("specialization.primary_domain"),
    )
}

fn parse_search_params(pairs: Vec<(String, String)>) -> (SearchFilters, PageRequest) {
    let mut filters = SearchFilters::default();
    let mut page = None;
    let mut limit = None;
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "domain" => filters.domain = Some(value),
            "teaching_style" => filters.teaching_style = Some(value),
            "difficulty_level" => filters.difficulty_level = Some(value),
            "traits" => filters.traits.push(value),
            "query" => filters.query = Some(value),
            // Malformed numbers fall back to the defaults.
            "page" => page = value.parse().ok(),
            "limit" => limit = value.parse().ok(),
            _ => {}
        }
    }
    (filters, PageRequest::new(page, limit))
}

/// List all teachers, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/enhanced-teacher",
    responses(
        (status = 200, description = "All teachers", body = [Teacher]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "listTeachers"
)]
#[get("")]
pub async fn list_teachers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Teacher>>> {
    let teachers = state.teachers_query.list_teachers().await?;
    Ok(web::Json(teachers))
}

/// Create a teacher from a draft payload.
#[utoipa::path(
    post,
    path = "/api/v1/enhanced-teacher",
    request_body = TeacherDraft,
    responses(
        (status = 201, description = "Teacher created", body = Teacher),
        (status = 400, description = "Invalid teacher data", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "createTeacher"
)]
#[post("")]
pub async fn create_teacher(
    state: web::Data<HttpState>,
    payload: web::Json<TeacherDraft>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner();
    validate_draft(&draft)?;
    let teacher = state.teachers.create_teacher(draft).await?;
    Ok(HttpResponse::Created().json(teacher))
}

/// Filtered, paginated teacher search.
///
/// Query parameters: `domain`, `teaching_style`, `difficulty_level`,
/// `traits` (repeatable), `query`, `page`, `limit`. Unknown parameters are
/// ignored; malformed numbers fall back to `page=1`, `limit=10`.
#[utoipa::path(
    get,
    path = "/api/v1/enhanced-teacher/search",
    responses(
        (status = 200, description = "Matching page of teachers", body = TeacherPage),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "searchTeachers"
)]
#[get("/search")]
pub async fn search_teachers(
    state: web::Data<HttpState>,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<web::Json<TeacherPage>> {
    let (filters, page) = parse_search_params(query.into_inner());
    let result = state.teachers_query.search_teachers(filters, page).await?;
    Ok(web::Json(result))
}

/// Seed the fixed sample teachers.
#[utoipa::path(
    post,
    path = "/api/v1/enhanced-teacher/create-defaults",
    responses(
        (status = 201, description = "Default teachers created", body = CreateDefaultsResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "createDefaultTeachers"
)]
#[post("/create-defaults")]
pub async fn create_default_teachers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let teachers = state.teachers.create_default_teachers().await?;
    let count = teachers.len();
    Ok(HttpResponse::Created().json(CreateDefaultsResponse {
        message: "Default teachers created".to_owned(),
        teachers,
        count,
    }))
}

/// All teachers whose primary domain matches exactly, case-insensitively.
#[utoipa::path(
    get,
    path = "/api/v1/enhanced-teacher/domain/{domain}",
    params(("domain" = String, Path, description = "Primary domain to match")),
    responses(
        (status = 200, description = "Matching teachers", body = [Teacher]),
        (status = 404, description = "No teachers in this domain", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "teachersByDomain"
)]
#[get("/domain/{domain}")]
pub async fn teachers_by_domain(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Teacher>>> {
    let domain = path.into_inner();
    let teachers = state.teachers_query.teachers_by_domain(&domain).await?;
    if teachers.is_empty() {
        return Err(Error::not_found("No teachers found for this domain"));
    }
    Ok(web::Json(teachers))
}

/// Fetch one teacher by id.
#[utoipa::path(
    get,
    path = "/api/v1/enhanced-teacher/{teacher_id}",
    params(("teacher_id" = String, Path, description = "Teacher identifier")),
    responses(
        (status = 200, description = "The teacher", body = Teacher),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "Teacher not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "getTeacher"
)]
#[get("/{teacher_id}")]
pub async fn get_teacher(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Teacher>> {
    let id = parse_teacher_id(&path.into_inner())?;
    let teacher = state.teachers_query.get_teacher(&id).await?;
    Ok(web::Json(teacher))
}

/// Shallow-merge a partial update into a teacher.
///
/// Nested objects supplied in the body replace the stored objects wholesale.
#[utoipa::path(
    put,
    path = "/api/v1/enhanced-teacher/{teacher_id}",
    params(("teacher_id" = String, Path, description = "Teacher identifier")),
    request_body = TeacherUpdate,
    responses(
        (status = 200, description = "Updated teacher", body = Teacher),
        (status = 400, description = "Malformed id or body", body = Error),
        (status = 404, description = "Teacher not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "updateTeacher"
)]
#[put("/{teacher_id}")]
pub async fn update_teacher(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<TeacherUpdate>,
) -> ApiResult<web::Json<Teacher>> {
    let id = parse_teacher_id(&path.into_inner())?;
    let teacher = state
        .teachers
        .update_teacher(&id, payload.into_inner())
        .await?;
    Ok(web::Json(teacher))
}

/// Delete a teacher and cascade its ratings.
#[utoipa::path(
    delete,
    path = "/api/v1/enhanced-teacher/{teacher_id}",
    params(("teacher_id" = String, Path, description = "Teacher identifier")),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "Teacher not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "deleteTeacher"
)]
#[delete("/{teacher_id}")]
pub async fn delete_teacher(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_teacher_id(&path.into_inner())?;
    state.teachers.delete_teacher(&id).await?;
    Ok(web::Json(MessageResponse {
        message: format!("Enhanced teacher {id} deleted successfully"),
    }))
}

/// Append a rating and recompute the teacher's stored average.
#[utoipa::path(
    post,
    path = "/api/v1/enhanced-teacher/{teacher_id}/rating",
    params(("teacher_id" = String, Path, description = "Teacher identifier")),
    request_body = RatingRequest,
    responses(
        (status = 201, description = "Rating recorded", body = Rating),
        (status = 400, description = "Malformed id or body", body = Error),
        (status = 404, description = "Teacher not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "addRating"
)]
#[post("/{teacher_id}/rating")]
pub async fn add_rating(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RatingRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_teacher_id(&path.into_inner())?;
    let rating = state.teachers.add_rating(&id, payload.rating).await?;
    Ok(HttpResponse::Created().json(rating))
}

/// Increment a teacher's session counter.
#[utoipa::path(
    post,
    path = "/api/v1/enhanced-teacher/{teacher_id}/increment-session",
    params(("teacher_id" = String, Path, description = "Teacher identifier")),
    responses(
        (status = 200, description = "Counter incremented", body = MessageResponse),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "Teacher not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "incrementSession"
)]
#[post("/{teacher_id}/increment-session")]
pub async fn increment_session(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_teacher_id(&path.into_inner())?;
    state.teachers.increment_session(&id).await?;
    Ok(web::Json(MessageResponse {
        message: format!("Session count incremented for teacher {id}"),
    }))
}

/// Render the teacher's system prompt.
///
/// Any request body is accepted and ignored; rendering depends only on the
/// stored profile.
#[utoipa::path(
    post,
    path = "/api/v1/enhanced-teacher/{teacher_id}/generate-prompt",
    params(("teacher_id" = String, Path, description = "Teacher identifier")),
    responses(
        (status = 200, description = "Rendered prompt", body = GeneratedPrompt),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "Teacher not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teachers"],
    operation_id = "generatePrompt"
)]
#[post("/{teacher_id}/generate-prompt")]
pub async fn generate_prompt(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<GeneratedPrompt>> {
    let id = parse_teacher_id(&path.into_inner())?;
    let prompt = state.teachers_query.generate_prompt(&id).await?;
    Ok(web::Json(prompt))
}

/// The `/api/v1/enhanced-teacher` scope with every teacher route attached.
///
/// Literal routes are registered ahead of the `/{teacher_id}` matchers; see
/// the module docs.
#[must_use]
pub fn scope() -> actix_web::Scope {
    web::scope("/api/v1/enhanced-teacher")
        .service(list_teachers)
        .service(create_teacher)
        .service(search_teachers)
        .service(crate::inbound::http::styles::list_styles)
        .service(create_default_teachers)
        .service(teachers_by_domain)
        .service(get_teacher)
        .service(update_teacher)
        .service(delete_teacher)
        .service(add_rating)
        .service(increment_session)
        .service(generate_prompt)
}

#[cfg(test)]
#[path = "teachers_tests.rs"]
mod tests;
