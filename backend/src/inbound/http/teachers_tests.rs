//! Handler tests exercising the teacher routes over an in-memory store.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use super::{CreateDefaultsResponse, MessageResponse, scope};
use crate::domain::rating::Rating;
use crate::domain::teacher::Teacher;
use crate::domain::{Error, ErrorCode};
use crate::inbound::http::json_config;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

fn sample_draft(name: &str, domain: &str) -> Value {
    json!({
        "name": name,
        "title": "Professor",
        "specialization": { "primary_domain": domain }
    })
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::in_memory()))
                .app_data(json_config())
                .wrap(Trace)
                .service(scope()),
        )
        .await
    };
}

#[actix_web::test]
async fn create_fills_personality_defaults() {
    let app = app!();
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(sample_draft("Dr. Test", "Mathematics"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let teacher: Teacher = test::read_body_json(res).await;
    assert_eq!(teacher.name, "Dr. Test");
    assert_eq!(teacher.personality.teaching_style, "explanatory");
    assert_eq!(teacher.personality.encouragement_level, "high");
    assert_eq!(teacher.specialization.min_difficulty, "beginner");
    assert_eq!(teacher.total_sessions, 0);
    assert!(teacher.average_rating.is_none());
    assert!(teacher.is_active);
}

#[actix_web::test]
async fn create_rejects_blank_name() {
    let app = app!();
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(sample_draft("   ", "Mathematics"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, ErrorCode::InvalidRequest);
    assert_eq!(err.details.expect("details")["field"], "name");
}

#[actix_web::test]
async fn malformed_body_yields_the_error_envelope() {
    let app = app!();
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.details.expect("details")["code"], "malformed_body");
}

#[actix_web::test]
async fn get_reports_missing_and_malformed_ids() {
    let app = app!();
    let missing = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/enhanced-teacher/00000000-0000-4000-8000-000000000000")
            .to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let malformed = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/enhanced-teacher/not-a-uuid")
            .to_request(),
    )
    .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    let err: Error = test::read_body_json(malformed).await;
    assert_eq!(err.details.expect("details")["code"], "invalid_teacher_id");
}

#[actix_web::test]
async fn search_filters_and_paginates() {
    let app = app!();
    for name in ["A", "B", "C"] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/enhanced-teacher")
                .set_json(sample_draft(name, "Mathematics"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/enhanced-teacher/search?domain=math&page=1&limit=2&ignored=x")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = test::read_body_json(res).await;
    assert_eq!(page["teachers"].as_array().expect("teachers").len(), 2);
    assert_eq!(page["pagination"], json!({"total": 3, "page": 1, "limit": 2, "total_pages": 2}));
}

#[actix_web::test]
async fn search_tolerates_malformed_paging() {
    let app = app!();
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/enhanced-teacher/search?page=zero&limit=-3")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = test::read_body_json(res).await;
    assert_eq!(page["pagination"]["page"], 1);
    assert_eq!(page["pagination"]["limit"], 10);
}

#[actix_web::test]
async fn search_survives_a_huge_page_number() {
    let app = app!();
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(sample_draft("A", "Mathematics"))
            .to_request(),
    )
    .await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/enhanced-teacher/search?page=18446744073709551615&limit=10")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = test::read_body_json(res).await;
    assert!(page["teachers"].as_array().expect("teachers").is_empty());
    assert_eq!(page["pagination"]["total"], 1);
}

#[actix_web::test]
async fn styles_route_is_not_shadowed_by_the_id_matcher() {
    let app = app!();
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/enhanced-teacher/styles/all")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let catalog: Value = test::read_body_json(res).await;
    assert_eq!(catalog["teaching_styles"][0]["value"], "socratic");
    assert_eq!(catalog["personality_traits"].as_array().expect("traits").len(), 8);
}

#[actix_web::test]
async fn create_defaults_seeds_the_samples() {
    let app = app!();
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher/create-defaults")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: CreateDefaultsResponse = test::read_body_json(res).await;
    assert_eq!(body.count, 2);
    let names: Vec<_> = body.teachers.iter().map(|t| t.name.as_str()).collect();
    assert!(names.contains(&"Dr. Elizabeth Chen"));
    assert!(names.contains(&"Alex Rivera"));
}

#[actix_web::test]
async fn domain_lookup_is_exact_and_404s_when_empty() {
    let app = app!();
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(sample_draft("A", "Mathematics"))
            .to_request(),
    )
    .await;

    let hit = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/enhanced-teacher/domain/mathematics")
            .to_request(),
    )
    .await;
    assert_eq!(hit.status(), StatusCode::OK);
    let teachers: Vec<Teacher> = test::read_body_json(hit).await;
    assert_eq!(teachers.len(), 1);

    let miss = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/enhanced-teacher/domain/math")
            .to_request(),
    )
    .await;
    assert_eq!(miss.status(), StatusCode::NOT_FOUND);
    let err: Error = test::read_body_json(miss).await;
    assert_eq!(err.message, "No teachers found for this domain");
}

#[actix_web::test]
async fn rating_updates_the_stored_average() {
    let app = app!();
    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(sample_draft("A", "Mathematics"))
            .to_request(),
    )
    .await;
    let teacher: Teacher = test::read_body_json(created).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/enhanced-teacher/{}/rating", teacher.id))
            .set_json(json!({"rating": 4.0}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let rating: Rating = test::read_body_json(res).await;
    assert_eq!(rating.teacher_id, teacher.id);
    assert!((rating.rating - 4.0).abs() < f64::EPSILON);

    let fetched = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/enhanced-teacher/{}", teacher.id))
            .to_request(),
    )
    .await;
    let fetched: Teacher = test::read_body_json(fetched).await;
    assert_eq!(fetched.average_rating, Some(4.0));
}

#[actix_web::test]
async fn increment_session_acknowledges_and_404s_for_strangers() {
    let app = app!();
    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(sample_draft("A", "Mathematics"))
            .to_request(),
    )
    .await;
    let teacher: Teacher = test::read_body_json(created).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!(
                "/api/v1/enhanced-teacher/{}/increment-session",
                teacher.id
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: MessageResponse = test::read_body_json(res).await;
    assert!(body.message.contains(&teacher.id.to_string()));

    let stranger = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher/00000000-0000-4000-8000-000000000000/increment-session")
            .to_request(),
    )
    .await;
    assert_eq!(stranger.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_removes_the_teacher() {
    let app = app!();
    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(sample_draft("A", "Mathematics"))
            .to_request(),
    )
    .await;
    let teacher: Teacher = test::read_body_json(created).await;

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/enhanced-teacher/{}", teacher.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let gone = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/enhanced-teacher/{}", teacher.id))
            .to_request(),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn partial_personality_update_replaces_the_whole_object() {
    let app = app!();
    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(json!({
                "name": "A",
                "title": "Professor",
                "personality": { "teaching_style": "socratic", "humor_usage": "frequent" },
                "specialization": { "primary_domain": "Mathematics" }
            }))
            .to_request(),
    )
    .await;
    let teacher: Teacher = test::read_body_json(created).await;

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/enhanced-teacher/{}", teacher.id))
            .set_json(json!({"personality": {"teaching_style": "practical"}}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Teacher = test::read_body_json(res).await;
    assert_eq!(updated.personality.teaching_style, "practical");
    // Fields absent from the nested object revert to their defaults.
    assert_eq!(updated.personality.humor_usage, "moderate");
    assert_eq!(updated.name, "A");
}

#[actix_web::test]
async fn generate_prompt_renders_the_profile() {
    let app = app!();
    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/enhanced-teacher")
            .set_json(sample_draft("Dr. Test", "Mathematics"))
            .to_request(),
    )
    .await;
    let teacher: Teacher = test::read_body_json(created).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!(
                "/api/v1/enhanced-teacher/{}/generate-prompt",
                teacher.id
            ))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["name"], "Dr. Test");
    let prompt = body["system_prompt"].as_str().expect("prompt text");
    assert!(prompt.contains("Dr. Test"));
    assert!(prompt.contains("Mathematics"));
}
