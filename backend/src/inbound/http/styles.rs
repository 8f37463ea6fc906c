//! Static catalogue of teaching styles, personality traits, and difficulty
//! levels offered to profile-builder UIs.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// A selectable option with a machine value and a display label.
///
/// Response-only; the static strings never round-trip back in.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StyleOption {
    /// Stable machine-readable value.
    pub value: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// The full option catalogue.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StyleCatalog {
    /// How the teacher structures explanations.
    pub teaching_styles: Vec<StyleOption>,
    /// Traits a search can filter on.
    pub personality_traits: Vec<StyleOption>,
    /// Supported difficulty bands.
    pub difficulty_levels: Vec<StyleOption>,
}

const fn option(value: &'static str, label: &'static str) -> StyleOption {
    StyleOption { value, label }
}

impl StyleCatalog {
    /// The catalogue is fixed at compile time; no storage round-trip.
    #[must_use]
    pub fn current() -> Self {
        Self {
            teaching_styles: vec![
                option("socratic", "Socratic (Question-based)"),
                option("explanatory", "Explanatory (Detailed explanations)"),
                option("practical", "Practical (Hands-on examples)"),
                option("theoretical", "Theoretical (Concept-focused)"),
                option("adaptive", "Adaptive (Adjusts to student)"),
            ],
            personality_traits: vec![
                option("encouraging", "Encouraging"),
                option("patient", "Patient"),
                option("challenging", "Challenging"),
                option("humorous", "Humorous"),
                option("formal", "Formal"),
                option("casual", "Casual"),
                option("analytical", "Analytical"),
                option("creative", "Creative"),
            ],
            difficulty_levels: vec![
                option("beginner", "Beginner"),
                option("intermediate", "Intermediate"),
                option("advanced", "Advanced"),
                option("expert", "Expert"),
            ],
        }
    }
}

/// List the static style options.
#[utoipa::path(
    get,
    path = "/api/v1/enhanced-teacher/styles/all",
    responses(
        (status = 200, description = "Available style options", body = StyleCatalog)
    ),
    tags = ["styles"],
    operation_id = "listStyles"
)]
#[get("/styles/all")]
pub async fn list_styles() -> web::Json<StyleCatalog> {
    web::Json(StyleCatalog::current())
}
