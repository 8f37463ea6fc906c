//! Teacher domain services.
//!
//! [`TeacherCommandService`] and [`TeacherQueryService`] implement the
//! driving ports over any [`TeacherRepository`], owning the business rules:
//! id and timestamp assignment, ordering, search filtering and pagination,
//! rating existence checks, prompt rendering, and sample-data seeding.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{
    TeacherCommand, TeacherQuery, TeacherRepository, TeacherRepositoryError,
};
use crate::domain::prompt::{self, GeneratedPrompt};
use crate::domain::rating::{self, Rating};
use crate::domain::search::{PageRequest, SearchFilters, TeacherPage, paginate};
use crate::domain::teacher::{
    Adaptation, Personality, Specialization, Teacher, TeacherDraft, TeacherId, TeacherUpdate,
};

fn map_repository_error(error: TeacherRepositoryError) -> Error {
    Error::internal(format!("teacher repository error: {error}"))
}

fn teacher_not_found(id: &TeacherId) -> Error {
    Error::not_found(format!("teacher {id} not found"))
}

/// Sort newest first; ids break creation-time ties deterministically.
fn sort_newest_first(teachers: &mut [Teacher]) {
    teachers.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
    });
}

/// The fixed sample profiles seeded by the create-defaults operation.
fn default_drafts() -> Vec<TeacherDraft> {
    let owned = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
    vec![
        TeacherDraft {
            name: "Dr. Elizabeth Chen".to_owned(),
            title: "Professor".to_owned(),
            avatar_url: Some(
                "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400"
                    .to_owned(),
            ),
            personality: Personality {
                primary_traits: owned(&["analytical", "encouraging", "patient"]),
                teaching_style: "socratic".to_owned(),
                humor_usage: "moderate".to_owned(),
                signature_phrases: owned(&[
                    "Let's think about this step by step",
                    "Great question!",
                    "What do you think might happen if...?",
                ]),
                ..Personality::default()
            },
            specialization: Specialization {
                primary_domain: "Mathematics".to_owned(),
                specializations: owned(&["Calculus", "Linear Algebra", "Statistics"]),
                min_difficulty: "beginner".to_owned(),
                max_difficulty: "expert".to_owned(),
                can_create_exercises: true,
                can_grade_work: true,
                can_create_curriculum: true,
                external_resources: owned(&[
                    "Khan Academy",
                    "Wolfram Alpha",
                    "MIT OpenCourseWare",
                ]),
            },
            adaptation: Adaptation {
                adapts_to_learning_style: true,
                pace_adjustment: true,
                difficulty_scaling: true,
                remembers_context: true,
                tracks_progress: true,
            },
            system_prompt_template: None,
            created_by: None,
            is_active: true,
        },
        TeacherDraft {
            name: "Alex Rivera".to_owned(),
            title: "Senior Developer".to_owned(),
            avatar_url: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400"
                    .to_owned(),
            ),
            personality: Personality {
                primary_traits: owned(&["practical", "creative", "humorous"]),
                teaching_style: "practical".to_owned(),
                humor_usage: "frequent".to_owned(),
                signature_phrases: owned(&[
                    "Let's code this up!",
                    "Here's a neat trick",
                    "Don't worry, we've all been there",
                ]),
                ..Personality::default()
            },
            specialization: Specialization {
                primary_domain: "Programming".to_owned(),
                specializations: owned(&["JavaScript", "React", "Node.js", "Python"]),
                min_difficulty: "beginner".to_owned(),
                max_difficulty: "advanced".to_owned(),
                can_create_exercises: true,
                can_grade_work: true,
                can_create_curriculum: true,
                external_resources: owned(&["MDN Web Docs", "freeCodeCamp", "Stack Overflow"]),
            },
            adaptation: Adaptation {
                adapts_to_learning_style: true,
                pace_adjustment: true,
                difficulty_scaling: true,
                remembers_context: true,
                tracks_progress: true,
            },
            system_prompt_template: None,
            created_by: None,
            is_active: true,
        },
    ]
}

/// Command-side teacher service.
#[derive(Clone)]
pub struct TeacherCommandService<R> {
    teacher_repo: Arc<R>,
}

impl<R> TeacherCommandService<R> {
    /// Create a command service over the given repository.
    pub fn new(teacher_repo: Arc<R>) -> Self {
        Self { teacher_repo }
    }
}

#[async_trait]
impl<R> TeacherCommand for TeacherCommandService<R>
where
    R: TeacherRepository,
{
    async fn create_teacher(&self, draft: TeacherDraft) -> Result<Teacher, Error> {
        let teacher = Teacher::from_draft(TeacherId::random(), draft, Utc::now());
        self.teacher_repo
            .insert(teacher.clone())
            .await
            .map_err(map_repository_error)?;
        info!(teacher_id = %teacher.id, name = %teacher.name, "teacher created");
        Ok(teacher)
    }

    async fn update_teacher(
        &self,
        id: &TeacherId,
        update: TeacherUpdate,
    ) -> Result<Teacher, Error> {
        self.teacher_repo
            .update(id, update, Utc::now())
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| teacher_not_found(id))
    }

    async fn delete_teacher(&self, id: &TeacherId) -> Result<(), Error> {
        let deleted = self
            .teacher_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted {
            info!(teacher_id = %id, "teacher deleted");
            Ok(())
        } else {
            Err(teacher_not_found(id))
        }
    }

    async fn increment_session(&self, id: &TeacherId) -> Result<(), Error> {
        let bumped = self
            .teacher_repo
            .increment_sessions(id, Utc::now())
            .await
            .map_err(map_repository_error)?;
        if bumped {
            Ok(())
        } else {
            Err(teacher_not_found(id))
        }
    }

    async fn add_rating(&self, id: &TeacherId, score: f64) -> Result<Rating, Error> {
        self.teacher_repo
            .append_rating(id, score, Utc::now())
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| teacher_not_found(id))
    }

    async fn create_default_teachers(&self) -> Result<Vec<Teacher>, Error> {
        let mut created = Vec::new();
        for draft in default_drafts() {
            created.push(self.create_teacher(draft).await?);
        }
        info!(count = created.len(), "default teachers created");
        Ok(created)
    }
}

/// Query-side teacher service.
#[derive(Clone)]
pub struct TeacherQueryService<R> {
    teacher_repo: Arc<R>,
}

impl<R> TeacherQueryService<R> {
    /// Create a query service over the given repository.
    pub fn new(teacher_repo: Arc<R>) -> Self {
        Self { teacher_repo }
    }
}

impl<R> TeacherQueryService<R>
where
    R: TeacherRepository,
{
    async fn list_sorted(&self) -> Result<Vec<Teacher>, Error> {
        let mut teachers = self
            .teacher_repo
            .list()
            .await
            .map_err(map_repository_error)?;
        sort_newest_first(&mut teachers);
        Ok(teachers)
    }
}

#[async_trait]
impl<R> TeacherQuery for TeacherQueryService<R>
where
    R: TeacherRepository,
{
    async fn get_teacher(&self, id: &TeacherId) -> Result<Teacher, Error> {
        self.teacher_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| teacher_not_found(id))
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, Error> {
        self.list_sorted().await
    }

    async fn search_teachers(
        &self,
        filters: SearchFilters,
        page: PageRequest,
    ) -> Result<TeacherPage, Error> {
        let teachers = self.list_sorted().await?;
        let matching: Vec<Teacher> = teachers
            .into_iter()
            .filter(|teacher| filters.matches(teacher))
            .collect();
        Ok(paginate(matching, page))
    }

    async fn teachers_by_domain(&self, domain: &str) -> Result<Vec<Teacher>, Error> {
        let needle = domain.to_lowercase();
        let teachers = self.list_sorted().await?;
        Ok(teachers
            .into_iter()
            .filter(|teacher| teacher.specialization.primary_domain.to_lowercase() == needle)
            .collect())
    }

    async fn average_rating(&self, id: &TeacherId) -> Result<Option<f64>, Error> {
        let ratings = self
            .teacher_repo
            .ratings_for(id)
            .await
            .map_err(map_repository_error)?;
        let scores: Vec<f64> = ratings.iter().map(|r| r.rating).collect();
        Ok(rating::mean(&scores))
    }

    async fn generate_prompt(&self, id: &TeacherId) -> Result<GeneratedPrompt, Error> {
        let teacher = self.get_teacher(id).await?;
        Ok(prompt::render(&teacher))
    }
}

#[cfg(test)]
#[path = "teacher_service_tests.rs"]
mod tests;
