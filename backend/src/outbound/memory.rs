//! In-memory storage adapters.
//!
//! The authoritative keeper of all teacher, rating, and user records for the
//! lifetime of the process; nothing survives a restart. A single
//! `tokio::sync::RwLock` per store serialises compound mutations (merge
//! update, session increment, rating append plus mean recompute) so they are
//! atomic even under multi-worker actix.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::ports::{
    TeacherRepository, TeacherRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::rating::{self, Rating};
use crate::domain::teacher::{Teacher, TeacherId, TeacherUpdate};
use crate::domain::user::{User, UserDraft};

#[derive(Debug, Default)]
struct TeacherStore {
    teachers: HashMap<TeacherId, Teacher>,
    ratings: HashMap<TeacherId, Vec<Rating>>,
    next_rating_id: i64,
}

/// Map-backed [`TeacherRepository`].
#[derive(Debug, Default)]
pub struct InMemoryTeacherRepository {
    store: RwLock<TeacherStore>,
}

impl InMemoryTeacherRepository {
    /// Create an empty store. Rating ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwLock::new(TeacherStore {
                teachers: HashMap::new(),
                ratings: HashMap::new(),
                next_rating_id: 1,
            }),
        }
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn insert(&self, teacher: Teacher) -> Result<(), TeacherRepositoryError> {
        let mut store = self.store.write().await;
        store.teachers.insert(teacher.id, teacher);
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &TeacherId,
    ) -> Result<Option<Teacher>, TeacherRepositoryError> {
        let store = self.store.read().await;
        Ok(store.teachers.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Teacher>, TeacherRepositoryError> {
        let store = self.store.read().await;
        Ok(store.teachers.values().cloned().collect())
    }

    async fn update(
        &self,
        id: &TeacherId,
        update: TeacherUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Teacher>, TeacherRepositoryError> {
        let mut store = self.store.write().await;
        Ok(store.teachers.get_mut(id).map(|teacher| {
            teacher.apply(update, now);
            teacher.clone()
        }))
    }

    async fn delete(&self, id: &TeacherId) -> Result<bool, TeacherRepositoryError> {
        let mut store = self.store.write().await;
        let removed = store.teachers.remove(id).is_some();
        if removed {
            store.ratings.remove(id);
        }
        Ok(removed)
    }

    async fn increment_sessions(
        &self,
        id: &TeacherId,
        now: DateTime<Utc>,
    ) -> Result<bool, TeacherRepositoryError> {
        let mut store = self.store.write().await;
        Ok(store
            .teachers
            .get_mut(id)
            .map(|teacher| teacher.bump_sessions(now))
            .is_some())
    }

    async fn append_rating(
        &self,
        id: &TeacherId,
        score: f64,
        now: DateTime<Utc>,
    ) -> Result<Option<Rating>, TeacherRepositoryError> {
        let mut store = self.store.write().await;
        if !store.teachers.contains_key(id) {
            return Ok(None);
        }

        let rating_id = store.next_rating_id;
        store.next_rating_id += 1;
        let entry = Rating {
            id: rating_id,
            teacher_id: *id,
            rating: score,
            created_at: now,
        };
        let history = store.ratings.entry(*id).or_default();
        history.push(entry.clone());
        let scores: Vec<f64> = history.iter().map(|r| r.rating).collect();
        let average = rating::mean(&scores);

        if let Some(teacher) = store.teachers.get_mut(id) {
            teacher.set_average_rating(average, now);
        }
        Ok(Some(entry))
    }

    async fn ratings_for(&self, id: &TeacherId) -> Result<Vec<Rating>, TeacherRepositoryError> {
        let store = self.store.read().await;
        Ok(store.ratings.get(id).cloned().unwrap_or_default())
    }
}

#[derive(Debug, Default)]
struct UserStore {
    users: HashMap<i64, User>,
    next_user_id: i64,
}

/// Map-backed [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    /// Create an empty store. User ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwLock::new(UserStore {
                users: HashMap::new(),
                next_user_id: 1,
            }),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserRepositoryError> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, draft: UserDraft) -> Result<User, UserRepositoryError> {
        let mut store = self.store.write().await;
        if store.users.values().any(|user| user.username == draft.username) {
            return Err(UserRepositoryError::duplicate_username(draft.username));
        }
        let id = store.next_user_id;
        store.next_user_id += 1;
        let user = User {
            id,
            username: draft.username,
            password: draft.password,
        };
        store.users.insert(id, user.clone());
        Ok(user)
    }
}
