// src/store/mod.rs

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::AppError, models::quiz::Quiz};

pub use memory::InMemoryQuizStore;

/// Which part of the catalog a listing draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every public quiz.
    Public,
    /// Quizzes authored by the user, any visibility.
    Mine(String),
    /// Quizzes the user saved, in save order.
    Saved(String),
}

/// Data source behind the discovery endpoints.
///
/// `snapshot` hands back an owned copy so callers can filter and sort
/// without holding any lock.
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn snapshot(&self, scope: &Scope) -> Result<Vec<Quiz>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Quiz>, AppError>;

    /// Fails with `Conflict` if the id is taken.
    async fn insert(&self, quiz: Quiz) -> Result<Quiz, AppError>;

    /// Idempotent. Fails with `NotFound` for an unknown quiz.
    async fn save_for_user(&self, user_id: &str, quiz_id: &str) -> Result<(), AppError>;

    /// Idempotent.
    async fn unsave_for_user(&self, user_id: &str, quiz_id: &str) -> Result<(), AppError>;
}

pub type SharedStore = Arc<dyn QuizStore>;
