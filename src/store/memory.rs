// src/store/memory.rs

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QuizStore, Scope};
use crate::{error::AppError, models::quiz::Quiz};

const SAMPLE_CATALOG: &str = include_str!("../../data/sample_quizzes.json");

#[derive(Debug, Default)]
struct Catalog {
    /// Insertion order.
    quizzes: Vec<Quiz>,
    /// User ID -> saved quiz IDs, in save order.
    saved: HashMap<String, Vec<String>>,
}

impl Catalog {
    fn get(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }
}

/// Quiz store held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryQuizStore {
    inner: RwLock<Catalog>,
}

impl InMemoryQuizStore {
    /// Builds a store from seed records. Duplicate IDs are rejected.
    pub fn new(quizzes: Vec<Quiz>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for quiz in &quizzes {
            if !seen.insert(quiz.id.as_str()) {
                return Err(AppError::Conflict(format!(
                    "Duplicate quiz id '{}' in catalog",
                    quiz.id
                )));
            }
        }

        Ok(Self {
            inner: RwLock::new(Catalog {
                quizzes,
                saved: HashMap::new(),
            }),
        })
    }

    /// Parses a JSON array of quiz records.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let quizzes: Vec<Quiz> = serde_json::from_str(raw)
            .map_err(|e| AppError::InternalServerError(format!("Invalid catalog JSON: {}", e)))?;
        Self::new(quizzes)
    }

    /// The catalog bundled with the binary.
    pub fn sample() -> Result<Self, AppError> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Loads the catalog from `path`, or the bundled sample when unset.
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                tracing::info!("Loading quiz catalog from {}", path);
                let raw = tokio::fs::read_to_string(path).await?;
                Self::from_json(&raw)
            }
            None => {
                tracing::info!("No CATALOG_PATH set, using bundled sample catalog");
                Self::sample()
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.quizzes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl QuizStore for InMemoryQuizStore {
    async fn snapshot(&self, scope: &Scope) -> Result<Vec<Quiz>, AppError> {
        let catalog = self.inner.read().await;

        let quizzes = match scope {
            Scope::Public => catalog
                .quizzes
                .iter()
                .filter(|q| q.is_public)
                .cloned()
                .collect(),
            Scope::Mine(user_id) => catalog
                .quizzes
                .iter()
                .filter(|q| q.author_id() == Some(user_id.as_str()))
                .cloned()
                .collect(),
            Scope::Saved(user_id) => catalog
                .saved
                .get(user_id)
                .into_iter()
                .flatten()
                .filter_map(|id| catalog.get(id))
                .filter(|q| q.is_visible_to(Some(user_id.as_str())))
                .cloned()
                .collect(),
        };

        Ok(quizzes)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Quiz>, AppError> {
        Ok(self.inner.read().await.get(id).cloned())
    }

    async fn insert(&self, quiz: Quiz) -> Result<Quiz, AppError> {
        let mut catalog = self.inner.write().await;
        if catalog.get(&quiz.id).is_some() {
            return Err(AppError::Conflict(format!(
                "Quiz '{}' already exists",
                quiz.id
            )));
        }

        tracing::info!("Quiz {} created by {:?}", quiz.id, quiz.author_id());
        catalog.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn save_for_user(&self, user_id: &str, quiz_id: &str) -> Result<(), AppError> {
        let mut catalog = self.inner.write().await;
        if catalog.get(quiz_id).is_none() {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        let saved = catalog.saved.entry(user_id.to_string()).or_default();
        if !saved.iter().any(|id| id == quiz_id) {
            saved.push(quiz_id.to_string());
            tracing::info!("User {} saved quiz {}", user_id, quiz_id);
        }
        Ok(())
    }

    async fn unsave_for_user(&self, user_id: &str, quiz_id: &str) -> Result<(), AppError> {
        let mut catalog = self.inner.write().await;
        if let Some(saved) = catalog.saved.get_mut(user_id) {
            let before = saved.len();
            saved.retain(|id| id != quiz_id);
            if saved.len() != before {
                tracing::info!("User {} removed quiz {} from saved", user_id, quiz_id);
            }
        }
        Ok(())
    }
}
