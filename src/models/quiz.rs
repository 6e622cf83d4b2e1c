// src/models/quiz.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

/// Difficulty band of a quiz.
///
/// Variants are declared in rank order, so the derived `Ord` gives
/// `All Levels` (0) < `Beginner` (1) < `Intermediate` (2) < `Advanced` (3).
///
/// Stored and submitted values go through [`Difficulty::parse`], so any
/// casing and the `all-levels` / `all_levels` spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Difficulty {
    #[serde(rename = "All Levels")]
    AllLevels,
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::AllLevels,
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::AllLevels => "All Levels",
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Difficulty::AllLevels => 0,
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    /// Case-insensitive lookup by label. `all-levels` and `all_levels` are
    /// accepted as spellings of `All Levels`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(&normalized))
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Difficulty::parse(&value).ok_or_else(|| format!("unknown difficulty '{}'", value))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owner of a quiz, resolved by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Lightweight view of a question attached to a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// A quiz record as held by the catalog.
///
/// Everything except `id` and `title` may be absent in stored data; the
/// discovery engine treats a missing field as "does not match" for the
/// filter that reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_public: bool,
    /// Average rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "attempts")]
    pub participants: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<QuestionSummary>>,
}

impl Quiz {
    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.id.as_str())
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.name.as_deref())
    }

    /// Public quizzes are visible to everyone, private ones only to their author.
    pub fn is_visible_to(&self, user_id: Option<&str>) -> bool {
        self.is_public || (user_id.is_some() && self.author_id() == user_id)
    }
}

/// DTO for a question submitted with a new quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub prompt: String,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
}

/// DTO for creating a new quiz.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[validate(custom(function = validate_title))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,

    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    #[validate(custom(function = validate_tags))]
    pub tags: Vec<String>,

    #[serde(default)]
    pub is_public: bool,

    #[validate(length(max = 500), custom(function = validate_url_string))]
    pub cover_image: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub questions: Vec<CreateQuestionRequest>,
}

impl CreateQuizRequest {
    /// Builds the stored record. The caller supplies the server-assigned fields.
    pub fn into_quiz(self, id: String, author: Author, created_at: DateTime<Utc>) -> Quiz {
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| QuestionSummary {
                id: format!("{}-q{}", id, i + 1),
                prompt: q.prompt,
                category: q.category,
            })
            .collect();

        Quiz {
            id,
            title: self.title.trim().to_string(),
            description: self.description,
            author: Some(author),
            category: self.category,
            difficulty: self.difficulty,
            tags: Some(self.tags),
            is_public: self.is_public,
            rating: None,
            participants: Some(0),
            created_at: Some(created_at),
            cover_image: self.cover_image,
            questions: Some(questions),
        }
    }
}

const MAX_TITLE_CHARS: usize = 200;
const MAX_TAGS: usize = 10;

/// Length is measured after trimming, the same way the title is stored.
fn validate_title(title: &str) -> Result<(), validator::ValidationError> {
    let len = title.trim().chars().count();
    if len == 0 || len > MAX_TITLE_CHARS {
        return Err(validator::ValidationError::new("invalid_title_length")
            .with_message("Title length must be between 1 and 200 chars".into()));
    }
    Ok(())
}

fn validate_tags(tags: &[String]) -> Result<(), validator::ValidationError> {
    if tags.len() > MAX_TAGS {
        return Err(validator::ValidationError::new("too_many_tags"));
    }
    for tag in tags {
        let len = tag.trim().chars().count();
        if len == 0 || len > 30 {
            return Err(validator::ValidationError::new("invalid_tag_length"));
        }
    }
    Ok(())
}

fn validate_url_string(url: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(url).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}
