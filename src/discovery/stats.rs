// src/discovery/stats.rs

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::quiz::{Difficulty, Quiz};

/// Aggregate figures over a quiz collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_quizzes: usize,
    pub public_quizzes: usize,
    pub total_participants: u64,
    /// Mean of the quizzes that carry a rating, one decimal. `None` if none do.
    pub average_rating: Option<f64>,
    /// Keyed by lower-cased category.
    pub by_category: BTreeMap<String, usize>,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
}

/// Distinct values present in a collection, for populating filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub difficulties: Vec<Difficulty>,
    pub tags: Vec<String>,
}

/// Stats and filter options served together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogOverview {
    pub stats: CatalogStats,
    pub filters: FilterOptions,
}

impl CatalogOverview {
    pub fn of(quizzes: &[Quiz]) -> Self {
        Self {
            stats: summarize(quizzes),
            filters: filter_options(quizzes),
        }
    }
}

pub fn summarize(quizzes: &[Quiz]) -> CatalogStats {
    let mut by_category = BTreeMap::new();
    let mut by_difficulty = BTreeMap::new();
    let mut rating_sum = 0.0;
    let mut rated = 0usize;

    for quiz in quizzes {
        if let Some(category) = normalized(quiz.category.as_deref()) {
            *by_category.entry(category).or_insert(0) += 1;
        }
        if let Some(difficulty) = quiz.difficulty {
            *by_difficulty.entry(difficulty).or_insert(0) += 1;
        }
        if let Some(rating) = quiz.rating {
            rating_sum += rating;
            rated += 1;
        }
    }

    let average_rating = (rated > 0).then(|| (rating_sum / rated as f64 * 10.0).round() / 10.0);

    CatalogStats {
        total_quizzes: quizzes.len(),
        public_quizzes: quizzes.iter().filter(|q| q.is_public).count(),
        total_participants: quizzes
            .iter()
            .filter_map(|q| q.participants)
            .fold(0, u64::saturating_add),
        average_rating,
        by_category,
        by_difficulty,
    }
}

pub fn filter_options(quizzes: &[Quiz]) -> FilterOptions {
    let categories: BTreeSet<String> = quizzes
        .iter()
        .filter_map(|q| normalized(q.category.as_deref()))
        .collect();
    let difficulties: BTreeSet<Difficulty> = quizzes.iter().filter_map(|q| q.difficulty).collect();
    let tags: BTreeSet<String> = quizzes
        .iter()
        .flat_map(|q| q.tags.iter().flatten())
        .filter_map(|t| normalized(Some(t.as_str())))
        .collect();

    FilterOptions {
        categories: categories.into_iter().collect(),
        difficulties: difficulties.into_iter().collect(),
        tags: tags.into_iter().collect(),
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(id: &str, category: Option<&str>, difficulty: Option<Difficulty>) -> Quiz {
        Quiz {
            id: id.to_string(),
            title: format!("Quiz {}", id),
            description: None,
            author: None,
            category: category.map(str::to_string),
            difficulty,
            tags: None,
            is_public: true,
            rating: None,
            participants: None,
            created_at: None,
            cover_image: None,
            questions: None,
        }
    }

    #[test]
    fn summarize_counts_and_averages() {
        let mut a = quiz("a", Some("Grammar"), Some(Difficulty::Beginner));
        a.rating = Some(4.0);
        a.participants = Some(100);
        let mut b = quiz("b", Some("grammar"), Some(Difficulty::Advanced));
        b.rating = Some(5.0);
        b.is_public = false;
        let mut c = quiz("c", None, None);
        c.participants = Some(5);

        let stats = summarize(&[a, b, c]);
        assert_eq!(stats.total_quizzes, 3);
        assert_eq!(stats.public_quizzes, 2);
        assert_eq!(stats.total_participants, 105);
        assert_eq!(stats.average_rating, Some(4.5));
        assert_eq!(stats.by_category.get("grammar"), Some(&2));
        assert_eq!(stats.by_category.len(), 1);
        assert_eq!(
            stats.by_difficulty.keys().copied().collect::<Vec<_>>(),
            vec![Difficulty::Beginner, Difficulty::Advanced]
        );
    }

    #[test]
    fn participant_total_saturates() {
        let mut a = quiz("a", None, None);
        a.participants = Some(u64::MAX - 1);
        let mut b = quiz("b", None, None);
        b.participants = Some(5);

        assert_eq!(summarize(&[a, b]).total_participants, u64::MAX);
    }

    #[test]
    fn summarize_empty_collection() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_quizzes, 0);
        assert_eq!(stats.average_rating, None);
        assert!(stats.by_category.is_empty());
    }

    #[test]
    fn filter_options_are_distinct_and_sorted() {
        let mut a = quiz("a", Some("Vocabulary"), Some(Difficulty::Advanced));
        a.tags = Some(vec!["Words".to_string(), "exam".to_string()]);
        let mut b = quiz("b", Some("grammar"), Some(Difficulty::AllLevels));
        b.tags = Some(vec!["words".to_string(), " ".to_string()]);

        let options = filter_options(&[a, b]);
        assert_eq!(options.categories, vec!["grammar", "vocabulary"]);
        assert_eq!(
            options.difficulties,
            vec![Difficulty::AllLevels, Difficulty::Advanced]
        );
        assert_eq!(options.tags, vec!["exam", "words"]);
    }
}
