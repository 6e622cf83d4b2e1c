// src/discovery/filter.rs

use std::collections::HashSet;

use crate::models::{
    discovery::DiscoveryQuery,
    quiz::{Difficulty, Quiz},
};

/// Case-folded view of the active constraints of a `DiscoveryQuery`.
///
/// Inactive constraints are `None` / empty. All string comparisons happen
/// on lower-cased values on both sides.
#[derive(Debug)]
pub struct Criteria<'a> {
    search: Option<String>,
    category: Option<String>,
    difficulty: Option<DifficultyFilter>,
    tags: HashSet<String>,
    author_id: Option<&'a str>,
    is_public: Option<bool>,
}

/// A difficulty filter that names no known level matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DifficultyFilter {
    Level(Difficulty),
    Unknown,
}

impl<'a> Criteria<'a> {
    pub fn from_query(query: &'a DiscoveryQuery) -> Self {
        Self {
            search: search_term(query.search.as_deref()),
            category: constraint(query.category.as_deref()),
            difficulty: constraint(query.difficulty.as_deref()).map(|value| {
                Difficulty::parse(&value).map_or(DifficultyFilter::Unknown, DifficultyFilter::Level)
            }),
            tags: query
                .tags
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            author_id: query.author_id.as_deref().filter(|id| !id.is_empty()),
            is_public: query.is_public,
        }
    }

    /// True when the quiz passes every active predicate.
    pub fn matches(&self, quiz: &Quiz) -> bool {
        self.matches_search(quiz)
            && self.matches_category(quiz)
            && self.matches_difficulty(quiz)
            && self.matches_tags(quiz)
            && self.matches_author(quiz)
            && self.matches_visibility(quiz)
    }

    fn matches_search(&self, quiz: &Quiz) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let contains = |text: &str| text.to_lowercase().contains(term);

        contains(quiz.title.as_str())
            || quiz.description.as_deref().is_some_and(|d| contains(d))
            || quiz.author_name().is_some_and(|n| contains(n))
            || quiz.tags.iter().flatten().any(|t| contains(t.as_str()))
            || quiz
                .questions
                .iter()
                .flatten()
                .filter_map(|q| q.category.as_deref())
                .any(|c| contains(c))
    }

    fn matches_category(&self, quiz: &Quiz) -> bool {
        match &self.category {
            None => true,
            Some(wanted) => quiz
                .category
                .as_deref()
                .is_some_and(|c| c.trim().to_lowercase() == *wanted),
        }
    }

    fn matches_difficulty(&self, quiz: &Quiz) -> bool {
        match self.difficulty {
            None => true,
            Some(DifficultyFilter::Unknown) => false,
            Some(DifficultyFilter::Level(level)) => quiz.difficulty == Some(level),
        }
    }

    fn matches_tags(&self, quiz: &Quiz) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        quiz.tags
            .iter()
            .flatten()
            .any(|t| self.tags.contains(&t.trim().to_lowercase()))
    }

    fn matches_author(&self, quiz: &Quiz) -> bool {
        match self.author_id {
            None => true,
            Some(wanted) => quiz.author_id() == Some(wanted),
        }
    }

    fn matches_visibility(&self, quiz: &Quiz) -> bool {
        self.is_public.is_none_or(|wanted| quiz.is_public == wanted)
    }
}

fn search_term(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

/// Like `search_term`, but `"all"` also disables the constraint.
fn constraint(value: Option<&str>) -> Option<String> {
    search_term(value).filter(|v| v != "all")
}
