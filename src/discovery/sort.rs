// src/discovery/sort.rs

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::{
    discovery::{SortBy, SortOrder},
    quiz::Quiz,
};

/// Stable single-key sort.
///
/// `newest`/`oldest` fix their direction by name and ignore `order`.
/// `popular` and `rating` default to descending, `title` to ascending.
/// Ties keep their input order in either direction.
pub fn sort_quizzes(quizzes: &mut [&Quiz], sort_by: SortBy, order: Option<SortOrder>) {
    match sort_by {
        SortBy::Newest => sort_directed(quizzes, SortOrder::Desc, compare_created),
        SortBy::Oldest => sort_directed(quizzes, SortOrder::Asc, compare_created),
        SortBy::Popular => sort_directed(
            quizzes,
            order.unwrap_or(SortOrder::Desc),
            compare_participants,
        ),
        SortBy::Rating => {
            sort_directed(quizzes, order.unwrap_or(SortOrder::Desc), compare_rating)
        }
        SortBy::Title => sort_directed(quizzes, order.unwrap_or(SortOrder::Asc), compare_titles),
    }
}

fn sort_directed(quizzes: &mut [&Quiz], order: SortOrder, cmp: fn(&Quiz, &Quiz) -> Ordering) {
    // Swapping the operands instead of reversing the output keeps equal keys in input order.
    match order {
        SortOrder::Asc => quizzes.sort_by(|a, b| cmp(*a, *b)),
        SortOrder::Desc => quizzes.sort_by(|a, b| cmp(*b, *a)),
    }
}

fn created_at(quiz: &Quiz) -> DateTime<Utc> {
    quiz.created_at.unwrap_or_default()
}

fn compare_created(a: &Quiz, b: &Quiz) -> Ordering {
    created_at(a).cmp(&created_at(b))
}

fn compare_participants(a: &Quiz, b: &Quiz) -> Ordering {
    a.participants.unwrap_or(0).cmp(&b.participants.unwrap_or(0))
}

fn compare_rating(a: &Quiz, b: &Quiz) -> Ordering {
    a.rating.unwrap_or(0.0).total_cmp(&b.rating.unwrap_or(0.0))
}

/// Case-folded comparison first, raw text as tie-break so "apple" and
/// "Apple" still order deterministically.
fn compare_titles(a: &Quiz, b: &Quiz) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn quiz(id: &str, title: &str) -> Quiz {
        Quiz {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            author: None,
            category: None,
            difficulty: None,
            tags: None,
            is_public: true,
            rating: None,
            participants: None,
            created_at: None,
            cover_image: None,
            questions: None,
        }
    }

    fn ids(quizzes: &[&Quiz]) -> Vec<String> {
        quizzes.iter().map(|q| q.id.clone()).collect()
    }

    #[test]
    fn newest_puts_missing_dates_last() {
        let mut a = quiz("a", "A");
        a.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap());
        let b = quiz("b", "B");
        let mut c = quiz("c", "C");
        c.created_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());

        let mut list = vec![&a, &b, &c];
        sort_quizzes(&mut list, SortBy::Newest, None);
        assert_eq!(ids(&list), ["c", "a", "b"]);

        sort_quizzes(&mut list, SortBy::Oldest, Some(SortOrder::Desc));
        assert_eq!(ids(&list), ["b", "a", "c"]);
    }

    #[test]
    fn popular_and_rating_default_descending() {
        let mut a = quiz("a", "A");
        a.participants = Some(10);
        a.rating = Some(4.5);
        let mut b = quiz("b", "B");
        b.participants = Some(250);
        b.rating = Some(4.8);
        let c = quiz("c", "C");

        let mut list = vec![&a, &b, &c];
        sort_quizzes(&mut list, SortBy::Popular, None);
        assert_eq!(ids(&list), ["b", "a", "c"]);

        sort_quizzes(&mut list, SortBy::Rating, Some(SortOrder::Asc));
        assert_eq!(ids(&list), ["c", "a", "b"]);
    }

    #[test]
    fn title_sort_ignores_case_and_honours_order() {
        let a = quiz("a", "business English");
        let b = quiz("b", "Advanced Vocabulary");
        let c = quiz("c", "Conditionals");

        let mut list = vec![&a, &b, &c];
        sort_quizzes(&mut list, SortBy::Title, None);
        assert_eq!(ids(&list), ["b", "a", "c"]);

        sort_quizzes(&mut list, SortBy::Title, Some(SortOrder::Desc));
        assert_eq!(ids(&list), ["c", "a", "b"]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let mut a = quiz("a", "A");
        a.rating = Some(4.0);
        let mut b = quiz("b", "B");
        b.rating = Some(4.0);

        let mut list = vec![&a, &b];
        sort_quizzes(&mut list, SortBy::Rating, Some(SortOrder::Desc));
        assert_eq!(ids(&list), ["a", "b"]);
        sort_quizzes(&mut list, SortBy::Rating, Some(SortOrder::Asc));
        assert_eq!(ids(&list), ["a", "b"]);
    }
}
