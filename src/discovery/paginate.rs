// src/discovery/paginate.rs

use crate::models::discovery::{Page, Pagination};

/// Slices an already filtered and sorted sequence.
///
/// A page past the end yields empty `items` with the metadata still computed
/// from the full length.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Page<T> {
    let pagination = Pagination::new(page, limit, items.len());
    let start = (pagination.page - 1).saturating_mul(pagination.limit);

    let items = items
        .into_iter()
        .skip(start)
        .take(pagination.limit)
        .collect();

    Page { items, pagination }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_requested_page() {
        let page = paginate((1..=25).collect(), 3, 10);
        assert_eq!(page.items, (21..=25).collect::<Vec<i32>>());
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate(vec!["a", "b", "c"], 7, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn zero_page_and_limit_use_defaults() {
        let page = paginate((1..=15).collect(), 0, 0);
        assert_eq!(page.items, (1..=10).collect::<Vec<i32>>());
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_next);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let page = paginate(vec![1, 2, 3], usize::MAX, 10);
        assert!(page.items.is_empty());
        assert!(!page.pagination.has_next);
    }
}
