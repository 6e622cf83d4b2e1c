// src/models/discovery.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Sort key for discovery results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    Popular,
    Rating,
    Title,
}

impl SortBy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(SortBy::Newest),
            "oldest" => Some(SortBy::Oldest),
            "popular" => Some(SortBy::Popular),
            "rating" => Some(SortBy::Rating),
            "title" => Some(SortBy::Title),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Default and maximum page size applied when normalizing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default: usize,
    pub max: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default: DEFAULT_PAGE_SIZE,
            max: MAX_PAGE_SIZE,
        }
    }
}

/// Query parameters for listing quizzes, exactly as they arrive in the URL.
///
/// Every field is kept as a string so that malformed values can be coerced
/// to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(alias = "q")]
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// Comma separated.
    pub tags: Option<String>,
    pub author_id: Option<String>,
    pub is_public: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    /// 'public' (default), 'mine' or 'saved'.
    pub scope: Option<String>,
}

/// Filter, sort and pagination settings for one discovery call.
///
/// String constraints may be given in any case; `"all"` or an empty value
/// for category and difficulty means "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// ANY-match: a quiz qualifies when it carries at least one of these.
    pub tags: Vec<String>,
    pub author_id: Option<String>,
    pub is_public: Option<bool>,
    pub sort_by: SortBy,
    pub sort_order: Option<SortOrder>,
    /// 1-based.
    pub page: usize,
    pub limit: usize,
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            difficulty: None,
            tags: Vec::new(),
            author_id: None,
            is_public: None,
            sort_by: SortBy::Newest,
            sort_order: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DiscoveryQuery {
    /// Normalizes raw URL parameters. Never fails: unparseable values fall
    /// back to their defaults.
    pub fn from_params(params: &ListParams, limits: PageLimits) -> Self {
        let page = parse_positive(params.page.as_deref()).unwrap_or(1);
        let limit = parse_positive(params.limit.as_deref())
            .unwrap_or(limits.default)
            .min(limits.max.max(1));

        let tags = params
            .tags
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            search: non_empty(params.search.as_deref()),
            category: non_empty(params.category.as_deref()),
            difficulty: non_empty(params.difficulty.as_deref()),
            tags,
            author_id: non_empty(params.author_id.as_deref()),
            is_public: params.is_public.as_deref().and_then(parse_bool),
            sort_by: params
                .sort_by
                .as_deref()
                .and_then(SortBy::parse)
                .unwrap_or_default(),
            sort_order: params.sort_order.as_deref().and_then(SortOrder::parse),
            page,
            limit,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .and_then(|v| usize::try_from(v).ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Pagination metadata, computed from the filtered count before slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Page 0 is read as page 1; a zero limit falls back to `DEFAULT_PAGE_SIZE`.
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = if limit == 0 { DEFAULT_PAGE_SIZE } else { limit };
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
            has_next: page.saturating_mul(limit) < total,
            has_prev: page > 1,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut p = ListParams::default();
        for (key, value) in pairs {
            let v = Some(value.to_string());
            match *key {
                "search" => p.search = v,
                "category" => p.category = v,
                "tags" => p.tags = v,
                "isPublic" => p.is_public = v,
                "sortBy" => p.sort_by = v,
                "sortOrder" => p.sort_order = v,
                "page" => p.page = v,
                "limit" => p.limit = v,
                _ => unreachable!("unknown key {}", key),
            }
        }
        p
    }

    #[test]
    fn malformed_page_and_limit_fall_back_to_defaults() {
        let q = DiscoveryQuery::from_params(
            &params(&[("page", "abc"), ("limit", "-5")]),
            PageLimits::default(),
        );
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE);

        let q = DiscoveryQuery::from_params(
            &params(&[("page", "0"), ("limit", "0")]),
            PageLimits { default: 12, max: 100 },
        );
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 12);
    }

    #[test]
    fn limit_is_capped() {
        let q = DiscoveryQuery::from_params(&params(&[("limit", "5000")]), PageLimits::default());
        assert_eq!(q.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn unknown_sort_values_use_defaults() {
        let q = DiscoveryQuery::from_params(
            &params(&[("sortBy", "loudest"), ("sortOrder", "sideways")]),
            PageLimits::default(),
        );
        assert_eq!(q.sort_by, SortBy::Newest);
        assert_eq!(q.sort_order, None);

        let q = DiscoveryQuery::from_params(
            &params(&[("sortBy", "Title"), ("sortOrder", "DESC")]),
            PageLimits::default(),
        );
        assert_eq!(q.sort_by, SortBy::Title);
        assert_eq!(q.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn tags_and_flags_are_split_and_parsed() {
        let q = DiscoveryQuery::from_params(
            &params(&[("tags", "grammar, ,tenses,"), ("isPublic", "maybe"), ("search", "   ")]),
            PageLimits::default(),
        );
        assert_eq!(q.tags, vec!["grammar".to_string(), "tenses".to_string()]);
        assert_eq!(q.is_public, None);
        assert_eq!(q.search, None);

        let q = DiscoveryQuery::from_params(&params(&[("isPublic", "false")]), PageLimits::default());
        assert_eq!(q.is_public, Some(false));
    }

    #[test]
    fn pagination_metadata() {
        let p = Pagination::new(1, 2, 3);
        assert_eq!(p.total_pages, 2);
        assert!(p.has_next);
        assert!(!p.has_prev);

        let p = Pagination::new(2, 2, 3);
        assert!(!p.has_next);
        assert!(p.has_prev);

        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }
}
