// src/discovery/mod.rs

//! Quiz discovery: filter, sort and paginate an in-memory quiz collection.
//!
//! Everything here is pure. The caller supplies a materialized snapshot
//! (see `crate::store`) and gets back a page; nothing is cached between calls.

mod filter;
mod paginate;
mod sort;
pub mod stats;

pub use filter::Criteria;
pub use paginate::paginate;
pub use sort::sort_quizzes;
pub use stats::{CatalogOverview, CatalogStats, FilterOptions, filter_options, summarize};

use crate::models::{
    discovery::{DiscoveryQuery, Page},
    quiz::Quiz,
};

/// Runs a discovery query over `quizzes`.
///
/// Predicates are applied conjunctively, the matches are sorted by a single
/// stable key, then sliced into the requested page. `pagination.total` is
/// the match count before slicing.
pub fn discover(quizzes: &[Quiz], query: &DiscoveryQuery) -> Page<Quiz> {
    let criteria = Criteria::from_query(query);
    let mut matched: Vec<&Quiz> = quizzes.iter().filter(|q| criteria.matches(q)).collect();

    sort_quizzes(&mut matched, query.sort_by, query.sort_order);

    paginate(matched, query.page, query.limit).map(Quiz::clone)
}
