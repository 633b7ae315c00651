//! Transport-facing pagination output
//!
//! A [`SearchResult`] carries query metadata that only exists to drive the
//! pipeline. [`PaginationOutput`] is what leaves the application layer:
//! projected items plus the counters a client needs to render pagination.

use crate::core::result::SearchResult;
use serde::Serialize;

/// Paginated output envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOutput<T> {
    /// The projected page
    pub items: Vec<T>,

    /// Total number of items (after filters)
    pub total: usize,

    /// Current page number (starts at 1)
    pub current_page: usize,

    /// Total number of pages
    pub last_page: usize,

    /// Number of items per page
    pub per_page: usize,
}

/// Builds [`PaginationOutput`] envelopes
pub struct PaginationOutputMapper;

impl PaginationOutputMapper {
    /// Pair already-projected items with the metadata of `result`
    pub fn to_output<T, E>(items: Vec<T>, result: &SearchResult<E>) -> PaginationOutput<T> {
        PaginationOutput {
            items,
            total: result.total(),
            current_page: result.current_page(),
            last_page: result.last_page(),
            per_page: result.per_page(),
        }
    }

    /// Project every item of `result` with `project`
    pub fn map<T, E, F>(result: SearchResult<E>, project: F) -> PaginationOutput<T>
    where
        F: FnMut(E) -> T,
    {
        let projected = result.map_items(project);
        let meta = Self::to_output(Vec::new(), &projected);

        PaginationOutput {
            items: projected.into_items(),
            ..meta
        }
    }
}

impl<E> From<SearchResult<E>> for PaginationOutput<E> {
    fn from(result: SearchResult<E>) -> Self {
        PaginationOutputMapper::map(result, |item| item)
    }
}
