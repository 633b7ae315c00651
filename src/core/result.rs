//! Search results: one page of items plus pagination metadata

use crate::core::entity::Entity;
use crate::core::query::{Filter, SearchParams, SortDirection};
use serde::Serialize;
use serde_json::Value;

/// Constructor input for [`SearchResult`]
///
/// `last_page` is deliberately absent: it is always derived.
#[derive(Debug, Clone)]
pub struct SearchResultProps<E> {
    pub items: Vec<E>,
    pub total: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub sort: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub filter: Option<Filter>,
}

/// One page of a search plus the metadata needed to render pagination
///
/// `sort`, `sort_direction` and `filter` are echoed from the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: usize,
    current_page: usize,
    per_page: usize,
    last_page: usize,
    sort: Option<String>,
    sort_direction: Option<SortDirection>,
    filter: Option<Filter>,
}

impl<E> SearchResult<E> {
    pub fn new(props: SearchResultProps<E>) -> Self {
        let last_page = last_page(props.total, props.per_page);

        Self {
            items: props.items,
            total: props.total,
            current_page: props.current_page,
            per_page: props.per_page,
            last_page,
            sort: props.sort,
            sort_direction: props.sort_direction,
            filter: props.filter,
        }
    }

    /// Assemble a result for a page, echoing the query it answers
    pub fn from_params(items: Vec<E>, total: usize, params: &SearchParams) -> Self {
        Self::new(SearchResultProps {
            items,
            total,
            current_page: params.page(),
            per_page: params.per_page(),
            sort: params.sort().map(String::from),
            sort_direction: params.sort_direction(),
            filter: params.filter().cloned(),
        })
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    /// Number of matching items before pagination
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// `ceil(total / per_page)`, 0 for an empty result
    pub fn last_page(&self) -> usize {
        self.last_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort_direction
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Convert every item, keeping the metadata untouched
    pub fn map_items<U, F>(self, f: F) -> SearchResult<U>
    where
        F: FnMut(E) -> U,
    {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_direction: self.sort_direction,
            filter: self.filter,
        }
    }
}

impl<E: Serialize> SearchResult<E> {
    /// JSON view with items serialized as they are
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl<E: Entity> SearchResult<E> {
    /// JSON view with every item forced through its entity snapshot
    pub fn to_json_projected(&self) -> Value {
        serde_json::json!({
            "items": self
                .items
                .iter()
                .map(|item| Value::Object(item.to_json()))
                .collect::<Vec<_>>(),
            "total": self.total,
            "currentPage": self.current_page,
            "perPage": self.per_page,
            "lastPage": self.last_page,
            "sort": self.sort,
            "sortDirection": self.sort_direction,
            "filter": self.filter,
        })
    }
}

fn last_page(total: usize, per_page: usize) -> usize {
    // Ensure per_page is at least 1 to avoid division by zero
    total.div_ceil(per_page.max(1))
}
