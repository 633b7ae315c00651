//! The filter → sort → paginate search pipeline

use crate::core::entity::Entity;
use crate::core::field::FieldValue;
use crate::core::query::{Filter, SearchParams, SortDirection};
use crate::core::result::SearchResult;
use std::cmp::Ordering;

/// Per-entity-type search behaviour
///
/// The pipeline itself is generic; what varies between collections is how a
/// filter object is matched against an entity and which fields may be
/// sorted on. Implementors supply those two, and may override any stage.
///
/// Stages work on borrowed entities so a search never clones more than the
/// page it returns.
///
/// # Example
/// ```rust,ignore
/// struct ProductSearch;
///
/// impl SearchPipeline<Product> for ProductSearch {
///     fn sortable_fields(&self) -> &[&str] {
///         &["name"]
///     }
///
///     fn matches(&self, product: &Product, filter: &Filter) -> bool {
///         filter
///             .get("name")
///             .and_then(|v| v.as_str())
///             .is_none_or(|name| product.props().name.to_lowercase().contains(&name.to_lowercase()))
///     }
/// }
/// ```
pub trait SearchPipeline<E: Entity>: Send + Sync {
    /// Field names `apply_sort` accepts; anything else leaves order untouched
    fn sortable_fields(&self) -> &[&str];

    /// Whether an entity satisfies a (non-empty) filter
    fn matches(&self, entity: &E, filter: &Filter) -> bool;

    /// Keep the entities matching `filter`
    ///
    /// Without a filter the input is returned as is and `matches` is never
    /// called.
    fn apply_filter<'a>(&self, items: Vec<&'a E>, filter: Option<&Filter>) -> Vec<&'a E> {
        let Some(filter) = filter else {
            return items;
        };

        items
            .into_iter()
            .filter(|entity| self.matches(entity, filter))
            .collect()
    }

    /// Order the entities by a sortable field
    ///
    /// A missing or non-sortable field leaves the input order unchanged.
    /// The sort is stable; equal values keep their relative order.
    fn apply_sort<'a>(
        &self,
        items: Vec<&'a E>,
        sort: Option<&str>,
        sort_direction: Option<SortDirection>,
    ) -> Vec<&'a E> {
        match sort {
            Some(field) if self.sortable_fields().iter().any(|f| *f == field) => {
                sort_by_field(items, field, sort_direction)
            }
            _ => items,
        }
    }

    /// Slice out page `page` (1-based) of `per_page` items
    ///
    /// Pages past the end yield an empty page.
    fn apply_paginate<'a>(&self, items: Vec<&'a E>, page: usize, per_page: usize) -> Vec<&'a E> {
        let start = page.saturating_sub(1).saturating_mul(per_page);

        items.into_iter().skip(start).take(per_page).collect()
    }

    /// Run filter, sort and paginate over `items`
    ///
    /// `total` in the result counts the filtered items before pagination.
    fn search<'a>(&self, items: &'a [E], params: &SearchParams) -> SearchResult<&'a E> {
        let filtered = self.apply_filter(items.iter().collect(), params.filter());
        let total = filtered.len();
        let sorted = self.apply_sort(filtered, params.sort(), params.sort_direction());
        let page = self.apply_paginate(sorted, params.page(), params.per_page());

        tracing::debug!(
            entity_type = E::entity_type(),
            total,
            page = params.page(),
            per_page = params.per_page(),
            sort = ?params.sort(),
            returned = page.len(),
            "search executed"
        );

        SearchResult::from_params(page, total, params)
    }
}

/// Stable sort on one field; anything but `Asc` sorts descending
pub fn sort_by_field<'a, E: Entity>(
    items: Vec<&'a E>,
    field: &str,
    sort_direction: Option<SortDirection>,
) -> Vec<&'a E> {
    let mut keyed: Vec<(Option<FieldValue>, &'a E)> = items
        .into_iter()
        .map(|entity| (entity.field_value(field), entity))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare_optional(a.as_ref(), b.as_ref());
        match sort_direction {
            Some(SortDirection::Asc) => ordering,
            _ => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, entity)| entity).collect()
}

fn compare_optional(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    let a = a.unwrap_or(&FieldValue::Null);
    let b = b.unwrap_or(&FieldValue::Null);
    a.compare(b)
}
