//! Shared test harness for searchable repository testing
//!
//! Provides `Product`, an entity whose props cover every `FieldValue` kind the
//! pipeline sorts on, `ProductSearch`, its pipeline, and helper functions for
//! creating test data.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod search_harness;
//! use search_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod contract_tests;

use chrono::{DateTime, Duration, TimeZone, Utc};
use searchable::core::entity::EntityId;
use searchable::core::field::FieldValue;
use searchable::core::pipeline::SearchPipeline;
use searchable::core::query::Filter;
use searchable::impl_entity;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Product: stub entity
// ---------------------------------------------------------------------------

/// Props spanning string, integer, float, boolean and timestamp values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProps {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub active: bool,
    pub released_at: DateTime<Utc>,
}

impl_entity!(Product, ProductProps, "product");

// ---------------------------------------------------------------------------
// ProductSearch: pipeline
// ---------------------------------------------------------------------------

/// Filter keys:
/// - `name`: case-insensitive substring
/// - `category`: exact match
/// - `maxPrice`: inclusive upper bound
///
/// Unknown keys are ignored; present keys combine conjunctively.
#[derive(Debug, Default)]
pub struct ProductSearch;

impl SearchPipeline<Product> for ProductSearch {
    fn sortable_fields(&self) -> &[&str] {
        &["name", "price", "stock", "releasedAt"]
    }

    fn matches(&self, product: &Product, filter: &Filter) -> bool {
        let props = product.props();
        let name = filter.get("name").and_then(|v| v.as_str());
        let category = filter.get("category").and_then(|v| v.as_str());
        let max_price = filter.get("maxPrice").and_then(|v| v.as_f64());

        name.is_none_or(|n| props.name.to_lowercase().contains(&n.to_lowercase()))
            && category.is_none_or(|c| props.category == c)
            && max_price.is_none_or(|p| props.price <= p)
    }
}

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Create a product with a random ID
pub fn product(name: &str, category: &str, price: f64) -> Product {
    Product::new(
        ProductProps {
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock: 1,
            active: true,
            released_at: epoch(),
        },
        None,
    )
}

/// Create a product with a fixed ID for deterministic lookups
pub fn product_with_id(id: &str, name: &str) -> Product {
    Product::new(
        ProductProps {
            name: name.to_string(),
            category: "misc".to_string(),
            price: 1.0,
            stock: 1,
            active: true,
            released_at: epoch(),
        },
        Some(EntityId::from(id)),
    )
}

/// Generate `n` products with distinct names, prices and release dates
///
/// Product `i` is named `Product {i:02}`, costs `i * 1.5`, alternates between
/// the `even` and `odd` categories and is released `i` days after [`epoch`].
pub fn sample_batch(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| {
            Product::new(
                ProductProps {
                    name: format!("Product {i:02}"),
                    category: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
                    price: i as f64 * 1.5,
                    stock: (n - i) as i64,
                    active: i % 3 != 0,
                    released_at: epoch() + Duration::days(i as i64),
                },
                None,
            )
        })
        .collect()
}

pub fn names(items: &[Product]) -> Vec<&str> {
    items.iter().map(|p| p.props().name.as_str()).collect()
}

pub fn assert_field_value_string(fv: &FieldValue, expected: &str) {
    match fv {
        FieldValue::String(s) => assert_eq!(s, expected),
        other => panic!("Expected FieldValue::String({}), got {:?}", expected, other),
    }
}
