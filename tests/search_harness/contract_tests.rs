//! Macro-generated test suite for `SearchableRepository<Product>` contract validation.
//!
//! The `searchable_repository_tests!` macro generates a test module that
//! validates any `SearchableRepository<Product>` implementation against the
//! full contract: CRUD primitives, the filter → sort → paginate pipeline, input
//! coercion and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod search_harness;
//!
//! use search_harness::*;
//! use searchable::storage::InMemorySearchableRepository;
//!
//! searchable_repository_tests!(InMemorySearchableRepository::new(ProductSearch));
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_insert_and_find_by_id`
//! - `test_find_by_id_missing`
//! - `test_find_all_keeps_insertion_order`
//! - `test_update_existing` / `test_update_missing_is_a_no_op`
//! - `test_delete_existing` / `test_delete_missing_is_a_no_op`
//!
//! ## Search
//! - `test_search_empty_repository`
//! - `test_search_default_page`
//! - `test_search_filter_counts_before_pagination`
//! - `test_search_sort_by_name_both_directions`
//! - `test_search_sort_numeric_field`
//! - `test_search_unsortable_field_keeps_order`
//! - `test_search_page_past_the_end`
//! - `test_search_malformed_input_uses_defaults`
//! - `test_search_echoes_query`
//!
//! ## Edge Cases
//! - `test_concurrent_inserts`

/// Generate a full `SearchableRepository<Product>` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty repository implementing
/// `SearchableRepository<Product> + Clone + 'static`, with clones sharing
/// state. It is re-evaluated for each test.
#[macro_export]
macro_rules! searchable_repository_tests {
    ($factory:expr) => {
        mod searchable_repository_contract_tests {
            use super::*;
            use searchable::core::entity::{Entity, EntityId};
            use searchable::core::query::{SearchParams, SearchProps, SortDirection};
            use searchable::core::repository::{Repository, SearchableRepository};
            use serde_json::json;

            fn fresh() -> impl SearchableRepository<Product> + Clone + 'static {
                $factory
            }

            async fn seeded(items: Vec<Product>) -> impl SearchableRepository<Product> + Clone {
                let repository = fresh();
                for item in items {
                    repository.insert(item).await.unwrap();
                }
                repository
            }

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_find_by_id() {
                let repository = fresh();
                let entity = product("Pen", "office", 1.5);

                repository.insert(entity.clone()).await.unwrap();

                let found = repository.find_by_id(entity.id()).await.unwrap();
                assert_eq!(found, Some(entity));
            }

            #[tokio::test]
            async fn test_find_by_id_missing() {
                let repository = seeded(vec![product("Pen", "office", 1.5)]).await;

                let found = repository
                    .find_by_id(&EntityId::from("missing"))
                    .await
                    .unwrap();
                assert!(found.is_none());
            }

            #[tokio::test]
            async fn test_find_all_keeps_insertion_order() {
                let items = sample_batch(5);
                let repository = seeded(items.to_vec()).await;

                assert_eq!(repository.find_all().await.unwrap(), items);
            }

            #[tokio::test]
            async fn test_update_existing() {
                let repository =
                    seeded(vec![product_with_id("a", "Old"), product_with_id("b", "Other")]).await;

                repository.update(product_with_id("a", "New")).await.unwrap();

                let all = repository.find_all().await.unwrap();
                assert_eq!(names(&all), vec!["New", "Other"]);
            }

            #[tokio::test]
            async fn test_update_missing_is_a_no_op() {
                let repository = seeded(vec![product_with_id("a", "Old")]).await;

                repository.update(product_with_id("zz", "New")).await.unwrap();

                let all = repository.find_all().await.unwrap();
                assert_eq!(names(&all), vec!["Old"]);
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let repository =
                    seeded(vec![product_with_id("a", "A"), product_with_id("b", "B")]).await;

                repository.delete(&EntityId::from("a")).await.unwrap();

                let all = repository.find_all().await.unwrap();
                assert_eq!(names(&all), vec!["B"]);
            }

            #[tokio::test]
            async fn test_delete_missing_is_a_no_op() {
                let repository =
                    seeded(vec![product_with_id("a", "A"), product_with_id("b", "B")]).await;

                repository.delete(&EntityId::from("zz")).await.unwrap();

                let all = repository.find_all().await.unwrap();
                assert_eq!(names(&all), vec!["A", "B"]);
            }

            // ==================================================================
            // Search
            // ==================================================================

            #[tokio::test]
            async fn test_search_empty_repository() {
                let repository = fresh();

                let result = repository.search(SearchParams::default()).await.unwrap();

                assert!(result.items().is_empty());
                assert_eq!(result.total(), 0);
                assert_eq!(result.last_page(), 0);
                assert_eq!(result.current_page(), 1);
            }

            #[tokio::test]
            async fn test_search_default_page() {
                let items = sample_batch(16);
                let repository = seeded(items.to_vec()).await;

                let result = repository.search(SearchParams::default()).await.unwrap();

                assert_eq!(result.items(), &items[..15]);
                assert_eq!(result.total(), 16);
                assert_eq!(result.per_page(), 15);
                assert_eq!(result.last_page(), 2);
            }

            #[tokio::test]
            async fn test_search_filter_counts_before_pagination() {
                let repository = seeded(sample_batch(10)).await;
                let params = SearchParams::new(
                    SearchProps::new()
                        .per_page(2)
                        .filter(json!({"category": "odd", "maxPrice": 10})),
                );

                let result = repository.search(params).await.unwrap();

                // odd products priced at most 10: 1, 3, 5
                assert_eq!(names(result.items()), vec!["Product 01", "Product 03"]);
                assert_eq!(result.total(), 3);
                assert_eq!(result.last_page(), 2);
            }

            #[tokio::test]
            async fn test_search_sort_by_name_both_directions() {
                let items = [
                    product("banana", "fruit", 1.0),
                    product("Apple", "fruit", 1.0),
                    product("cherry", "fruit", 1.0),
                ];
                let repository = seeded(items.to_vec()).await;

                let asc = SearchParams::new(SearchProps::new().sort("name").sort_direction("ASC"));
                let result = repository.search(asc).await.unwrap();
                assert_eq!(names(result.items()), vec!["Apple", "banana", "cherry"]);
                assert_eq!(result.sort_direction(), Some(SortDirection::Asc));

                let desc = SearchParams::new(SearchProps::new().sort("name"));
                let result = repository.search(desc).await.unwrap();
                assert_eq!(names(result.items()), vec!["cherry", "banana", "Apple"]);
                assert_eq!(result.sort_direction(), Some(SortDirection::Desc));
            }

            #[tokio::test]
            async fn test_search_sort_numeric_field() {
                let items = [
                    product("ten", "x", 10.0),
                    product("two", "x", 2.0),
                    product("nine", "x", 9.5),
                ];
                let repository = seeded(items.to_vec()).await;
                let params =
                    SearchParams::new(SearchProps::new().sort("price").sort_direction("asc"));

                let result = repository.search(params).await.unwrap();

                assert_eq!(names(result.items()), vec!["two", "nine", "ten"]);
            }

            #[tokio::test]
            async fn test_search_unsortable_field_keeps_order() {
                let items = sample_batch(4);
                let repository = seeded(items.to_vec()).await;
                let params = SearchParams::new(SearchProps::new().sort("category"));

                let result = repository.search(params).await.unwrap();

                assert_eq!(result.items(), &items[..]);
                assert_eq!(result.sort(), Some("category"));
            }

            #[tokio::test]
            async fn test_search_page_past_the_end() {
                let repository = seeded(sample_batch(5)).await;
                let params = SearchParams::new(SearchProps::new().page(4).per_page(2));

                let result = repository.search(params).await.unwrap();

                assert!(result.items().is_empty());
                assert_eq!(result.total(), 5);
                assert_eq!(result.current_page(), 4);
                assert_eq!(result.last_page(), 3);
            }

            #[tokio::test]
            async fn test_search_malformed_input_uses_defaults() {
                let items = sample_batch(20);
                let repository = seeded(items.to_vec()).await;
                let props: SearchProps = serde_json::from_value(json!({
                    "page": -1,
                    "perPage": "abc",
                    "sort": "releasedAt",
                    "sortDir": "sideways",
                    "filter": {},
                }))
                .unwrap();

                let result = repository.search(SearchParams::new(props)).await.unwrap();

                assert_eq!(result.current_page(), 1);
                assert_eq!(result.per_page(), 15);
                assert_eq!(result.sort_direction(), Some(SortDirection::Desc));
                assert!(result.filter().is_none());
                assert_eq!(result.items()[0].props().name, "Product 19");
            }

            #[tokio::test]
            async fn test_search_echoes_query() {
                let repository = seeded(sample_batch(3)).await;
                let params = SearchParams::new(
                    SearchProps::new()
                        .page("2")
                        .per_page(1.0)
                        .sort("  name ")
                        .sort_direction("asc")
                        .filter(json!({"name": "product"})),
                );

                let result = repository.search(params).await.unwrap();

                assert_eq!(result.current_page(), 2);
                assert_eq!(result.per_page(), 1);
                assert_eq!(result.sort(), Some("name"));
                assert_eq!(result.filter().unwrap()["name"], json!("product"));
                assert_eq!(names(result.items()), vec!["Product 01"]);
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let repository = fresh();

                let handles: Vec<_> = sample_batch(20)
                    .into_iter()
                    .map(|item| {
                        let repository = repository.clone();
                        tokio::spawn(async move { repository.insert(item).await })
                    })
                    .collect();
                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                let result = repository
                    .search(SearchParams::new(SearchProps::new().per_page(50)))
                    .await
                    .unwrap();
                assert_eq!(result.total(), 20);
                assert_eq!(result.last_page(), 1);
            }
        }
    };
}
