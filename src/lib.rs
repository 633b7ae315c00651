//! # Searchable
//!
//! Storage-agnostic search and pagination over entity repositories.
//!
//! ## Features
//!
//! - **Lenient Query Input**: `SearchParams` coerces raw page, page size, sort
//!   and filter values, falling back to defaults instead of failing
//! - **Filter → Sort → Paginate**: one pipeline, with the filter slot and the
//!   sortable fields supplied per entity type
//! - **Stable, Case-Insensitive Sorting**: ties keep their input order
//! - **Pagination Metadata**: totals and last page derived for every result
//! - **In-Memory Storage**: a reference repository for tests and development
//! - **Users Slice**: a complete user listing/management example on the core
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use searchable::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize)]
//! pub struct ProductProps {
//!     pub name: String,
//! }
//!
//! impl_entity!(Product, ProductProps, "product");
//!
//! #[derive(Default)]
//! struct ProductSearch;
//!
//! impl SearchPipeline<Product> for ProductSearch {
//!     fn sortable_fields(&self) -> &[&str] {
//!         &["name"]
//!     }
//!
//!     fn matches(&self, product: &Product, filter: &Filter) -> bool {
//!         filter
//!             .get("name")
//!             .and_then(|v| v.as_str())
//!             .is_none_or(|name| product.props().name.contains(name))
//!     }
//! }
//!
//! let repository = InMemorySearchableRepository::new(ProductSearch);
//! let page = repository
//!     .search(SearchParams::new(SearchProps::new().sort("name").per_page(10)))
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod storage;
pub mod users;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Entity, EntityId},
        field::FieldValue,
        pipeline::{SearchPipeline, sort_by_field},
        repository::{Repository, SearchableRepository},
        usecase::UseCase,
    };

    // === Query & Results ===
    pub use crate::core::{
        output::{PaginationOutput, PaginationOutputMapper},
        query::{Filter, SearchParams, SearchProps, SortDirection},
        result::{SearchResult, SearchResultProps},
    };

    // === Errors ===
    pub use crate::core::error::{
        AppResult, ConfigError, EntityError, ErrorResponse, RequestError, SearchError,
        StorageError, ValidationError,
    };

    // === Macros ===
    pub use crate::impl_entity;

    // === Storage ===
    pub use crate::storage::{InMemoryRepository, InMemorySearchableRepository};

    // === Config ===
    pub use crate::config::SearchConfig;

    // === Users ===
    pub use crate::users::{
        InMemoryUserRepository, UserEntity, UserOutput, UserProps, UserRepository, UserSearch,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
