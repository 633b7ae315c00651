//! Core module containing the entity, query, pipeline and result types

pub mod entity;
pub mod error;
pub mod field;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod repository;
pub mod result;
pub mod usecase;

pub use entity::{Entity, EntityId};
pub use error::{AppResult, SearchError};
pub use field::FieldValue;
pub use output::{PaginationOutput, PaginationOutputMapper};
pub use pipeline::SearchPipeline;
pub use query::{Filter, SearchParams, SearchProps, SortDirection};
pub use repository::{Repository, SearchableRepository};
pub use result::{SearchResult, SearchResultProps};
pub use usecase::UseCase;
