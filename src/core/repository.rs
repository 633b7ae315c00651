//! Repository traits: CRUD primitives and the searchable extension

use crate::core::entity::{Entity, EntityId};
use crate::core::query::SearchParams;
use crate::core::result::SearchResult;
use anyhow::Result;
use async_trait::async_trait;

/// CRUD contract over a collection of entities keyed by identity
///
/// Implementations are free to back this with any storage; the in-memory
/// adapter in [`crate::storage`] is the reference. `Err` is reserved for
/// storage failures: a missing entity is never an error.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Append an entity to the collection
    async fn insert(&self, entity: E) -> Result<()>;

    /// Get an entity by ID, `None` when absent
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<E>>;

    /// List every entity in insertion order
    async fn find_all(&self) -> Result<Vec<E>>;

    /// Replace the entity sharing `entity.id()`
    ///
    /// Does nothing when no such entity exists. Callers that need a
    /// not-found signal check with [`Repository::find_by_id`] first.
    async fn update(&self, entity: E) -> Result<()>;

    /// Remove the entity with `id`
    ///
    /// Does nothing when no such entity exists.
    async fn delete(&self, id: &EntityId) -> Result<()>;
}

/// Repository that can answer paginated searches
#[async_trait]
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Filter, sort and paginate the collection
    async fn search(&self, params: SearchParams) -> Result<SearchResult<E>>;
}
