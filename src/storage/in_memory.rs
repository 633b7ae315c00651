//! In-memory repositories for testing and development

use crate::core::entity::{Entity, EntityId};
use crate::core::error::StorageError;
use crate::core::pipeline::SearchPipeline;
use crate::core::query::SearchParams;
use crate::core::repository::{Repository, SearchableRepository};
use crate::core::result::SearchResult;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory repository implementation
///
/// Keeps entities in insertion order. Clones share the same collection;
/// [`InMemoryRepository::new`] always starts an isolated one.
///
/// Lookups are linear scans. Duplicate identifiers are accepted (and logged):
/// lookups, updates and deletes then act on the first match.
pub struct InMemoryRepository<E> {
    items: Arc<RwLock<Vec<E>>>,
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a repository seeded with `items`
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Run `f` against the current collection under a read lock
    pub fn read<R>(&self, f: impl FnOnce(&[E]) -> R) -> Result<R> {
        let items = self.read_guard()?;
        Ok(f(&items))
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<E>>> {
        self.items.read().map_err(|e| {
            StorageError::LockPoisoned {
                operation: "read".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<E>>> {
        self.items.write().map_err(|e| {
            StorageError::LockPoisoned {
                operation: "write".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: E) -> Result<()> {
        let mut items = self.write_guard()?;

        if items.iter().any(|item| item.id() == entity.id()) {
            tracing::warn!(
                entity_type = E::entity_type(),
                id = %entity.id(),
                "inserting entity with an identifier already present"
            );
        }
        items.push(entity);

        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<E>> {
        let items = self.read_guard()?;

        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        let items = self.read_guard()?;

        Ok(items.clone())
    }

    async fn update(&self, entity: E) -> Result<()> {
        let mut items = self.write_guard()?;

        match items.iter().position(|item| item.id() == entity.id()) {
            Some(index) => items[index] = entity,
            None => tracing::debug!(
                entity_type = E::entity_type(),
                id = %entity.id(),
                "update skipped: entity not found"
            ),
        }

        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<()> {
        let mut items = self.write_guard()?;

        match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                items.remove(index);
            }
            None => tracing::debug!(
                entity_type = E::entity_type(),
                id = %id,
                "delete skipped: entity not found"
            ),
        }

        Ok(())
    }
}

/// In-memory repository answering searches through a [`SearchPipeline`]
///
/// The pipeline supplies the entity-specific filter and sortable fields;
/// storage and CRUD are delegated to an [`InMemoryRepository`].
pub struct InMemorySearchableRepository<E, P> {
    repository: InMemoryRepository<E>,
    pipeline: Arc<P>,
}

impl<E: Entity, P: SearchPipeline<E>> InMemorySearchableRepository<E, P> {
    pub fn new(pipeline: P) -> Self {
        Self::with_items(pipeline, Vec::new())
    }

    pub fn with_items(pipeline: P, items: Vec<E>) -> Self {
        Self {
            repository: InMemoryRepository::with_items(items),
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Run `f` against the current collection under a read lock
    pub fn read<R>(&self, f: impl FnOnce(&[E]) -> R) -> Result<R> {
        self.repository.read(f)
    }
}

impl<E: Entity, P: SearchPipeline<E> + Default> Default for InMemorySearchableRepository<E, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<E, P> Clone for InMemorySearchableRepository<E, P> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

#[async_trait]
impl<E: Entity, P: SearchPipeline<E>> Repository<E> for InMemorySearchableRepository<E, P> {
    async fn insert(&self, entity: E) -> Result<()> {
        self.repository.insert(entity).await
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<E>> {
        self.repository.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        self.repository.find_all().await
    }

    async fn update(&self, entity: E) -> Result<()> {
        self.repository.update(entity).await
    }

    async fn delete(&self, id: &EntityId) -> Result<()> {
        self.repository.delete(id).await
    }
}

#[async_trait]
impl<E: Entity, P: SearchPipeline<E>> SearchableRepository<E>
    for InMemorySearchableRepository<E, P>
{
    async fn search(&self, params: SearchParams) -> Result<SearchResult<E>> {
        self.repository.read(|items| {
            self.pipeline
                .search(items, &params)
                .map_items(|entity| entity.clone())
        })
    }
}
