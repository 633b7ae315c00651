//! User application use cases

use crate::config::SearchConfig;
use crate::core::entity::{Entity, EntityId};
use crate::core::error::{AppResult, EntityError, RequestError};
use crate::core::output::PaginationOutput;
use crate::core::query::{SearchParams, SearchProps};
use crate::core::usecase::UseCase;
use crate::users::entity::UserEntity;
use crate::users::output::{UserOutput, UserOutputMapper};
use crate::users::repository::UserRepository;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// Raw search input; `filter` may carry `name` and/or `email`
pub type ListUsersInput = SearchProps;

pub type ListUsersOutput = PaginationOutput<UserOutput>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetUserInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateUserInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteUserInput {
    pub id: String,
}

async fn find_or_not_found(repository: &dyn UserRepository, id: &str) -> AppResult<UserEntity> {
    repository
        .find_by_id(&EntityId::from(id))
        .await?
        .ok_or_else(|| {
            EntityError::NotFound {
                entity_type: UserEntity::entity_type().to_string(),
                id: id.to_string(),
            }
            .into()
        })
}

/// Paginated, filterable user listing
pub struct ListUsersUseCase {
    repository: Arc<dyn UserRepository>,
    config: SearchConfig,
}

impl ListUsersUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self::with_config(repository, SearchConfig::default())
    }

    /// Use `config` for the page defaults applied to malformed input
    pub fn with_config(repository: Arc<dyn UserRepository>, config: SearchConfig) -> Self {
        Self { repository, config }
    }
}

#[async_trait]
impl UseCase<ListUsersInput, ListUsersOutput> for ListUsersUseCase {
    async fn execute(&self, input: ListUsersInput) -> AppResult<ListUsersOutput> {
        let params = SearchParams::with_config(input, &self.config);
        let result = self.repository.search(params).await?;

        Ok(UserOutputMapper::to_pagination(result))
    }
}

pub struct GetUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<GetUserInput, UserOutput> for GetUserUseCase {
    async fn execute(&self, input: GetUserInput) -> AppResult<UserOutput> {
        let user = find_or_not_found(self.repository.as_ref(), &input.id).await?;

        Ok(UserOutputMapper::to_output(&user))
    }
}

/// Rename a user
///
/// A missing or empty name is rejected before the repository is touched.
pub struct UpdateUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<UpdateUserInput, UserOutput> for UpdateUserUseCase {
    async fn execute(&self, input: UpdateUserInput) -> AppResult<UserOutput> {
        let name = match input.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(RequestError::BadRequest {
                    message: "Name not provided".to_string(),
                }
                .into());
            }
        };

        let mut user = find_or_not_found(self.repository.as_ref(), &input.id).await?;
        user.update_name(name)?;
        self.repository.update(user.clone()).await?;

        tracing::debug!(id = %user.id(), "user renamed");

        Ok(UserOutputMapper::to_output(&user))
    }
}

pub struct DeleteUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<DeleteUserInput, ()> for DeleteUserUseCase {
    async fn execute(&self, input: DeleteUserInput) -> AppResult<()> {
        let user = find_or_not_found(self.repository.as_ref(), &input.id).await?;
        self.repository.delete(user.id()).await?;

        Ok(())
    }
}
