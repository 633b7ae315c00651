//! User search rules and repository

use crate::core::pipeline::{SearchPipeline, sort_by_field};
use crate::core::query::{Filter, SortDirection};
use crate::core::repository::SearchableRepository;
use crate::storage::InMemorySearchableRepository;
use crate::users::entity::UserEntity;
use anyhow::Result;
use async_trait::async_trait;

/// Search rules for users
///
/// Filters on `name` and `email` (case-insensitive substring, both must
/// match when both are given). Unsorted searches return newest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserSearch;

impl UserSearch {
    pub const SORTABLE_FIELDS: &'static [&'static str] = &["name", "createdAt"];
}

impl SearchPipeline<UserEntity> for UserSearch {
    fn sortable_fields(&self) -> &[&str] {
        Self::SORTABLE_FIELDS
    }

    fn matches(&self, user: &UserEntity, filter: &Filter) -> bool {
        let name = filter.get("name").and_then(|v| v.as_str());
        let email = filter.get("email").and_then(|v| v.as_str());

        name.is_none_or(|name| contains_ignore_case(user.name(), name))
            && email.is_none_or(|email| contains_ignore_case(user.email(), email))
    }

    fn apply_sort<'a>(
        &self,
        items: Vec<&'a UserEntity>,
        sort: Option<&str>,
        sort_direction: Option<SortDirection>,
    ) -> Vec<&'a UserEntity> {
        match sort {
            None => sort_by_field(items, "createdAt", Some(SortDirection::Desc)),
            Some(field) if Self::SORTABLE_FIELDS.iter().any(|f| *f == field) => {
                sort_by_field(items, field, sort_direction)
            }
            Some(_) => items,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Searchable user repository with email lookups
#[async_trait]
pub trait UserRepository: SearchableRepository<UserEntity> {
    /// First user registered with exactly `email`
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>>;

    async fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}

/// In-memory user repository
pub type InMemoryUserRepository = InMemorySearchableRepository<UserEntity, UserSearch>;

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>> {
        self.read(|users| users.iter().find(|user| user.email() == email).cloned())
    }
}
