//! Transport projection of a user

use crate::core::entity::Entity;
use crate::core::output::{PaginationOutput, PaginationOutputMapper};
use crate::core::result::SearchResult;
use crate::users::entity::UserEntity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user as handed to callers, without the password
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOutput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

pub struct UserOutputMapper;

impl UserOutputMapper {
    pub fn to_output(user: &UserEntity) -> UserOutput {
        UserOutput {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
        }
    }

    pub fn to_pagination(result: SearchResult<UserEntity>) -> PaginationOutput<UserOutput> {
        PaginationOutputMapper::map(result, |user| Self::to_output(&user))
    }
}

impl From<&UserEntity> for UserOutput {
    fn from(user: &UserEntity) -> Self {
        UserOutputMapper::to_output(user)
    }
}
