//! User entity

use crate::core::entity::{Entity, EntityId, snapshot};
use crate::core::error::AppResult;
use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Attributes of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProps {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email, length(min = 1, max = 255))]
    pub email: String,

    /// Stored as given; hashing belongs to the caller
    #[validate(length(min = 1, max = 100))]
    pub password: String,

    pub created_at: DateTime<Utc>,
}

impl UserProps {
    /// Props created now
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A registered user
///
/// Props are validated on construction and on every update; there is no
/// other way to change them.
#[derive(Debug, Clone, PartialEq)]
pub struct UserEntity {
    id: EntityId,
    props: UserProps,
}

impl UserEntity {
    pub fn new(props: UserProps, id: Option<EntityId>) -> AppResult<Self> {
        props.validate()?;

        Ok(Self {
            id: id.unwrap_or_else(EntityId::generate),
            props,
        })
    }

    pub fn name(&self) -> &str {
        &self.props.name
    }

    pub fn email(&self) -> &str {
        &self.props.email
    }

    pub fn password(&self) -> &str {
        &self.props.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.props.created_at
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> AppResult<()> {
        let props = UserProps {
            name: name.into(),
            ..self.props.clone()
        };
        props.validate()?;
        self.props = props;
        Ok(())
    }

    pub fn update_password(&mut self, password: impl Into<String>) -> AppResult<()> {
        let props = UserProps {
            password: password.into(),
            ..self.props.clone()
        };
        props.validate()?;
        self.props = props;
        Ok(())
    }
}

impl Entity for UserEntity {
    fn entity_type() -> &'static str {
        "user"
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn to_json(&self) -> Map<String, Value> {
        snapshot(&self.id, &self.props)
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::String(self.id.to_string())),
            "name" => Some(FieldValue::String(self.props.name.clone())),
            "email" => Some(FieldValue::String(self.props.email.clone())),
            "password" => Some(FieldValue::String(self.props.password.clone())),
            "createdAt" => Some(FieldValue::DateTime(self.props.created_at)),
            _ => None,
        }
    }
}

impl Serialize for UserEntity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
