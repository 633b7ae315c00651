//! Entity trait defining the identity-bearing records held by repositories

use crate::core::field::FieldValue;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

/// Opaque entity identifier
///
/// Generated identifiers are UUID v4 strings. Identifiers supplied by callers
/// are accepted as is; [`EntityId::is_valid_v4`] tells whether they have the
/// UUID v4 shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh UUID v4 identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the identifier against the UUID v4 shape (case-insensitive)
    pub fn is_valid_v4(&self) -> bool {
        static UUID_V4_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = UUID_V4_REGEX.get_or_init(|| {
            Regex::new(
                r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
            )
            .expect("UUID v4 pattern is valid")
        });
        regex.is_match(&self.0)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Base trait for every record a repository can hold.
///
/// An entity has:
/// - an immutable identifier
/// - a flattened snapshot of its attributes (`{ id, ...props }`)
///
/// Filtering and sorting only ever look at the snapshot, so the way an
/// entity stores or protects its props internally stays private to it.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity type name used in error messages (e.g., "user")
    fn entity_type() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &EntityId;

    /// Flattened read-only snapshot: `{ id, ...props }`
    fn to_json(&self) -> Map<String, Value>;

    /// Get the value of a single attribute for comparison.
    ///
    /// Defaults to reading the snapshot. Override to expose typed values
    /// such as timestamps.
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.to_json().get(field).map(FieldValue::from_json)
    }
}

/// Build the `{ id, ...props }` snapshot from serializable props.
///
/// Props that do not serialize to a JSON object contribute nothing beyond
/// the identifier.
pub fn snapshot<P: Serialize>(id: &EntityId, props: &P) -> Map<String, Value> {
    let mut map = match serde_json::to_value(props) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    map.insert("id".to_string(), Value::String(id.to_string()));
    map
}
