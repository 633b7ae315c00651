//! Typed error handling for searchable repositories
//!
//! Malformed search input is never an error: it is coerced by
//! [`SearchParams`](crate::core::query::SearchParams). The errors below cover
//! what remains once input has been normalized.
//!
//! # Error Categories
//!
//! - [`EntityError`]: lookups that callers promote to failures (not found, conflicts)
//! - [`ValidationError`]: entity props rejected by their validation rules
//! - [`RequestError`]: use-case input that is missing or unusable
//! - [`StorageError`]: failures of the backing collection
//! - [`ConfigError`]: configuration parsing and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match GetUserUseCase::new(repo).execute(input).await {
//!     Ok(user) => println!("Found: {:?}", user),
//!     Err(SearchError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("User {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Result alias used by use cases and fallible constructors
pub type AppResult<T> = std::result::Result<T, SearchError>;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum SearchError {
    /// Entity-related errors
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request/input errors raised by use cases
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Serializable error envelope for handing errors to a transport layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SearchError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::Entity(e) => e.error_code(),
            SearchError::Validation(_) => "VALIDATION_ERROR",
            SearchError::Request(_) => "BAD_REQUEST",
            SearchError::Storage(_) => "STORAGE_ERROR",
            SearchError::Config(_) => "CONFIG_ERROR",
            SearchError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            SearchError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id,
                }))
            }
            SearchError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl From<anyhow::Error> for SearchError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => SearchError::Storage(storage),
            Err(other) => SearchError::Internal(other.to_string()),
        }
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups
#[derive(Debug, Error)]
pub enum EntityError {
    /// Entity was not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A unique attribute is already taken
    #[error("{entity_type} conflict: {message}")]
    Conflict {
        entity_type: String,
        message: String,
    },
}

impl EntityError {
    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::Conflict { .. } => "ENTITY_CONFLICT",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to entity validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed their rules (field -> messages)
    #[error("Validation failed for fields: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    FieldErrors(std::collections::BTreeMap<String, Vec<String>>),

    /// A single field is invalid
    #[error("Invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let messages = field_errors
                    .iter()
                    .map(|error| {
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| error.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        ValidationError::FieldErrors(fields)
    }
}

impl From<ValidationErrors> for SearchError {
    fn from(errors: ValidationErrors) -> Self {
        SearchError::Validation(errors.into())
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors raised when use-case input cannot be acted upon
#[derive(Debug, Error)]
pub enum RequestError {
    /// Required input was missing or empty
    #[error("Bad request: {message}")]
    BadRequest { message: String },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from the backing collection
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding the collection was poisoned by a panicking writer
    #[error("Storage lock poisoned ({operation}): {message}")]
    LockPoisoned { operation: String, message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file
    #[error("Failed to read config file '{file}': {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration content
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A configured value is out of range
    #[error("Invalid config value for '{key}': {message}")]
    Invalid { key: String, message: String },
}
