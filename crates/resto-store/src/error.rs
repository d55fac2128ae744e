//! # Store Error Types
//!
//! Error types for persistence and lookups.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  sqlx::Error / serde_json::Error / toml / io                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ◄── CoreError (business rule violations)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller shows the message                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use resto_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity id not present in its collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Order placed at a restaurant that has been switched off.
    #[error("Restaurant {0} is not accepting orders")]
    RestaurantInactive(String),

    /// Business rule violation from resto-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Snapshot value could not be encoded.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Config file could not be read, parsed or written.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Convert sqlx errors to StoreError.
///
/// ```text
/// sqlx::Error::Database       → StoreError::QueryFailed
/// sqlx::Error::PoolTimedOut   → StoreError::ConnectionFailed
/// sqlx::Error::PoolClosed     → StoreError::ConnectionFailed
/// Other                       → StoreError::QueryFailed
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => StoreError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => {
                StoreError::ConnectionFailed("Timed out waiting for a connection".to_string())
            }
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::InvalidConfig(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::InvalidConfig(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use resto_core::OrderStatus;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Order", "o42");
        assert_eq!(err.to_string(), "Order not found: o42");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: StoreError = CoreError::InvalidTransition {
            order_id: "o1".to_string(),
            from: OrderStatus::Completed,
            to: OrderStatus::Pending,
        }
        .into();
        assert!(matches!(err, StoreError::Core(CoreError::InvalidTransition { .. })));
        assert_eq!(err.to_string(), "Order o1 cannot move from completed to pending");
    }

    #[test]
    fn test_validation_error_wraps_into_core() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
    }
}
