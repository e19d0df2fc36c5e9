//! Store error definitions.

use thiserror::Error;

/// Errors that can occur while talking to the application store.
///
/// None of these are shown to API callers; they are logged and mapped to a
/// generic `500`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query, connection or pool failure reported by the driver.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store could not be reached or refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
