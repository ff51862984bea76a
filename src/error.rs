//! Error handling for store operations.
//!
//! Only driver faults (unreachable deployment, authentication failure,
//! malformed query) surface as errors. Logical "not found" outcomes are
//! plain return values (`false`, empty vec, zero count), never errors.

use thiserror::Error;

/// Faults raised by the underlying store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Result type alias
pub type StoreResult<T> = Result<T, StoreError>;
