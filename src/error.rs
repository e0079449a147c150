//! Error types for the store registry.

use crate::types::StoreId;
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the store registry.
///
/// Each variant carries the operation that raised it, so a log line or an
/// API response can name the failing entry point without extra context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The store id is not registered.
    #[error("{op}: store {store_id} not found")]
    StoreNotFound { op: &'static str, store_id: StoreId },

    /// The store is already excluded from balancing.
    #[error("{op}: store {store_id} is blocked")]
    StoreBlocked { op: &'static str, store_id: StoreId },
}
