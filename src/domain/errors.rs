//! Domain errors for the clinic record core.

use std::time::Duration;
use thiserror::Error;

use crate::domain::models::EntityId;

/// Domain-level errors surfaced by the cache and orchestration layers.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The requested owner exists neither in memory nor in the backing store.
    #[error("Owner not found: {0}")]
    OwnerNotFound(EntityId),

    /// The requested pet exists neither in the cache nor in the backing store.
    #[error("Pet not found: {0}")]
    PetNotFound(EntityId),

    /// The backing store failed for a reason other than absence. Retryable,
    /// and never to be conflated with a not-found result.
    #[error("Backing store unavailable: {0}")]
    BackendUnavailable(String),

    /// A caller waiting on another caller's in-flight load gave up. The load
    /// itself may still complete for the other waiters.
    #[error("Timed out after {waited:?} waiting for in-flight load of {key}")]
    LoadWaitTimeout {
        /// Rendered cache key the caller was waiting on.
        key: String,
        /// How long the caller waited before giving up.
        waited: Duration,
    },

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DomainError {
    /// Whether retrying the failed operation can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::BackendUnavailable(_) | Self::LoadWaitTimeout { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type DomainResult<T> = Result<T, DomainError>;
