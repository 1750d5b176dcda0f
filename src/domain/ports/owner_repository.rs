//! Owner repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{EntityId, Owner};

/// Repository interface for Owner aggregates.
///
/// `Ok(None)` means the owner does not exist; an `Err` means the backing
/// store failed and the lookup may be retried.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Look up an owner, including their pet collection, by id.
    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<Owner>>;
}
