//! Pet repository port — the cache's backing store.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{EntityId, Pet};

/// Repository interface for Pet persistence.
///
/// Absence (`Ok(None)`) is distinct from failure (`Err`): the cache must
/// never treat a store outage as "pet does not exist".
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Look up a pet by id.
    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<Pet>>;

    /// Persist a pet and return the canonical record, with an id assigned
    /// if the pet was new.
    async fn save(&self, pet: &Pet) -> DomainResult<Pet>;
}
