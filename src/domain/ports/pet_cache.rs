//! Pet cache port — the seam between the orchestration service and the
//! timed cache adapter.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{EntityId, Pet};

/// Read-through, write-through pet lookup.
#[async_trait]
pub trait PetCache: Send + Sync {
    /// Resolve a pet by id, serving from cache when fresh and loading from
    /// the backing store otherwise. `Ok(None)` means the pet exists nowhere.
    async fn get(&self, id: EntityId) -> DomainResult<Option<Pet>>;

    /// Persist a pet and make it immediately visible to subsequent `get`
    /// calls. Returns the canonical saved record.
    async fn save(&self, pet: &Pet) -> DomainResult<Pet>;
}
