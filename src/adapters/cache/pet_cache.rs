//! Cached wrapper for `PetRepository` using the timed cache.
//!
//! Reads go through the TTL cache with the repository as the backing
//! loader; writes persist to the repository first and then publish the
//! canonical record to the cache, so a hit can never be older than the
//! latest completed save.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheConfig, EntityId, Pet};
use crate::domain::ports::{PetCache, PetRepository};

use super::timed_cache::{CacheLoader, TimedCache};

/// Loader adapter turning `PetRepository::find_by_id` into the cache's
/// backing loader.
struct RepositoryLoader {
    repository: Arc<dyn PetRepository>,
}

#[async_trait]
impl CacheLoader<EntityId, Pet> for RepositoryLoader {
    async fn load(&self, key: &EntityId) -> DomainResult<Option<Pet>> {
        self.repository.find_by_id(*key).await
    }
}

/// Time-bounded pet cache decorating a `PetRepository`.
pub struct TimedPetCache {
    cache: TimedCache<EntityId, Pet>,
    repository: Arc<dyn PetRepository>,
}

impl TimedPetCache {
    /// Create a timed pet cache over `repository` configured by `config`.
    ///
    /// Must be called from within a tokio runtime when the sweep interval
    /// is configured.
    pub fn new(repository: Arc<dyn PetRepository>, config: &CacheConfig) -> Self {
        let loader = Arc::new(RepositoryLoader {
            repository: Arc::clone(&repository),
        });
        Self {
            cache: TimedCache::with_config(loader, config),
            repository,
        }
    }

    /// Number of occupied cache slots. Intended for tests and diagnostics.
    pub async fn entry_count(&self) -> usize {
        self.cache.entry_count().await
    }
}

#[async_trait]
impl PetCache for TimedPetCache {
    async fn get(&self, id: EntityId) -> DomainResult<Option<Pet>> {
        self.cache.get(&id).await
    }

    async fn save(&self, pet: &Pet) -> DomainResult<Pet> {
        // Persist first; on failure the cache keeps whatever it had.
        let saved = self.repository.save(pet).await?;
        if let Some(id) = saved.id() {
            self.cache.save(id, saved.clone()).await;
        }
        Ok(saved)
    }
}
