//! PetClinic - Veterinary Clinic Record Core
//!
//! A record-management core for a veterinary clinic: owners, their pets,
//! and pets' visit history. The centerpiece is a time-bounded pet cache
//! that keeps in-memory lookups coherent with a slower backing store, and
//! the orchestration service composing it with the owner aggregate.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Owner/pet/visit models, port traits, and
//!   the error taxonomy
//! - **Adapters** (`adapters`): The generic timed cache and the cached pet
//!   repository decorator
//! - **Service Layer** (`services`): The pet manager orchestration service
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading and
//!   logging setup
//!
//! Persistence, routing, and rendering are external collaborators reached
//! through the port traits; this crate has no wire protocol of its own.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use petclinic::{ConfigLoader, PetManager, TimedPetCache};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let cache = Arc::new(TimedPetCache::new(pet_repository, &config.cache));
//!     let manager = PetManager::new(cache, owner_repository);
//!     let pet = manager.find_pet(7).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::{CacheLoader, TimedCache, TimedPetCache};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    CacheConfig, Config, EntityId, LoggingConfig, Owner, Pet, PetType, Visit,
};
pub use domain::ports::{OwnerRepository, PetCache, PetRepository};
pub use infrastructure::{ConfigLoader, Logger};
pub use services::PetManager;
