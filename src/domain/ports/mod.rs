//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces the orchestration layer depends on. The
//! repositories are external collaborators (persistence is out of scope
//! here); the pet cache port is implemented in-crate by the timed cache
//! adapter.

pub mod owner_repository;
pub mod pet_cache;
pub mod pet_repository;

pub use owner_repository::OwnerRepository;
pub use pet_cache::PetCache;
pub use pet_repository::PetRepository;
