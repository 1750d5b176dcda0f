//! Adapters implementing the domain ports.

pub mod cache;

pub use cache::{TimedCache, TimedPetCache};
