//! In-memory caching layer for pet lookups.
//!
//! A generic TTL cache with singleflight miss resolution, plus the
//! repository decorator that gives pet reads a staleness bound and makes
//! writes immediately visible.

pub mod pet_cache;
pub mod timed_cache;

pub use pet_cache::TimedPetCache;
pub use timed_cache::{CacheLoader, TimedCache};
