//! Configuration management infrastructure.
//!
//! Hierarchical configuration using figment: programmatic defaults, an
//! optional `petclinic.yaml`, and `PETCLINIC_`-prefixed environment
//! variables, in increasing priority.

pub mod loader;

pub use loader::ConfigLoader;
