//! Pet category value type.

use serde::{Deserialize, Serialize};

/// Category of a pet ("dog", "cat", ...). Compared and hashed by value so
/// that type sets deduplicate regardless of which record the value came
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    name: String,
}

impl PetType {
    /// Create a pet type with the given category name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
