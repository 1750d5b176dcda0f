//! Visit record attached to a pet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated clinic visit. Immutable once created; a visit leaves a pet's
/// history only through [`crate::domain::models::Pet::remove_visit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    date: NaiveDate,
    description: String,
}

impl Visit {
    /// Create a visit for the given date.
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }

    /// Date the visit took place.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Free-text description of the visit.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the visit date falls within `[start, end]`, inclusive on
    /// both ends.
    pub fn is_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}
