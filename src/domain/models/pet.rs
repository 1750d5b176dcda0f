//! Pet entity and its visit history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pet_type::PetType;
use super::visit::Visit;
use super::EntityId;

/// A pet belonging to an owner. Created unattached and without an id; the
/// backing store assigns the id on first persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    id: Option<EntityId>,
    name: String,
    birth_date: NaiveDate,
    pet_type: PetType,
    visits: Vec<Visit>,
}

impl Pet {
    /// Create an unpersisted pet.
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, pet_type: PetType) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            pet_type,
            visits: Vec::new(),
        }
    }

    /// Attach a persisted id, consuming the builder-style value.
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    /// Persisted id, if any.
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// Record the id assigned by the backing store.
    pub fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    /// Whether this pet has not been persisted yet.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Pet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the pet.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Category of this pet.
    pub fn pet_type(&self) -> &PetType {
        &self.pet_type
    }

    /// Change the category of this pet.
    pub fn set_pet_type(&mut self, pet_type: PetType) {
        self.pet_type = pet_type;
    }

    /// Visit history, in insertion order.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Append a visit to this pet's history.
    pub fn add_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    /// Remove a visit from the history. Returns whether a matching visit
    /// was present. Removal is the only way an existing visit changes.
    pub fn remove_visit(&mut self, visit: &Visit) -> bool {
        let before = self.visits.len();
        self.visits.retain(|v| v != visit);
        before != self.visits.len()
    }

    /// Visits dated within `[start, end]`, inclusive on both ends. An empty
    /// result is normal, not an error.
    pub fn visits_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<Visit> {
        self.visits
            .iter()
            .filter(|v| v.is_between(start, end))
            .cloned()
            .collect()
    }
}
