//! Owner aggregate root.

use serde::{Deserialize, Serialize};

use super::pet::Pet;
use super::EntityId;

/// Aggregate root for a clinic client and the pets they own.
///
/// Every pet reachable from an owner has that owner as its logical parent;
/// [`Owner::add_pet`] is the only sanctioned way to establish the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    id: Option<EntityId>,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
    pets: Vec<Pet>,
}

impl Owner {
    /// Create an unpersisted owner with no pets.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
            pets: Vec::new(),
        }
    }

    /// Attach a persisted id, builder style.
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the street address, builder style.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the city, builder style.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set the telephone number, builder style.
    pub fn with_telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    /// Persisted id, if any.
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Street address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// City.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Telephone number.
    pub fn telephone(&self) -> &str {
        &self.telephone
    }

    /// Pets owned, in attachment order.
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Look up an owned pet by its persisted id.
    pub fn pet(&self, pet_id: EntityId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id() == Some(pet_id))
    }

    /// Look up an owned pet by name, case-insensitively.
    pub fn pet_named(&self, name: &str) -> Option<&Pet> {
        self.pets
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Attach a pet to this owner and return a reference to the attached
    /// record.
    ///
    /// Idempotent: a pet whose id matches an already-attached pet replaces
    /// that entry in place, and a pet that just got its id on first persist
    /// replaces the not-yet-persisted entry carrying the same name. Only a
    /// genuinely new pet is appended.
    pub fn add_pet(&mut self, pet: Pet) -> &mut Pet {
        let idx = pet.id().and_then(|id| {
            self.pets
                .iter()
                .position(|existing| existing.id() == Some(id))
                .or_else(|| {
                    self.pets.iter().position(|existing| {
                        existing.is_new() && existing.name().eq_ignore_ascii_case(pet.name())
                    })
                })
        });

        match idx {
            Some(idx) => {
                self.pets[idx] = pet;
                &mut self.pets[idx]
            }
            None => {
                let idx = self.pets.len();
                self.pets.push(pet);
                &mut self.pets[idx]
            }
        }
    }
}
