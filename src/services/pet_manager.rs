//! Pet manager service: owner/pet/visit operations over the cache and the
//! owner repository.
//!
//! A pure composition layer: every operation logs one structured event,
//! performs no retries or recovery, and propagates not-found and backend
//! failures unchanged. The owner aggregate is the source of truth for
//! which pets belong to an owner; the cache is the source of truth for a
//! pet's latest saved state.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{EntityId, Owner, Pet, PetType, Visit};
use crate::domain::ports::{OwnerRepository, PetCache};

/// Orchestration service for pets and their owners.
pub struct PetManager<C: PetCache, R: OwnerRepository> {
    pets: Arc<C>,
    owners: Arc<R>,
}

impl<C: PetCache, R: OwnerRepository> PetManager<C, R> {
    /// Create a pet manager over the given cache and owner repository.
    pub fn new(pets: Arc<C>, owners: Arc<R>) -> Self {
        Self { pets, owners }
    }

    /// Look up an owner by id.
    pub async fn find_owner(&self, owner_id: EntityId) -> DomainResult<Owner> {
        info!(owner_id, "find owner");
        self.owners
            .find_by_id(owner_id)
            .await?
            .ok_or(DomainError::OwnerNotFound(owner_id))
    }

    /// Construct an unpersisted pet and attach it to `owner` in memory.
    ///
    /// Touches neither the cache nor the backing store; the returned pet
    /// has no id until [`PetManager::save_pet`] persists it.
    pub fn new_pet<'a>(
        &self,
        owner: &'a mut Owner,
        name: impl Into<String>,
        birth_date: NaiveDate,
        pet_type: PetType,
    ) -> &'a mut Pet {
        info!(owner_id = ?owner.id(), "add pet for owner");
        owner.add_pet(Pet::new(name, birth_date, pet_type))
    }

    /// Look up a pet by id through the timed cache.
    pub async fn find_pet(&self, pet_id: EntityId) -> DomainResult<Pet> {
        info!(pet_id, "find pet by id");
        self.pets
            .get(pet_id)
            .await?
            .ok_or(DomainError::PetNotFound(pet_id))
    }

    /// Persist `pet` through the cache and attach the saved record to
    /// `owner`.
    ///
    /// The write becomes visible in the cache before the owner link is
    /// updated; on a backing-store failure neither effect happens. Returns
    /// the canonical saved pet, id assigned if it was new.
    pub async fn save_pet(&self, pet: &Pet, owner: &mut Owner) -> DomainResult<Pet> {
        info!(pet_id = ?pet.id(), "save pet");
        let saved = self.pets.save(pet).await?;
        owner.add_pet(saved.clone());
        Ok(saved)
    }

    /// Pets belonging to the given owner, in attachment order.
    ///
    /// The owner aggregate, not the cache, decides which pets belong here.
    pub async fn get_owner_pets(&self, owner_id: EntityId) -> DomainResult<Vec<Pet>> {
        info!(owner_id, "finding the owner's pets by id");
        let owner = self.find_owner(owner_id).await?;
        Ok(owner.pets().to_vec())
    }

    /// Distinct pet types among the owner's pets, deduplicated by value.
    pub async fn get_owner_pet_types(&self, owner_id: EntityId) -> DomainResult<HashSet<PetType>> {
        info!(owner_id, "finding the owner's pet types by id");
        let owner = self.find_owner(owner_id).await?;
        Ok(owner
            .pets()
            .iter()
            .map(|pet| pet.pet_type().clone())
            .collect())
    }

    /// Visits of the given pet dated within `[start, end]`, inclusive on
    /// both ends. An empty result is not an error.
    pub async fn get_visits_between(
        &self,
        pet_id: EntityId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Visit>> {
        info!(pet_id, %start, %end, "get visits for pet");
        let pet = self.find_pet(pet_id).await?;
        Ok(pet.visits_between(start, end))
    }
}
