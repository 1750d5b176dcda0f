//! Common test utilities for integration tests
//!
//! In-memory repository fakes with call counters, shared across the
//! integration test files.

#![allow(dead_code)]
#![allow(clippy::new_without_default)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use tokio::sync::watch;

use petclinic::domain::errors::{DomainError, DomainResult};
use petclinic::domain::models::{EntityId, Owner, Pet};
use petclinic::domain::ports::{OwnerRepository, PetRepository};

/// In-memory owner repository with a lookup call counter.
pub struct InMemoryOwnerRepository {
    owners: StdMutex<HashMap<EntityId, Owner>>,
    find_calls: AtomicUsize,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self {
            owners: StdMutex::new(HashMap::new()),
            find_calls: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, owner: Owner) {
        let id = owner.id().expect("stored owners must have an id");
        self.owners.lock().unwrap().insert(id, owner);
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<Owner>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.owners.lock().unwrap().get(&id).cloned())
    }
}

/// In-memory pet repository assigning ids on first save.
///
/// Lookups can be gated (to hold loads in flight) and the whole store can
/// be switched into a failing state.
pub struct InMemoryPetRepository {
    pets: StdMutex<HashMap<EntityId, Pet>>,
    next_id: AtomicI64,
    find_calls: AtomicUsize,
    save_calls: AtomicUsize,
    unavailable: AtomicBool,
    gate: StdMutex<Option<watch::Receiver<bool>>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self {
            pets: StdMutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            find_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            unavailable: AtomicBool::new(false),
            gate: StdMutex::new(None),
        }
    }

    /// Seed a pet that already has an id.
    pub fn insert(&self, pet: Pet) {
        let id = pet.id().expect("seeded pets must have an id");
        self.pets.lock().unwrap().insert(id, pet);
        let next = self.next_id.load(Ordering::SeqCst).max(id + 1);
        self.next_id.store(next, Ordering::SeqCst);
    }

    /// Block every `find_by_id` until the returned sender publishes `true`.
    pub fn gate_lookups(&self) -> watch::Sender<bool> {
        let (tx, rx) = watch::channel(false);
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }

    /// Make every subsequent call fail with `BackendUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn find_by_id(&self, id: EntityId) -> DomainResult<Option<Pet>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gate.lock().unwrap().clone();
        if let Some(mut rx) = gate {
            let _ = rx.wait_for(|open| *open).await;
        }

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::BackendUnavailable("store offline".to_string()));
        }
        Ok(self.pets.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, pet: &Pet) -> DomainResult<Pet> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::BackendUnavailable("store offline".to_string()));
        }

        let mut saved = pet.clone();
        if saved.is_new() {
            saved.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        }
        let id = saved.id().expect("saved pet always has an id");
        self.pets.lock().unwrap().insert(id, saved.clone());
        Ok(saved)
    }
}
