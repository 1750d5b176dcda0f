//! Generic time-bounded read-through cache with singleflight miss handling.
//!
//! Entries are served from memory while younger than the configured TTL.
//! A miss (or an expired entry) triggers a single load from the backing
//! loader per key; concurrent callers for the same key await that load's
//! outcome instead of issuing duplicates, while callers for other keys are
//! unaffected. Loads run in spawned tasks so a waiter that times out or is
//! cancelled never aborts the load for everyone else.
//!
//! Synchronization is one mutex over the key map with short critical
//! sections; the lock is never held across an `.await`.

use std::collections::{hash_map, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::CacheConfig;

/// Backing loader injected into the cache.
///
/// `Ok(None)` means the key has no value in the backing store and is never
/// cached; `Err` means the store failed and nothing is cached either.
#[async_trait]
pub trait CacheLoader<K, V>: Send + Sync {
    /// Load the value for `key` from the backing store.
    async fn load(&self, key: &K) -> DomainResult<Option<V>>;
}

/// Result of one backing-store load, broadcast to every caller that
/// awaited it.
#[derive(Debug, Clone)]
enum LoadOutcome<V> {
    Loaded(V),
    Missing,
    Failed(String),
}

/// A cached value and the instant it was stored or last refreshed.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

enum Slot<V> {
    Ready(CacheEntry<V>),
    Loading {
        rx: watch::Receiver<Option<LoadOutcome<V>>>,
    },
}

/// Per-key slot plus a generation counter. Every `save` bumps the
/// generation; a load only installs its result while the generation it
/// started under is still current, so a load finishing after a save can
/// never clobber the saved value.
struct KeyState<V> {
    generation: u64,
    slot: Slot<V>,
}

struct Inner<K, V> {
    map: Mutex<HashMap<K, KeyState<V>>>,
}

/// Read-through, write-through cache bounding staleness by a fixed TTL.
pub struct TimedCache<K, V> {
    inner: Arc<Inner<K, V>>,
    loader: Arc<dyn CacheLoader<K, V>>,
    ttl: Duration,
    load_wait_timeout: Option<Duration>,
    sweeper: Option<JoinHandle<()>>,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache with the given TTL, no background sweep, and no
    /// waiter timeout.
    pub fn new(loader: Arc<dyn CacheLoader<K, V>>, ttl: Duration) -> Self {
        Self::build(loader, ttl, None, None)
    }

    /// Create a cache from a [`CacheConfig`], spawning the periodic sweep
    /// task when a sweep interval is configured. Must be called from within
    /// a tokio runtime when the sweep is enabled.
    pub fn with_config(loader: Arc<dyn CacheLoader<K, V>>, config: &CacheConfig) -> Self {
        Self::build(
            loader,
            config.ttl(),
            config.sweep_interval(),
            config.load_wait_timeout(),
        )
    }

    fn build(
        loader: Arc<dyn CacheLoader<K, V>>,
        ttl: Duration,
        sweep_interval: Option<Duration>,
        load_wait_timeout: Option<Duration>,
    ) -> Self {
        let inner = Arc::new(Inner {
            map: Mutex::new(HashMap::new()),
        });
        let sweeper = sweep_interval.map(|every| spawn_sweeper(&inner, ttl, every));

        Self {
            inner,
            loader,
            ttl,
            load_wait_timeout,
            sweeper,
        }
    }

    /// Return the cached value for `key` if fresh, otherwise resolve it
    /// through the backing loader with singleflight discipline.
    ///
    /// `Ok(None)` (key absent from the backing store) is returned to the
    /// caller but never cached, so a later `save` can still populate the
    /// key. Uses the configured waiter timeout, if any.
    pub async fn get(&self, key: &K) -> DomainResult<Option<V>> {
        self.get_with_timeout(key, self.load_wait_timeout).await
    }

    /// [`TimedCache::get`] with an explicit per-call waiter timeout.
    ///
    /// The timeout bounds only how long this caller waits on an in-flight
    /// load; the load itself keeps running and serves the other waiters.
    pub async fn get_with_timeout(
        &self,
        key: &K,
        wait_timeout: Option<Duration>,
    ) -> DomainResult<Option<V>> {
        let mut map = self.inner.map.lock().await;

        // Fast paths: fresh hit, or an in-flight load to join.
        let inflight = match map.get(key) {
            Some(KeyState {
                slot: Slot::Ready(entry),
                ..
            }) if entry.is_fresh(self.ttl) => {
                debug!(key = ?key, "cache hit");
                return Ok(Some(entry.value.clone()));
            }
            Some(KeyState {
                slot: Slot::Loading { rx },
                ..
            }) => Some(rx.clone()),
            _ => None,
        };

        let rx = if let Some(rx) = inflight {
            drop(map);
            debug!(key = ?key, "awaiting in-flight load");
            rx
        } else {
            // Absent or expired: become the leader for this key.
            let (tx, rx) = watch::channel(None);
            let generation = map.get(key).map_or(0, |state| state.generation);
            map.insert(
                key.clone(),
                KeyState {
                    generation,
                    slot: Slot::Loading { rx: rx.clone() },
                },
            );
            drop(map);

            debug!(key = ?key, "cache miss, loading from backing store");
            self.spawn_load(key.clone(), generation, tx);
            rx
        };

        await_outcome(rx, key, wait_timeout).await
    }

    /// Write `value` into the cache unconditionally, stamped with the
    /// current time, regardless of any prior entry or its freshness.
    ///
    /// This is a pure in-memory publish (no backend I/O): after it returns,
    /// every subsequent `get` for `key` observes `value` until TTL expiry.
    /// An in-flight load for the key is superseded and cannot overwrite it.
    pub async fn save(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
        };

        let mut map = self.inner.map.lock().await;
        match map.entry(key.clone()) {
            hash_map::Entry::Occupied(mut occupied) => {
                let state = occupied.get_mut();
                state.generation += 1;
                state.slot = Slot::Ready(entry);
            }
            hash_map::Entry::Vacant(vacant) => {
                vacant.insert(KeyState {
                    generation: 1,
                    slot: Slot::Ready(entry),
                });
            }
        }
        drop(map);
        debug!(key = ?key, "cache entry saved");
    }

    /// Number of occupied slots, fresh or not, including in-flight loads.
    pub async fn entry_count(&self) -> usize {
        self.inner.map.lock().await.len()
    }

    /// Spawn the load as a detached task so that cancelling or timing out
    /// any caller, the leader included, never aborts the load itself.
    fn spawn_load(&self, key: K, generation: u64, tx: watch::Sender<Option<LoadOutcome<V>>>) {
        let inner = Arc::clone(&self.inner);
        let loader = Arc::clone(&self.loader);

        tokio::spawn(async move {
            let outcome = match loader.load(&key).await {
                Ok(Some(value)) => LoadOutcome::Loaded(value),
                Ok(None) => LoadOutcome::Missing,
                Err(err) => LoadOutcome::Failed(err.to_string()),
            };

            let mut map = inner.map.lock().await;
            let current = map
                .get(&key)
                .is_some_and(|state| state.generation == generation);
            if current {
                match &outcome {
                    LoadOutcome::Loaded(value) => {
                        if let Some(state) = map.get_mut(&key) {
                            state.slot = Slot::Ready(CacheEntry {
                                value: value.clone(),
                                stored_at: Instant::now(),
                            });
                        }
                    }
                    // Negative results and failures are not cached.
                    LoadOutcome::Missing | LoadOutcome::Failed(_) => {
                        map.remove(&key);
                    }
                }
            }
            drop(map);

            // send_replace never fails, even with no live waiters.
            tx.send_replace(Some(outcome));
        });
    }
}

impl<K, V> Drop for TimedCache<K, V> {
    fn drop(&mut self) {
        if let Some(sweeper) = &self.sweeper {
            sweeper.abort();
        }
    }
}

/// Wait for the broadcast outcome of an in-flight load, bounded by
/// `wait_timeout` when one is given.
async fn await_outcome<K: Debug, V: Clone>(
    mut rx: watch::Receiver<Option<LoadOutcome<V>>>,
    key: &K,
    wait_timeout: Option<Duration>,
) -> DomainResult<Option<V>> {
    let settled = async {
        rx.wait_for(Option::is_some)
            .await
            .map(|outcome| (*outcome).clone())
    };

    let outcome = match wait_timeout {
        Some(limit) => match tokio::time::timeout(limit, settled).await {
            Ok(result) => result,
            Err(_) => {
                return Err(DomainError::LoadWaitTimeout {
                    key: format!("{key:?}"),
                    waited: limit,
                })
            }
        },
        None => settled.await,
    };

    match outcome {
        Ok(Some(LoadOutcome::Loaded(value))) => Ok(Some(value)),
        Ok(Some(LoadOutcome::Missing)) => Ok(None),
        Ok(Some(LoadOutcome::Failed(msg))) => Err(DomainError::BackendUnavailable(msg)),
        // wait_for only yields once the outcome is Some.
        Ok(None) | Err(_) => Err(DomainError::BackendUnavailable(
            "load task ended before reporting a result".to_string(),
        )),
    }
}

/// Periodically drop entries past TTL. Holds only a weak handle so the
/// task cannot keep a dropped cache alive; in-flight loads are never swept.
fn spawn_sweeper<K, V>(inner: &Arc<Inner<K, V>>, ttl: Duration, every: Duration) -> JoinHandle<()>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    let weak = Arc::downgrade(inner);
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(every);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tick.tick().await;
            let Some(inner) = weak.upgrade() else { break };
            let mut map = inner.map.lock().await;
            let before = map.len();
            map.retain(|_, state| match &state.slot {
                Slot::Ready(entry) => entry.is_fresh(ttl),
                Slot::Loading { .. } => true,
            });
            let evicted = before - map.len();
            drop(map);
            if evicted > 0 {
                debug!(evicted, "swept expired cache entries");
            }
        }
    })
}
