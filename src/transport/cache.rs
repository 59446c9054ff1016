use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serialized cache state, used to hand results to a new execution context
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CacheSnapshot(pub BTreeMap<String, Value>);

/// Entries kept by a default cache
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Query results keyed by operation name and variables.
///
/// Bounded: once `capacity` keys are held, the oldest inserted key is evicted.
/// Replacing an existing key refreshes its position.
#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    inner: Mutex<Entries>,
}

#[derive(Debug, Default)]
struct Entries {
    values: BTreeMap<String, Value>,
    order: VecDeque<String>,
}

impl Entries {
    fn insert(&mut self, key: String, value: Value, capacity: usize) {
        if self.values.insert(key.clone(), value).is_some() {
            self.order.retain(|k| *k != key);
        }
        self.order.push_back(key);

        while self.order.len() > capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.values.remove(&oldest);
            }
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` results (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Entries::default()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Entries> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries().values.get(key).cloned()
    }

    pub fn put(&self, key: String, value: Value) {
        self.entries().insert(key, value, self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn extract(&self) -> CacheSnapshot {
        CacheSnapshot(self.entries().values.clone())
    }

    /// Merge a snapshot in; snapshot entries win over existing ones.
    pub fn restore(&self, snapshot: CacheSnapshot) {
        let mut entries = self.entries();
        for (key, value) in snapshot.0 {
            entries.insert(key, value, self.capacity);
        }
    }
}
