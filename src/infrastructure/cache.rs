use crate::domain::ports::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Value,
    stored_at: DateTime<Utc>,
}

/// In-memory payload cache with a freshness window.
///
/// Entries are never evicted: once older than the TTL they stop counting as
/// fresh but remain available as a fallback when a refresh fails.
pub struct TtlCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TtlCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Payload stored less than one TTL ago.
    pub fn fresh(&self, key: &str) -> Option<Value> {
        let now = self.clock.now();
        self.entries
            .lock()
            .get(key)
            .filter(|e| now - e.stored_at < self.ttl)
            .map(|e| e.payload.clone())
    }

    /// Payload of any age.
    pub fn any(&self, key: &str) -> Option<Value> {
        self.entries.lock().get(key).map(|e| e.payload.clone())
    }

    /// Insert or overwrite, stamped with the current time.
    pub fn store(&self, key: &str, payload: Value) {
        let entry = CacheEntry {
            payload,
            stored_at: self.clock.now(),
        };
        self.entries.lock().insert(key.to_string(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
