use chrono::{DateTime, Utc};

/// Source of wall-clock time for TTL decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
