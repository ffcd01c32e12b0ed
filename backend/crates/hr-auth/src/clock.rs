use chrono::{DateTime, Utc};

/// Source of "now" for token time checks
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
