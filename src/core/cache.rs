use crate::domain::model::CountryRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Session cache for the canonical record set.
///
/// The calling application owns one of these and decides when the data is
/// stale: either through the optional TTL or an explicit `invalidate()`.
/// Readers share the immutable set through `Arc` without locking.
#[derive(Debug, Default)]
pub struct DatasetCache {
    records: Option<Arc<Vec<CountryRecord>>>,
    refreshed: Option<Instant>,
    fetched_at: Option<DateTime<Utc>>,
    ttl: Option<Duration>,
}

impl DatasetCache {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }

    /// Replaces the cached set and stamps the refresh time.
    pub fn store(&mut self, records: Vec<CountryRecord>) {
        self.records = Some(Arc::new(records));
        self.refreshed = Some(Instant::now());
        self.fetched_at = Some(Utc::now());
    }

    /// The cached set, unless it has expired or was never stored.
    pub fn get(&self) -> Option<Arc<Vec<CountryRecord>>> {
        if self.is_stale() {
            return None;
        }
        self.records.clone()
    }

    pub fn is_stale(&self) -> bool {
        match (self.refreshed, self.ttl) {
            (Some(refreshed), Some(ttl)) => refreshed.elapsed() > ttl,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    pub fn invalidate(&mut self) {
        self.records = None;
        self.refreshed = None;
        self.fetched_at = None;
    }

    /// Wall-clock time of the last refresh, for display.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}
