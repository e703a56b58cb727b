//! Adaptive `category:keyword` statistics shared across classification calls.

mod store;

pub use store::{
    DisabledPatternStore, InMemoryPatternStore, JsonFilePatternStore, PatternStore, StoreError,
};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DECAY_RATE_PER_DAY: f64 = 0.1;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Observed frequency and success rate for one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub frequency: f64,
    pub success_rate: f64,
    pub last_updated: DateTime<Utc>,
}

impl PatternRecord {
    fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            frequency: 0.0,
            success_rate: 0.0,
            last_updated: now,
        }
    }

    /// Contribution of this record to a classifier confidence bonus.
    pub fn bonus(&self) -> f64 {
        self.success_rate * (self.frequency / 100.0)
    }

    /// Applies one observation with exponential time decay.
    ///
    /// The success-rate blend reads the already-incremented frequency, so it is not a true
    /// running mean. That weighting is part of the scoring contract.
    pub fn observe(&mut self, success: bool, now: DateTime<Utc>) {
        let elapsed_days =
            (now - self.last_updated).num_milliseconds() as f64 / MILLIS_PER_DAY;
        let decay = (-DECAY_RATE_PER_DAY * elapsed_days).exp();
        let outcome = if success { 1.0 } else { 0.0 };

        self.frequency = self.frequency * decay + 1.0;
        self.success_rate =
            (self.success_rate * decay * self.frequency + outcome) / (self.frequency + 1.0);
        self.last_updated = now;
    }
}

pub fn pattern_key(category: &str, keyword: &str) -> String {
    format!("{category}:{keyword}")
}

type Records = RwLock<HashMap<String, PatternRecord>>;

/// In-process pattern map with an optional write-through store.
///
/// Reads never block on storage. Writes to the store are fire-and-forget: when a tokio runtime
/// is available they run on the blocking pool, otherwise inline; failures are logged only.
pub struct PatternMemory {
    records: Arc<Records>,
    writer: Option<Arc<StoreWriter>>,
}

impl std::fmt::Debug for PatternMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternMemory")
            .field("patterns", &self.len())
            .field("persistent", &self.writer.is_some())
            .finish()
    }
}

impl Default for PatternMemory {
    fn default() -> Self {
        Self::detached()
    }
}

impl PatternMemory {
    pub fn new(store: Arc<dyn PatternStore>) -> Self {
        Self {
            records: Arc::default(),
            writer: Some(Arc::new(StoreWriter {
                store,
                serial: Mutex::new(()),
            })),
        }
    }

    /// Memory that learns within the process but never persists.
    pub fn detached() -> Self {
        Self {
            records: Arc::default(),
            writer: None,
        }
    }

    /// Bulk-loads every stored record, returning how many were merged.
    ///
    /// A failing store leaves memory untouched.
    pub fn load(&self) -> usize {
        let Some(writer) = &self.writer else {
            return 0;
        };

        match writer.store.list_all() {
            Ok(records) => {
                let count = records.len();
                let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
                guard.extend(records);
                debug!(count, "pattern memory loaded");
                count
            }
            Err(error) => {
                warn!(%error, "failed to load pattern memory; starting cold");
                0
            }
        }
    }

    pub fn get(&self, pattern: &str) -> Option<PatternRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted copy of every record, for inspection.
    pub fn snapshot(&self) -> Vec<(String, PatternRecord)> {
        let mut records: Vec<_> = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(pattern, record)| (pattern.clone(), record.clone()))
            .collect();
        records.sort_by(|a, b| a.0.cmp(&b.0));
        records
    }

    pub fn update(&self, pattern: &str, success: bool) -> PatternRecord {
        self.update_at(pattern, success, Utc::now())
    }

    pub fn update_at(&self, pattern: &str, success: bool, now: DateTime<Utc>) -> PatternRecord {
        let updated = {
            let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
            let record = guard
                .entry(pattern.to_string())
                .or_insert_with(|| PatternRecord::fresh(now));
            record.observe(success, now);
            record.clone()
        };

        self.persist(pattern.to_string());
        updated
    }

    fn persist(&self, pattern: String) {
        let Some(writer) = self.writer.clone() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let records = Arc::clone(&self.records);
                handle.spawn_blocking(move || writer.write(&records, &pattern));
            }
            Err(_) => writer.write(&self.records, &pattern),
        }
    }
}

/// Writes are serialized and always send the record as memory holds it when the write runs.
struct StoreWriter {
    store: Arc<dyn PatternStore>,
    serial: Mutex<()>,
}

impl StoreWriter {
    fn write(&self, records: &Records, pattern: &str) {
        let _serial = self.serial.lock().unwrap_or_else(PoisonError::into_inner);
        let current = records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
            .cloned();
        let Some(record) = current else {
            return;
        };

        if let Err(error) = self.store.upsert(pattern, &record) {
            warn!(%pattern, %error, "failed to persist pattern");
        }
    }
}
