use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::analysis::{
    AnalysisService, ChatMessage, ComparatorScoringMode, InMemoryPatternStore, PatternMemory,
    PatternRecord, PatternStore, ProfileTypeResult, StoreError,
};

pub(super) const CAREER_PROFILE: &str =
    "ambitious entrepreneur building a business, ready for success";

pub(super) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn detached_service() -> AnalysisService {
    AnalysisService::default()
}

pub(super) fn service_with_store(
    store: Arc<dyn PatternStore>,
    mode: ComparatorScoringMode,
) -> AnalysisService {
    AnalysisService::new(Arc::new(PatternMemory::new(store)), mode)
}

pub(super) fn messages(texts: &[&str]) -> Vec<ChatMessage> {
    texts.iter().map(|text| ChatMessage::new(*text)).collect()
}

pub(super) fn type_result(kind: &str, confidence: f64, traits: &[&str]) -> ProfileTypeResult {
    ProfileTypeResult {
        kind: kind.to_string(),
        confidence,
        phrase: "clear goals".to_string(),
        interpretation: "values achievement".to_string(),
        traits: traits.iter().map(|t| t.to_string()).collect(),
        summary: format!("Strong {} focus with evolving trends", kind.to_lowercase()),
    }
}

/// Store that remembers every write it accepts.
#[derive(Default)]
pub(super) struct RecordingStore {
    writes: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub(super) fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("store mutex poisoned").clone()
    }
}

impl PatternStore for RecordingStore {
    fn get(&self, _pattern: &str) -> Result<Option<PatternRecord>, StoreError> {
        Ok(None)
    }

    fn upsert(&self, pattern: &str, _record: &PatternRecord) -> Result<(), StoreError> {
        self.writes
            .lock()
            .expect("store mutex poisoned")
            .push(pattern.to_string());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<(String, PatternRecord)>, StoreError> {
        Ok(Vec::new())
    }
}

/// Store whose writes block until `open` is called, or fail after a few seconds.
#[derive(Default)]
pub(super) struct GatedStore {
    open: Mutex<bool>,
    opened: Condvar,
    inner: RecordingStore,
}

impl GatedStore {
    pub(super) fn open(&self) {
        *self.open.lock().expect("gate mutex poisoned") = true;
        self.opened.notify_all();
    }

    pub(super) fn writes(&self) -> Vec<String> {
        self.inner.writes()
    }
}

impl PatternStore for GatedStore {
    fn get(&self, pattern: &str) -> Result<Option<PatternRecord>, StoreError> {
        self.inner.get(pattern)
    }

    fn upsert(&self, pattern: &str, record: &PatternRecord) -> Result<(), StoreError> {
        let open = self.open.lock().expect("gate mutex poisoned");
        let (open, _) = self
            .opened
            .wait_timeout_while(open, Duration::from_secs(5), |open| !*open)
            .expect("gate mutex poisoned");
        if !*open {
            return Err(StoreError::Unavailable("gate never opened".to_string()));
        }
        drop(open);
        self.inner.upsert(pattern, record)
    }

    fn list_all(&self) -> Result<Vec<(String, PatternRecord)>, StoreError> {
        self.inner.list_all()
    }
}

/// In-memory store that stalls on any write of a first observation.
#[derive(Default)]
pub(super) struct SlowFirstWriteStore {
    inner: InMemoryPatternStore,
}

impl SlowFirstWriteStore {
    pub(super) fn stored(&self, pattern: &str) -> Option<PatternRecord> {
        self.inner.get(pattern).expect("in-memory store")
    }
}

impl PatternStore for SlowFirstWriteStore {
    fn get(&self, pattern: &str) -> Result<Option<PatternRecord>, StoreError> {
        self.inner.get(pattern)
    }

    fn upsert(&self, pattern: &str, record: &PatternRecord) -> Result<(), StoreError> {
        if record.frequency == 1.0 {
            std::thread::sleep(Duration::from_millis(200));
        }
        self.inner.upsert(pattern, record)
    }

    fn list_all(&self) -> Result<Vec<(String, PatternRecord)>, StoreError> {
        self.inner.list_all()
    }
}

/// Record lists compared with a tolerance, since JSON text does not round-trip every float.
pub(super) fn same_records(
    left: &[(String, PatternRecord)],
    right: &[(String, PatternRecord)],
) -> bool {
    left.len() == right.len()
        && left.iter().zip(right).all(|((lk, l), (rk, r))| {
            lk == rk
                && (l.frequency - r.frequency).abs() < 1e-9
                && (l.success_rate - r.success_rate).abs() < 1e-9
                && l.last_updated == r.last_updated
        })
}

/// Polls `condition` for up to two seconds while background writes drain.
pub(super) async fn eventually<F>(condition: F) -> bool
where
    F: Fn() -> bool,
{
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
