use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use super::PatternRecord;

/// Storage abstraction mirroring pattern memory outside the process.
///
/// Every method may fail; callers inside the engine log and discard the error.
pub trait PatternStore: Send + Sync {
    fn get(&self, pattern: &str) -> Result<Option<PatternRecord>, StoreError>;
    fn upsert(&self, pattern: &str, record: &PatternRecord) -> Result<(), StoreError>;
    fn list_all(&self) -> Result<Vec<(String, PatternRecord)>, StoreError>;
}

/// Error enumeration for pattern store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("pattern store unavailable: {0}")]
    Unavailable(String),
    #[error("pattern store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("pattern store contains malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

/// Process-local store, mostly useful for tests and the default server wiring.
#[derive(Debug, Default)]
pub struct InMemoryPatternStore {
    records: Mutex<HashMap<String, PatternRecord>>,
}

impl InMemoryPatternStore {
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, PatternRecord)>,
    {
        Self {
            records: Mutex::new(records.into_iter().collect()),
        }
    }
}

impl PatternStore for InMemoryPatternStore {
    fn get(&self, pattern: &str) -> Result<Option<PatternRecord>, StoreError> {
        let guard = self.records.lock().map_err(|_| poisoned())?;
        Ok(guard.get(pattern).cloned())
    }

    fn upsert(&self, pattern: &str, record: &PatternRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().map_err(|_| poisoned())?;
        guard.insert(pattern.to_string(), record.clone());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<(String, PatternRecord)>, StoreError> {
        let guard = self.records.lock().map_err(|_| poisoned())?;
        Ok(guard
            .iter()
            .map(|(pattern, record)| (pattern.clone(), record.clone()))
            .collect())
    }
}

/// Keeps every pattern in a single pretty-printed JSON object keyed by pattern.
///
/// A missing file reads as an empty store. Every upsert stages the full object in a sibling
/// `.tmp` file and renames it over the target. An unreadable file is moved aside to `.corrupt`
/// by the next upsert, which then starts a fresh object.
#[derive(Debug)]
pub struct JsonFilePatternStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFilePatternStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("patterns"));
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<BTreeMap<String, PatternRecord>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl PatternStore for JsonFilePatternStore {
    fn get(&self, pattern: &str) -> Result<Option<PatternRecord>, StoreError> {
        let _lock = self.guard.lock().map_err(|_| poisoned())?;
        Ok(self.read_all()?.remove(pattern))
    }

    fn upsert(&self, pattern: &str, record: &PatternRecord) -> Result<(), StoreError> {
        let _lock = self.guard.lock().map_err(|_| poisoned())?;
        let mut records = match self.read_all() {
            Ok(records) => records,
            Err(StoreError::Malformed(error)) => {
                let corrupt = self.sibling("corrupt");
                warn!(
                    path = %self.path.display(),
                    moved_to = %corrupt.display(),
                    %error,
                    "pattern file unreadable; starting a fresh one"
                );
                fs::rename(&self.path, &corrupt)?;
                BTreeMap::new()
            }
            Err(error) => return Err(error),
        };
        records.insert(pattern.to_string(), record.clone());

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let staging = self.sibling("tmp");
        fs::write(&staging, serde_json::to_vec_pretty(&records)?)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<(String, PatternRecord)>, StoreError> {
        let _lock = self.guard.lock().map_err(|_| poisoned())?;
        Ok(self.read_all()?.into_iter().collect())
    }
}

/// Store used when persistence is switched off; every call fails so the engine runs degraded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledPatternStore;

impl PatternStore for DisabledPatternStore {
    fn get(&self, _pattern: &str) -> Result<Option<PatternRecord>, StoreError> {
        Err(StoreError::Unavailable("persistence disabled".to_string()))
    }

    fn upsert(&self, _pattern: &str, _record: &PatternRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("persistence disabled".to_string()))
    }

    fn list_all(&self) -> Result<Vec<(String, PatternRecord)>, StoreError> {
        Err(StoreError::Unavailable("persistence disabled".to_string()))
    }
}
