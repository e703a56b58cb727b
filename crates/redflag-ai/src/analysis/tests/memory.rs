use std::sync::Arc;

use chrono::Duration;

use super::common::*;
use crate::analysis::{
    DisabledPatternStore, InMemoryPatternStore, JsonFilePatternStore, PatternMemory,
    PatternRecord, PatternStore,
};

#[test]
fn first_observation_starts_from_zero() {
    let memory = PatternMemory::detached();

    let success = memory.update_at("career:goals", true, fixed_now());
    let failure = memory.update_at("intimacy:passion", false, fixed_now());

    assert_eq!(success.frequency, 1.0);
    assert_eq!(success.success_rate, 0.5);
    assert_eq!(failure.frequency, 1.0);
    assert_eq!(failure.success_rate, 0.0);
    assert_eq!(success.last_updated, fixed_now());
}

#[test]
fn success_rate_blends_with_updated_frequency() {
    let memory = PatternMemory::detached();

    memory.update_at("career:goals", true, fixed_now());
    let second = memory.update_at("career:goals", true, fixed_now());

    assert_eq!(second.frequency, 2.0);
    assert!((second.success_rate - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn frequency_decays_between_updates() {
    for days in [1, 3, 10, 60] {
        let memory = PatternMemory::detached();
        let start = fixed_now();
        let first = memory.update_at("lifestyle:travel", true, start);

        let later = start + Duration::days(days);
        let second = memory.update_at("lifestyle:travel", true, later);

        let decayed = first.frequency * (-0.1 * days as f64).exp();
        assert!((second.frequency - (decayed + 1.0)).abs() < 1e-12);
        assert!(second.frequency < first.frequency + 1.0);
        assert_eq!(second.last_updated, later);
    }
}

#[test]
fn load_merges_stored_records() {
    let record = PatternRecord {
        frequency: 4.0,
        success_rate: 0.75,
        last_updated: fixed_now(),
    };
    let store = InMemoryPatternStore::with_records([("career:goals".to_string(), record.clone())]);
    let memory = PatternMemory::new(Arc::new(store));

    assert_eq!(memory.load(), 1);
    assert_eq!(memory.get("career:goals"), Some(record));
    assert!((memory.get("career:goals").expect("loaded").bonus() - 0.03).abs() < 1e-12);
}

#[test]
fn failed_load_keeps_memory_cold() {
    let memory = PatternMemory::new(Arc::new(DisabledPatternStore));

    assert_eq!(memory.load(), 0);
    assert!(memory.is_empty());

    memory.update_at("career:goals", true, fixed_now());
    assert_eq!(memory.len(), 1);
}

#[test]
fn json_store_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("patterns.json");

    let memory = PatternMemory::new(Arc::new(JsonFilePatternStore::new(&path)));
    memory.update_at("career:goals", true, fixed_now());
    memory.update_at("lifestyle:travel", false, fixed_now());

    let reopened = JsonFilePatternStore::new(&path);
    let stored = reopened.list_all().expect("list records");
    assert_eq!(stored.len(), 2);

    let restarted = PatternMemory::new(Arc::new(reopened));
    assert_eq!(restarted.load(), 2);
    assert_eq!(restarted.snapshot(), memory.snapshot());
}

#[test]
fn json_store_treats_missing_file_as_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = JsonFilePatternStore::new(dir.path().join("absent.json"));

    assert!(store.list_all().expect("list").is_empty());
    assert!(store.get("career:goals").expect("get").is_none());
}

#[test]
fn json_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("patterns.json");
    std::fs::write(&path, "{ not json").expect("write file");

    let memory = PatternMemory::new(Arc::new(JsonFilePatternStore::new(&path)));

    assert_eq!(memory.load(), 0);
    assert!(memory.is_empty());
}

#[test]
fn json_store_recovers_from_truncated_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("patterns.json");
    let truncated = r#"{ "career:goals": { "frequency": 3.0, "success_rate""#;
    std::fs::write(&path, truncated).expect("write file");

    let memory = PatternMemory::new(Arc::new(JsonFilePatternStore::new(&path)));
    assert_eq!(memory.load(), 0);
    for _ in 0..5 {
        memory.update_at("career:goals", true, fixed_now());
    }

    let stored = JsonFilePatternStore::new(&path)
        .list_all()
        .expect("store readable again");
    assert!(same_records(&stored, &memory.snapshot()));
    assert_eq!(stored[0].1.frequency, 5.0);

    let set_aside = std::fs::read_to_string(dir.path().join("patterns.json.corrupt"))
        .expect("corrupt file kept");
    assert_eq!(set_aside, truncated);
    assert!(!dir.path().join("patterns.json.tmp").exists());
}
