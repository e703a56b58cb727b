use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::analysis::{
    analysis_router, pattern_key, ComparatorScoringMode, DisabledPatternStore,
    JsonFilePatternStore, PatternMemory, PatternStore,
};

fn career_patterns() -> Vec<String> {
    let mut patterns: Vec<String> = ["ambitious", "entrepreneur", "business", "success"]
        .into_iter()
        .map(|keyword| pattern_key("career", keyword))
        .collect();
    patterns.sort();
    patterns
}

#[tokio::test]
async fn classification_does_not_wait_for_store_writes() {
    let store = Arc::new(GatedStore::default());
    let service = service_with_store(store.clone(), ComparatorScoringMode::Random);

    let types = service.classify_profile(CAREER_PROFILE);

    assert_eq!(types.len(), 1);
    assert_eq!(service.memory().len(), 4);
    assert!(store.writes().is_empty());

    store.open();
    assert!(eventually(|| store.writes().len() == 4).await);
    let mut writes = store.writes();
    writes.sort();
    assert_eq!(writes, career_patterns());
}

#[tokio::test]
async fn analyze_route_persists_in_background() {
    let store = Arc::new(RecordingStore::default());
    let service = service_with_store(store.clone(), ComparatorScoringMode::Random);
    let router = analysis_router(Arc::new(service));

    let request = Request::post("/api/v1/profile/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "text": CAREER_PROFILE })).expect("encode body"),
        ))
        .expect("request");
    let response = router.oneshot(request).await.expect("route response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(eventually(|| store.writes().len() == 4).await);
}

#[tokio::test]
async fn unavailable_store_is_absorbed_inside_a_runtime() {
    let service = service_with_store(Arc::new(DisabledPatternStore), ComparatorScoringMode::Random);

    let first = service.classify_profile(CAREER_PROFILE);
    let second = service.classify_profile(CAREER_PROFILE);
    let report = service.analyze_profile(CAREER_PROFILE, false);

    assert_eq!(first.len(), 1);
    assert!(second[0].confidence > first[0].confidence);
    assert_eq!(report.profile_types.len(), 1);
    assert_eq!(service.memory().len(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stalled_write_never_replaces_a_newer_record() {
    let store = Arc::new(SlowFirstWriteStore::default());
    let memory = PatternMemory::new(store.clone());

    memory.update_at("career:goals", true, fixed_now());
    memory.update_at("career:goals", true, fixed_now());
    let latest = memory.get("career:goals").expect("record in memory");
    assert_eq!(latest.frequency, 2.0);

    assert!(eventually(|| store.stored("career:goals").as_ref() == Some(&latest)).await);
    // outlast the stalled first write
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(store.stored("career:goals"), Some(latest));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn json_store_converges_on_memory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("patterns.json");
    let memory = PatternMemory::new(Arc::new(JsonFilePatternStore::new(&path)));

    for round in 0..10 {
        memory.update_at("career:goals", round % 3 != 0, fixed_now());
        memory.update_at("lifestyle:travel", true, fixed_now());
    }

    let reopened = JsonFilePatternStore::new(&path);
    let matches_memory = || {
        let mut stored = reopened.list_all().unwrap_or_default();
        stored.sort_by(|a, b| a.0.cmp(&b.0));
        same_records(&stored, &memory.snapshot())
    };
    assert!(eventually(matches_memory).await);
}
