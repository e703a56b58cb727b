use std::sync::Arc;

use super::common::*;
use crate::analysis::{build_comparison, ComparatorScoringMode, DisabledPatternStore};

#[test]
fn random_mode_stays_within_ranges() {
    let service = detached_service();
    let mut rng = seeded_rng();

    for _ in 0..20 {
        let comparison =
            service.compare_profiles_with_rng(CAREER_PROFILE, "romantic traveller", &mut rng);

        let [first, second] = &comparison.profiles;
        assert!(first.score < 100 && second.score < 100);
        assert_eq!(
            comparison.group_score,
            (f64::from(first.score) + f64::from(second.score)) / 2.0
        );
        for alignment in [
            comparison.compatibility_matrix.career.alignment,
            comparison.compatibility_matrix.connection.alignment,
            comparison.compatibility_matrix.lifestyle.alignment,
        ] {
            assert!((0.0..1.0).contains(&alignment));
        }
        assert!(comparison.tie_breakers.interest_depth < 100);
        assert_eq!(comparison.scoring_mode, ComparatorScoringMode::Random);
    }
}

#[test]
fn canned_lists_are_always_present() {
    let comparison = build_comparison(
        "",
        "",
        &[],
        &[],
        ComparatorScoringMode::Random,
        &mut seeded_rng(),
        fixed_now(),
    );

    assert_eq!(
        comparison.common_interests,
        [
            "Shared focus on career growth",
            "Shared focus on genuine connection",
            "Shared focus on quality lifestyle",
        ]
    );
    assert_eq!(comparison.differences.len(), 4);
    assert_eq!(comparison.recommendations.len(), 5);
    assert_eq!(comparison.created_at, fixed_now());
    assert_ne!(comparison.profiles[0].id, comparison.profiles[1].id);
}

#[test]
fn derived_mode_scores_from_classifications() {
    let first = vec![
        type_result("CAREER", 0.4, &["driven", "focused"]),
        type_result("LIFESTYLE", 0.2, &["refined"]),
    ];
    let second = vec![type_result("CAREER", 0.2, &["driven", "bold"])];

    let comparison = build_comparison(
        "a",
        "b",
        &first,
        &second,
        ComparatorScoringMode::Derived,
        &mut seeded_rng(),
        fixed_now(),
    );

    let matrix = comparison.compatibility_matrix;
    assert!((matrix.career.alignment - 0.5).abs() < 1e-12);
    assert_eq!(matrix.connection.alignment, 0.0);
    assert_eq!(matrix.lifestyle.alignment, 0.0);

    assert_eq!(comparison.profiles[0].score, 25);
    assert_eq!(comparison.profiles[1].score, 50);
    assert_eq!(comparison.group_score, 37.5);

    assert_eq!(comparison.tie_breakers.interest_depth, 33);
    assert_eq!(comparison.tie_breakers.value_strength, 27);
    assert_eq!(comparison.tie_breakers.unique_traits, 75);
}

#[test]
fn derived_mode_handles_empty_classifications() {
    let comparison = build_comparison(
        "",
        "",
        &[],
        &[],
        ComparatorScoringMode::Derived,
        &mut seeded_rng(),
        fixed_now(),
    );

    assert_eq!(comparison.group_score, 0.0);
    assert_eq!(comparison.tie_breakers.value_strength, 0);
    assert_eq!(comparison.tie_breakers.unique_traits, 0);
}

#[test]
fn comparing_feeds_pattern_memory() {
    let service =
        service_with_store(Arc::new(DisabledPatternStore), ComparatorScoringMode::Derived);

    let comparison = service.compare_profiles(CAREER_PROFILE, CAREER_PROFILE);

    assert_eq!(comparison.scoring_mode, ComparatorScoringMode::Derived);
    // the second classification carries a small pattern bonus
    assert!(comparison.profiles[0].score >= 95);
    let record = service
        .memory()
        .get("career:success")
        .expect("pattern recorded");
    assert!((record.frequency - 2.0).abs() < 1e-6);
}

#[test]
fn scoring_mode_parses_case_insensitively() {
    assert_eq!(
        ComparatorScoringMode::parse(" Derived "),
        Some(ComparatorScoringMode::Derived)
    );
    assert_eq!(
        ComparatorScoringMode::parse("random"),
        Some(ComparatorScoringMode::Random)
    );
    assert_eq!(ComparatorScoringMode::parse("vibes"), None);
    assert_eq!(ComparatorScoringMode::Derived.label(), "derived");
}
