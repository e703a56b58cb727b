//! Two-profile compatibility comparison.
//!
//! In [`ComparatorScoringMode::Random`] (the default) profile scores, motivator alignment, and
//! tie-breakers are uniform draws that ignore both texts. `Derived` computes them from the two
//! classification results instead. The interest, difference, and recommendation lists are canned
//! in both modes.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::ProfileTypeResult;

const COMMON_MOTIVATORS: [&str; 3] = ["Career Growth", "Genuine Connection", "Quality Lifestyle"];

const KEY_DIFFERENCES: [&str; 4] = [
    "Career prioritization",
    "Approach to intimacy",
    "Lifestyle expectations",
    "Success definitions",
];

const COMPARISON_RECOMMENDATIONS: [&str; 5] = [
    "Discuss career goals and support",
    "Explore shared definitions of success",
    "Align on work-life balance",
    "Share intimacy expectations",
    "Define quality time together",
];

/// How the comparator fills its numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorScoringMode {
    /// Uniform random values, independent of either profile.
    #[default]
    Random,
    /// Values computed from the two classification results.
    Derived,
}

impl ComparatorScoringMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "random" => Some(Self::Random),
            "derived" => Some(Self::Derived),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Derived => "derived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedProfile {
    pub id: String,
    pub text: String,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotivatorMatch {
    #[serde(rename = "match")]
    pub alignment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityMatrix {
    pub career: MotivatorMatch,
    pub connection: MotivatorMatch,
    pub lifestyle: MotivatorMatch,
}

/// Narrative-only scores; nothing downstream decides on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreakers {
    pub interest_depth: u8,
    pub value_strength: u8,
    pub unique_traits: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileComparison {
    pub id: String,
    pub profiles: [ComparedProfile; 2],
    pub compatibility_matrix: CompatibilityMatrix,
    pub common_interests: Vec<String>,
    pub differences: Vec<String>,
    pub recommendations: Vec<String>,
    pub tie_breakers: TieBreakers,
    pub group_score: f64,
    pub created_at: DateTime<Utc>,
    pub scoring_mode: ComparatorScoringMode,
}

/// Assembles a comparison from two already-classified profiles.
pub fn build_comparison<R>(
    text_a: &str,
    text_b: &str,
    types_a: &[ProfileTypeResult],
    types_b: &[ProfileTypeResult],
    mode: ComparatorScoringMode,
    rng: &mut R,
    now: DateTime<Utc>,
) -> ProfileComparison
where
    R: Rng + ?Sized,
{
    let (scores, compatibility_matrix, tie_breakers) = match mode {
        ComparatorScoringMode::Random => random_scores(rng),
        ComparatorScoringMode::Derived => derived_scores(types_a, types_b),
    };

    ProfileComparison {
        id: Uuid::new_v4().to_string(),
        profiles: [
            ComparedProfile {
                id: Uuid::new_v4().to_string(),
                text: text_a.to_string(),
                score: scores.0,
            },
            ComparedProfile {
                id: Uuid::new_v4().to_string(),
                text: text_b.to_string(),
                score: scores.1,
            },
        ],
        compatibility_matrix,
        common_interests: COMMON_MOTIVATORS
            .iter()
            .map(|motivator| format!("Shared focus on {}", motivator.to_lowercase()))
            .collect(),
        differences: KEY_DIFFERENCES.iter().map(|s| s.to_string()).collect(),
        recommendations: COMPARISON_RECOMMENDATIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        tie_breakers,
        group_score: (f64::from(scores.0) + f64::from(scores.1)) / 2.0,
        created_at: now,
        scoring_mode: mode,
    }
}

fn random_scores<R>(rng: &mut R) -> ((u8, u8), CompatibilityMatrix, TieBreakers)
where
    R: Rng + ?Sized,
{
    let scores = (rng.gen_range(0..100), rng.gen_range(0..100));
    let matrix = CompatibilityMatrix {
        career: MotivatorMatch {
            alignment: rng.gen(),
        },
        connection: MotivatorMatch {
            alignment: rng.gen(),
        },
        lifestyle: MotivatorMatch {
            alignment: rng.gen(),
        },
    };
    let tie_breakers = TieBreakers {
        interest_depth: rng.gen_range(0..100),
        value_strength: rng.gen_range(0..100),
        unique_traits: rng.gen_range(0..100),
    };
    (scores, matrix, tie_breakers)
}

const MATRIX_TYPES: [&str; 3] = ["CAREER", "INTIMACY", "LIFESTYLE"];

fn confidence_of(types: &[ProfileTypeResult], kind: &str) -> f64 {
    types
        .iter()
        .find(|result| result.kind == kind)
        .map(|result| result.confidence.max(0.0))
        .unwrap_or(0.0)
}

/// Ratio of the weaker to the stronger confidence; zero unless both profiles show the type.
fn alignment(types_a: &[ProfileTypeResult], types_b: &[ProfileTypeResult], kind: &str) -> f64 {
    let a = confidence_of(types_a, kind);
    let b = confidence_of(types_b, kind);
    let strongest = a.max(b);
    if strongest <= 0.0 {
        0.0
    } else {
        a.min(b) / strongest
    }
}

/// Share of a profile's own motivators that the other profile reciprocates, as a percentage.
fn reciprocation(own: &[ProfileTypeResult], other: &[ProfileTypeResult]) -> u8 {
    if own.is_empty() {
        return 0;
    }
    let total: f64 = own
        .iter()
        .map(|result| alignment(own, other, &result.kind))
        .sum();
    to_percent(total / own.len() as f64)
}

fn to_percent(ratio: f64) -> u8 {
    if !ratio.is_finite() {
        return 0;
    }
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn derived_scores(
    types_a: &[ProfileTypeResult],
    types_b: &[ProfileTypeResult],
) -> ((u8, u8), CompatibilityMatrix, TieBreakers) {
    let scores = (
        reciprocation(types_a, types_b),
        reciprocation(types_b, types_a),
    );

    let matrix = CompatibilityMatrix {
        career: MotivatorMatch {
            alignment: alignment(types_a, types_b, MATRIX_TYPES[0]),
        },
        connection: MotivatorMatch {
            alignment: alignment(types_a, types_b, MATRIX_TYPES[1]),
        },
        lifestyle: MotivatorMatch {
            alignment: alignment(types_a, types_b, MATRIX_TYPES[2]),
        },
    };

    let kinds_a: BTreeSet<&str> = types_a.iter().map(|r| r.kind.as_str()).collect();
    let kinds_b: BTreeSet<&str> = types_b.iter().map(|r| r.kind.as_str()).collect();
    let shared = kinds_a.intersection(&kinds_b).count();
    let interest_depth = to_percent(shared as f64 / MATRIX_TYPES.len() as f64);

    let confidences: Vec<f64> = types_a
        .iter()
        .chain(types_b.iter())
        .map(|r| r.confidence)
        .collect();
    let value_strength = if confidences.is_empty() {
        0
    } else {
        to_percent(confidences.iter().sum::<f64>() / confidences.len() as f64)
    };

    let traits_a: BTreeSet<&str> = types_a
        .iter()
        .flat_map(|r| r.traits.iter().map(String::as_str))
        .collect();
    let traits_b: BTreeSet<&str> = types_b
        .iter()
        .flat_map(|r| r.traits.iter().map(String::as_str))
        .collect();
    let union = traits_a.union(&traits_b).count();
    let unique_traits = if union == 0 {
        0
    } else {
        to_percent(traits_a.symmetric_difference(&traits_b).count() as f64 / union as f64)
    };

    (
        scores,
        matrix,
        TieBreakers {
            interest_depth,
            value_strength,
            unique_traits,
        },
    )
}
