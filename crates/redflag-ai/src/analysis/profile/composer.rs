use serde::{Deserialize, Serialize};

use super::classifier::ProfileTypeResult;

pub const DEFAULT_BOTTOM_LINE: &str = "Seeking balance in career, connection, and lifestyle";

/// What a profile said versus what it is taken to mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationPair {
    pub said: String,
    pub meant: String,
}

/// Canned commentary per generation. Independent of the classified text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationalTakes {
    pub gen_z: String,
    pub millennial: String,
    pub gen_x: String,
    pub boomer: String,
}

impl GenerationalTakes {
    pub fn standard() -> Self {
        Self {
            gen_z: "Focused on authentic connections and career growth 💫".to_string(),
            millennial: "Balancing ambition with meaningful relationships ✨".to_string(),
            gen_x: "Values success while seeking genuine connection 🎯".to_string(),
            boomer: "Traditional values meet modern aspirations 🌟".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub translation: Vec<TranslationPair>,
    pub personality_indicators: Vec<String>,
    pub bottom_line: String,
    pub generational_takes: GenerationalTakes,
}

/// Turns classifier output into user-facing copy.
///
/// The bottom line follows the first result in lexicon order, not the most confident one.
pub fn compose(types: &[ProfileTypeResult]) -> ProfileResponse {
    let translation = types
        .iter()
        .map(|result| TranslationPair {
            said: result.phrase.clone(),
            meant: result.interpretation.clone(),
        })
        .collect();

    let personality_indicators = types
        .iter()
        .flat_map(|result| result.traits.iter())
        .map(|trait_name| {
            format!(
                "{} • Strong indicator of success",
                trait_name.to_uppercase()
            )
        })
        .collect();

    let bottom_line = match types.first() {
        Some(dominant) => format!("Key Focus: {}", dominant.summary),
        None => DEFAULT_BOTTOM_LINE.to_string(),
    };

    ProfileResponse {
        translation,
        personality_indicators,
        bottom_line,
        generational_takes: GenerationalTakes::standard(),
    }
}
