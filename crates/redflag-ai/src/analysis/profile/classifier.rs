use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::super::lexicon::{LexiconEntry, MOTIVATORS};
use super::super::memory::{pattern_key, PatternMemory};

/// One motivator category detected in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTypeResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub confidence: f64,
    pub phrase: String,
    pub interpretation: String,
    pub traits: Vec<String>,
    pub summary: String,
}

/// Keyword classifier over the profile motivator table.
#[derive(Debug, Clone)]
pub struct ProfileClassifier {
    memory: Arc<PatternMemory>,
}

impl ProfileClassifier {
    pub fn new(memory: Arc<PatternMemory>) -> Self {
        Self { memory }
    }

    pub fn memory(&self) -> &Arc<PatternMemory> {
        &self.memory
    }

    pub fn classify(&self, text: &str) -> Vec<ProfileTypeResult> {
        self.classify_with_rng(text, &mut rand::thread_rng())
    }

    /// Scores every motivator category that has at least one keyword in `text`.
    ///
    /// Pattern bonuses read memory as it was before this call; every matched pattern is then
    /// recorded as a success.
    pub fn classify_with_rng<R>(&self, text: &str, rng: &mut R) -> Vec<ProfileTypeResult>
    where
        R: Rng + ?Sized,
    {
        if text.is_empty() {
            return Vec::new();
        }

        let text_lower = text.to_lowercase();
        let mut results = Vec::new();
        let mut observed = Vec::new();

        for entry in MOTIVATORS.iter() {
            let matches: Vec<&str> = entry
                .keywords
                .iter()
                .copied()
                .filter(|keyword| text_lower.contains(keyword))
                .collect();
            if matches.is_empty() {
                continue;
            }

            let coverage = matches.len() as f64 / entry.keywords.len() as f64;
            let mut pattern_bonus = 0.0;
            for keyword in &matches {
                let pattern = pattern_key(&entry.category, keyword);
                if let Some(record) = self.memory.get(&pattern) {
                    pattern_bonus += record.bonus();
                }
                observed.push(pattern);
            }

            let weight = entry.learning_weight;
            let confidence = coverage * weight.base + pattern_bonus * weight.trend;

            results.push(describe(entry, confidence, rng));
        }

        for pattern in &observed {
            self.memory.update(pattern, true);
        }

        debug!(
            categories = results.len(),
            patterns = observed.len(),
            "profile classified"
        );
        results
    }
}

fn describe<R>(entry: &LexiconEntry, confidence: f64, rng: &mut R) -> ProfileTypeResult
where
    R: Rng + ?Sized,
{
    ProfileTypeResult {
        kind: entry.category.to_uppercase(),
        confidence,
        phrase: pick(entry.positive_phrases, rng),
        interpretation: pick(entry.interpretations, rng),
        traits: entry.traits.iter().map(|t| t.to_string()).collect(),
        summary: format!("Strong {} focus with evolving trends", entry.category),
    }
}

fn pick<R>(options: &[&str], rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    options.choose(rng).copied().unwrap_or_default().to_string()
}
