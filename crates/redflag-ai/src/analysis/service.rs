use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::info;

use super::chat::{self, ChatAnalysis, ChatMessage};
use super::comparison::{build_comparison, ComparatorScoringMode, ProfileComparison};
use super::memory::{InMemoryPatternStore, JsonFilePatternStore, PatternMemory, PatternStore};
use super::profile::{
    build_report, compose, ProfileClassifier, ProfileReport, ProfileResponse, ProfileTypeResult,
};
use crate::config::AnalysisConfig;

/// Facade composing the classifier, comparator, chat analyzer, and shared pattern memory.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    classifier: ProfileClassifier,
    memory: Arc<PatternMemory>,
    scoring_mode: ComparatorScoringMode,
}

impl AnalysisService {
    pub fn new(memory: Arc<PatternMemory>, scoring_mode: ComparatorScoringMode) -> Self {
        Self {
            classifier: ProfileClassifier::new(memory.clone()),
            memory,
            scoring_mode,
        }
    }

    /// Wires pattern memory to a JSON file when a path is configured, else to an in-process
    /// store. Records are not loaded here; call [`PatternMemory::load`] when convenient.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let store: Arc<dyn PatternStore> = match &config.pattern_store_path {
            Some(path) => {
                info!(path = %path.display(), "using json pattern store");
                Arc::new(JsonFilePatternStore::new(path.clone()))
            }
            None => Arc::new(InMemoryPatternStore::default()),
        };
        Self::new(Arc::new(PatternMemory::new(store)), config.comparator_scoring)
    }

    pub fn memory(&self) -> &Arc<PatternMemory> {
        &self.memory
    }

    pub fn scoring_mode(&self) -> ComparatorScoringMode {
        self.scoring_mode
    }

    /// Detects motivator categories and records matched patterns.
    pub fn classify_profile(&self, text: &str) -> Vec<ProfileTypeResult> {
        self.classifier.classify(text)
    }

    pub fn compose_response(&self, types: &[ProfileTypeResult]) -> ProfileResponse {
        compose(types)
    }

    pub fn compare_profiles(&self, first: &str, second: &str) -> ProfileComparison {
        self.compare_profiles_with_rng(first, second, &mut rand::thread_rng())
    }

    /// Classifies both texts (each feeding pattern memory) and compares the results.
    pub fn compare_profiles_with_rng<R>(
        &self,
        first: &str,
        second: &str,
        rng: &mut R,
    ) -> ProfileComparison
    where
        R: Rng + ?Sized,
    {
        let types_a = self.classifier.classify_with_rng(first, rng);
        let types_b = self.classifier.classify_with_rng(second, rng);
        build_comparison(
            first,
            second,
            &types_a,
            &types_b,
            self.scoring_mode,
            rng,
            Utc::now(),
        )
    }

    pub fn analyze_chat(&self, messages: &[ChatMessage]) -> ChatAnalysis {
        chat::analyze(messages)
    }

    pub fn analyze_profile(&self, text: &str, roast_mode: bool) -> ProfileReport {
        self.analyze_profile_with_rng(text, roast_mode, &mut rand::thread_rng())
    }

    pub fn analyze_profile_with_rng<R>(
        &self,
        text: &str,
        roast_mode: bool,
        rng: &mut R,
    ) -> ProfileReport
    where
        R: Rng + ?Sized,
    {
        let profile_types = self.classifier.classify_with_rng(text, rng);
        build_report(text, profile_types, roast_mode, rng)
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new(
            Arc::new(PatternMemory::detached()),
            ComparatorScoringMode::default(),
        )
    }
}
