//! Keyword-driven profile and chat analysis.
//!
//! The lexicon and pattern memory are the only shared state; everything else is a pure
//! function of the caller's text plus an injected random source.

pub mod chat;
pub mod comparison;
pub mod lexicon;
pub mod memory;
pub mod profile;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use chat::{analyze, normalize, ChatAnalysis, ChatInsights, ChatMessage, ChatPatterns};
pub use comparison::{
    build_comparison, CompatibilityMatrix, ComparatorScoringMode, ComparedProfile,
    MotivatorMatch, ProfileComparison, TieBreakers,
};
pub use lexicon::{
    categories_for, LearningWeight, LexiconDomain, LexiconEntry, SignalTable, SignalTier,
};
pub use memory::{
    pattern_key, DisabledPatternStore, InMemoryPatternStore, JsonFilePatternStore, PatternMemory,
    PatternRecord, PatternStore, StoreError,
};
pub use profile::{
    build_report, compose, validate_profile_text, GenerationalTakes, ProfileClassifier,
    ProfileInputError, ProfileReport, ProfileResponse, ProfileTypeResult, TranslationPair,
    DEFAULT_BOTTOM_LINE, EXAMPLE_PROFILES, MAX_PROFILE_CHARS, MIN_PROFILE_CHARS,
};
pub use router::analysis_router;
pub use service::AnalysisService;
