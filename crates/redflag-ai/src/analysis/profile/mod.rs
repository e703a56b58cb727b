//! Single-profile classification and the copy generated from it.

mod classifier;
mod composer;
mod input;
mod report;

pub use classifier::{ProfileClassifier, ProfileTypeResult};
pub use composer::{
    compose, GenerationalTakes, ProfileResponse, TranslationPair, DEFAULT_BOTTOM_LINE,
};
pub use input::{validate_profile_text, ProfileInputError, MAX_PROFILE_CHARS, MIN_PROFILE_CHARS};
pub use report::{build_report, ProfileReport, EASTER_EGG_RESPONSES, EXAMPLE_PROFILES};
