use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::classifier::ProfileTypeResult;
use super::composer::{compose, GenerationalTakes, TranslationPair};

const SHORT_PROFILE_CHARS: usize = 100;

pub const EASTER_EGG_RESPONSES: [&str; 5] = [
    "This person probably still uses Internet Explorer",
    "Likely to bring a guitar to a house party uninvited",
    "Definitely thinks cryptocurrency is personality",
    "100% chance they mention their Myers-Briggs type on the first date",
    "Would ghost you for their ex's cousin's best friend",
];

pub const EXAMPLE_PROFILES: [&str; 6] = [
    "Love to laugh and travel! Looking for my best friend and partner in crime. I'm not here for drama or games. Must love dogs. Swipe left if you're under 6ft. I speak fluent sarcasm and pizza is my love language 🍕✈️😂",
    "Entrepreneur building the future. Crypto investor, fitness enthusiast, and weekend warrior. Alpha mindset. If you can't handle me at my worst, you don't deserve me at my best. No fatties.",
    "Just moved here from [insert city]. Looking to meet new people and explore! I work hard and play harder. Wine lover, foodie, and amateur photographer. Let's grab drinks and see where it goes!",
    "Sapiosexual seeking intellectual stimulation. PhD in philosophy, published poet, and vinyl collector. I prefer deep conversations over small talk. Please be well-read and emotionally mature.",
    "Single mom to the most amazing little human. My kid comes first, always. Looking for someone genuine who understands family comes first. No hookups. Must have your life together.",
    "Adventure seeker and thrill junkie! Rock climbing, skydiving, motorcycle rides - if it gets my adrenaline pumping, I'm in. Looking for someone who can keep up with my lifestyle.",
];

/// Complete single-profile analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub overall_score: u8,
    pub profile_types: Vec<ProfileTypeResult>,
    pub translation: Vec<TranslationPair>,
    pub personality_indicators: Vec<String>,
    pub bottom_line: String,
    pub generational_takes: GenerationalTakes,
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    pub neutral_observations: Vec<String>,
}

/// Wraps a classification with the observation lists shown next to it.
///
/// `roast_mode` adds the joke lines, including one random easter egg.
pub fn build_report<R>(
    text: &str,
    profile_types: Vec<ProfileTypeResult>,
    roast_mode: bool,
    rng: &mut R,
) -> ProfileReport
where
    R: Rng + ?Sized,
{
    let response = compose(&profile_types);

    let mut red_flags = vec![
        "Mentions 'not here for drama' which often indicates they create drama".to_string(),
        "Lists height requirements without mentioning their own height".to_string(),
        "Uses the phrase 'fluent in sarcasm' suggesting potential communication issues"
            .to_string(),
    ];
    if text.chars().count() < SHORT_PROFILE_CHARS {
        red_flags.push("Profile is very short, suggesting low effort or engagement".to_string());
    }
    if roast_mode {
        red_flags.push("This person definitely still has a Myspace account".to_string());
    }

    let mut green_flags = vec![
        "Shows genuine interests and hobbies".to_string(),
        "Mentions desire for meaningful connection".to_string(),
        "Profile is well-written without spelling errors".to_string(),
    ];
    if text.contains("travel") {
        green_flags.push("Expresses interest in travel and new experiences".to_string());
    }

    let mut neutral_observations = vec![
        "Multiple emoji usage throughout profile".to_string(),
        "Mentions food preferences".to_string(),
        "Lists favorite TV shows/movies".to_string(),
    ];
    if text.contains("gym") {
        neutral_observations.push("Frequently mentions fitness activities".to_string());
    }
    if roast_mode {
        neutral_observations.push("Probably thinks pineapple belongs on pizza".to_string());
        if let Some(egg) = EASTER_EGG_RESPONSES.choose(rng) {
            neutral_observations.push((*egg).to_string());
        }
    }

    ProfileReport {
        overall_score: rng.gen_range(0..100),
        profile_types,
        translation: response.translation,
        personality_indicators: response.personality_indicators,
        bottom_line: response.bottom_line,
        generational_takes: response.generational_takes,
        red_flags,
        green_flags,
        neutral_observations,
    }
}
