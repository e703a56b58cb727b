use std::sync::OnceLock;

use regex::Regex;

use super::super::lexicon::{
    SignalTable, AI_INTEREST, ATTRACTION, AUTHENTICITY, CONTEXT_CHECK, INTELLECTUAL, INTIMACY,
    PRACTICALITY, SOCIAL_CLIMBING, TECH_AUTHENTICITY,
};
use super::{ChatMessage, ChatPatterns};

const SECONDS_PER_DAY: f64 = 86_400.0;
const DETAILED_MESSAGE_CHARS: usize = 100;

/// Linear rescale of `value` from `[min, max]` onto `[0, 1]`, clamped.
///
/// Non-finite input (including a degenerate `min == max` span) maps to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let scaled = (value - min) / (max - min);
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.clamp(0.0, 1.0)
}

pub(crate) fn compute_patterns(messages: &[ChatMessage]) -> ChatPatterns {
    ChatPatterns {
        reply_speed: normalize(average_reply_time(messages), 0.0, SECONDS_PER_DAY),
        message_length: normalize(average_message_length(messages), 1.0, 200.0),
        question_frequency: normalize(question_frequency(messages), 0.0, 1.0),
        emoji_usage: normalize(emoji_usage(messages), 0.0, 10.0),
        intimacy_progression: intimacy_progression(messages),
        attraction_level: attraction_level(messages),
        authenticity: authenticity(messages),
        practicality: practicality(messages),
        social_climbing: social_climbing(messages),
        context_checking: context_checking(messages),
        ai_interest: ai_interest(messages),
        intellectual_depth: intellectual_depth(messages),
        tech_authenticity: tech_authenticity(messages),
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn lowered(message: &ChatMessage) -> String {
    message.text.to_lowercase()
}

/// Sums `weight(tier_index)` for every keyword of `table` found in `text`.
fn tier_hits<F>(table: &SignalTable, text: &str, weight: F) -> f64
where
    F: Fn(usize) -> f64,
{
    table
        .tiers
        .iter()
        .enumerate()
        .map(|(index, tier)| {
            let hits = tier
                .keywords
                .iter()
                .filter(|keyword| text.contains(&keyword.to_lowercase()))
                .count();
            hits as f64 * weight(index)
        })
        .sum()
}

/// Seconds; a missing reply time counts as an instant reply.
pub(crate) fn average_reply_time(messages: &[ChatMessage]) -> f64 {
    let total: f64 = messages
        .iter()
        .map(|message| message.reply_time.unwrap_or(0.0))
        .sum();
    mean(total, messages.len())
}

/// Length in UTF-16 code units, so an astral-plane emoji counts as two.
pub(crate) fn average_message_length(messages: &[ChatMessage]) -> f64 {
    let total: usize = messages
        .iter()
        .map(|message| message.text.encode_utf16().count())
        .sum();
    mean(total as f64, messages.len())
}

pub(crate) fn question_frequency(messages: &[ChatMessage]) -> f64 {
    let questions = messages
        .iter()
        .filter(|message| message.text.contains('?'))
        .count();
    mean(questions as f64, messages.len())
}

fn emoji_pattern() -> &'static Regex {
    static EMOJI: OnceLock<Regex> = OnceLock::new();
    EMOJI.get_or_init(|| Regex::new(r"[\x{1F300}-\x{1F9FF}]").expect("emoji range is valid"))
}

pub(crate) fn emoji_usage(messages: &[ChatMessage]) -> f64 {
    let pattern = emoji_pattern();
    let emoji: usize = messages
        .iter()
        .map(|message| pattern.find_iter(&message.text).count())
        .sum();
    mean(emoji as f64, messages.len())
}

/// Later messages weigh more, and deeper intimacy tiers weigh more.
pub(crate) fn intimacy_progression(messages: &[ChatMessage]) -> f64 {
    let count = messages.len() as f64;
    let score: f64 = messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let position = index as f64 / count;
            tier_hits(&INTIMACY, &lowered(message), |tier| {
                (tier + 1) as f64 * position
            })
        })
        .sum();
    normalize(score, 0.0, 10.0)
}

pub(crate) fn attraction_level(messages: &[ChatMessage]) -> f64 {
    let score: f64 = messages
        .iter()
        .map(|message| tier_hits(&ATTRACTION, &lowered(message), descending_weight))
        .sum();
    normalize(score, 0.0, 10.0)
}

/// Starts neutral at 0.5 and moves 0.1 per genuine or suspicious marker.
pub(crate) fn authenticity(messages: &[ChatMessage]) -> f64 {
    let genuine = AUTHENTICITY.tier("genuine");
    let suspicious = AUTHENTICITY.tier("suspicious");
    let score = messages.iter().fold(0.5, |score, message| {
        let text = lowered(message);
        let up = genuine.iter().filter(|k| text.contains(*k)).count() as f64;
        let down = suspicious.iter().filter(|k| text.contains(*k)).count() as f64;
        score + 0.1 * up - 0.1 * down
    });
    score.clamp(0.0, 1.0)
}

pub(crate) fn practicality(messages: &[ChatMessage]) -> f64 {
    let score: f64 = messages
        .iter()
        .map(|message| {
            tier_hits(&PRACTICALITY, &lowered(message), |tier| match tier {
                0 | 1 => 1.0,
                _ => 0.5,
            })
        })
        .sum();
    normalize(score, 0.0, 10.0)
}

pub(crate) fn social_climbing(messages: &[ChatMessage]) -> f64 {
    let score: f64 = messages
        .iter()
        .map(|message| {
            tier_hits(&SOCIAL_CLIMBING, &lowered(message), |tier| match tier {
                1 | 2 => 2.0,
                3 => 1.5,
                _ => 1.0,
            })
        })
        .sum();
    normalize(score, 0.0, 10.0)
}

pub(crate) fn context_checking(messages: &[ChatMessage]) -> f64 {
    let score: f64 = messages
        .iter()
        .map(|message| {
            tier_hits(&CONTEXT_CHECK, &lowered(message), |tier| match tier {
                0 | 1 => 2.0,
                _ => 1.0,
            })
        })
        .sum();
    normalize(score, 0.0, 10.0)
}

/// Technical and philosophical mentions score double; long messages add depth per mention.
pub(crate) fn ai_interest(messages: &[ChatMessage]) -> f64 {
    let mut score = 0.0;
    let mut depth = 0.0;

    for message in messages {
        let text = lowered(message);
        let detailed = text.chars().count() > DETAILED_MESSAGE_CHARS;
        for tier in AI_INTEREST.tiers {
            let weight = match tier.name {
                "technical" | "philosophical" => 2.0,
                _ => 1.0,
            };
            for keyword in tier.keywords {
                if text.contains(&keyword.to_lowercase()) {
                    score += weight;
                    depth += if detailed { 0.5 } else { 0.2 };
                }
            }
        }
    }

    normalize(score * (1.0 + depth), 0.0, 20.0)
}

/// High-tier hits compound by 1.2 once the running score passes 5.
pub(crate) fn intellectual_depth(messages: &[ChatMessage]) -> f64 {
    let mut score = 0.0;

    for message in messages {
        let text = lowered(message);
        for (index, tier) in INTELLECTUAL.tiers.iter().enumerate() {
            for keyword in tier.keywords {
                if text.contains(&keyword.to_lowercase()) {
                    score += descending_weight(index);
                    if index == 0 && score > 5.0 {
                        score *= 1.2;
                    }
                }
            }
        }
    }

    normalize(score, 0.0, 15.0)
}

pub(crate) fn tech_authenticity(messages: &[ChatMessage]) -> f64 {
    let genuine = TECH_AUTHENTICITY.tier("genuine");
    let suspicious = TECH_AUTHENTICITY.tier("suspicious");
    let score = messages.iter().fold(0.5, |score, message| {
        let text = lowered(message);
        let up = genuine.iter().filter(|k| text.contains(*k)).count() as f64;
        let down = suspicious.iter().filter(|k| text.contains(*k)).count() as f64;
        score + 0.15 * up - 0.15 * down
    });
    score.clamp(0.0, 1.0)
}

/// 3 / 2 / 1 for high / medium / low style tables.
pub(crate) fn descending_weight(tier: usize) -> f64 {
    match tier {
        0 => 3.0,
        1 => 2.0,
        _ => 1.0,
    }
}
