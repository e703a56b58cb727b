use super::super::lexicon::{ATTRACTION, INTEREST, INTIMACY};
use super::metrics::{descending_weight, normalize};
use super::{ChatInsights, ChatMessage, ChatPatterns};

const INTENTION_WINDOW: usize = 5;

pub(crate) fn derive_insights(messages: &[ChatMessage], patterns: &ChatPatterns) -> ChatInsights {
    ChatInsights {
        interest: interest_level(messages, patterns),
        engagement: engagement_score(patterns),
        chemistry: chemistry_score(patterns),
        intentions: detect_intentions(messages),
        red_flags: detect_red_flags(messages, patterns),
        green_flags: detect_green_flags(messages, patterns),
        next_moves: next_moves(patterns),
        relationship_potential: relationship_potential(patterns),
    }
}

/// Tiered interest hits scaled by the mean of four conversational patterns, on `[0, 1]`.
pub(crate) fn interest_level(messages: &[ChatMessage], patterns: &ChatPatterns) -> f64 {
    let hits: f64 = messages
        .iter()
        .map(|message| {
            let text = message.text.to_lowercase();
            INTEREST
                .tiers
                .iter()
                .enumerate()
                .map(|(index, tier)| {
                    let count = tier.keywords.iter().filter(|k| text.contains(*k)).count();
                    count as f64 * descending_weight(index)
                })
                .sum::<f64>()
        })
        .sum();

    let scale = (patterns.question_frequency
        + patterns.message_length
        + patterns.attraction_level
        + patterns.authenticity)
        / 4.0;

    normalize(hits * scale, 0.0, 100.0)
}

pub(crate) fn engagement_score(patterns: &ChatPatterns) -> f64 {
    (patterns.reply_speed * 0.2
        + patterns.message_length * 0.2
        + patterns.question_frequency * 0.2
        + patterns.attraction_level * 0.2
        + patterns.authenticity * 0.2)
        * 100.0
}

pub(crate) fn chemistry_score(patterns: &ChatPatterns) -> f64 {
    (patterns.intimacy_progression * 0.25
        + patterns.question_frequency * 0.15
        + patterns.emoji_usage * 0.15
        + patterns.attraction_level * 0.25
        + patterns.authenticity * 0.2)
        * 100.0
}

pub(crate) fn relationship_potential(patterns: &ChatPatterns) -> f64 {
    (patterns.authenticity * 0.3
        + patterns.practicality * 0.3
        + patterns.intimacy_progression * 0.2
        + patterns.attraction_level * 0.2)
        * 100.0
}

/// Reads only the most recent messages.
pub(crate) fn detect_intentions(messages: &[ChatMessage]) -> Vec<String> {
    let recent = &messages[messages.len().saturating_sub(INTENTION_WINDOW)..];
    let combined = recent
        .iter()
        .map(|message| message.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let mentions_any =
        |keywords: &[&str]| keywords.iter().any(|keyword| combined.contains(keyword));

    let mut intentions = Vec::new();
    if mentions_any(INTIMACY.tier("casual")) {
        intentions.push("Seeking casual meetup".to_string());
    }
    if mentions_any(INTIMACY.tier("romantic")) {
        intentions.push("Interested in dating".to_string());
    }
    if mentions_any(INTIMACY.tier("physical")) {
        intentions.push("Physical attraction".to_string());
    }
    if mentions_any(INTIMACY.tier("serious")) {
        intentions.push("Looking for relationship".to_string());
    }
    if mentions_any(ATTRACTION.tier("high")) {
        intentions.push("Strong physical interest".to_string());
    }
    intentions
}

/// Threshold rules first, then one entry per offending message; repeats are kept.
pub(crate) fn detect_red_flags(messages: &[ChatMessage], patterns: &ChatPatterns) -> Vec<String> {
    let mut flags = Vec::new();

    if patterns.reply_speed < 0.2 {
        flags.push("Very slow response times".to_string());
    }
    if patterns.message_length < 0.2 {
        flags.push("Consistently short replies".to_string());
    }
    if patterns.attraction_level > 0.8 && patterns.intimacy_progression < 0.2 {
        flags.push("Purely physical interest".to_string());
    }
    if patterns.authenticity < 0.3 {
        flags.push("Likely using copy-pasted messages".to_string());
    }
    if patterns.practicality < 0.2 {
        flags.push("No discussion of real-life compatibility".to_string());
    }

    for message in messages {
        let text = message.text.to_lowercase();
        if text.contains("ex") || text.contains("broke up") {
            flags.push("Frequently mentions ex".to_string());
        }
        if text.contains("busy") && text.contains("sorry") {
            flags.push("Often too busy/apologetic".to_string());
        }
    }

    flags
}

pub(crate) fn detect_green_flags(
    messages: &[ChatMessage],
    patterns: &ChatPatterns,
) -> Vec<String> {
    let mut flags = Vec::new();

    if patterns.reply_speed > 0.7 {
        flags.push("Consistently quick responses".to_string());
    }
    if patterns.question_frequency > 0.6 {
        flags.push("Shows genuine interest".to_string());
    }
    if patterns.attraction_level > 0.6 && patterns.intimacy_progression > 0.4 {
        flags.push("Balanced physical and emotional interest".to_string());
    }
    if patterns.authenticity > 0.8 {
        flags.push("Highly authentic communication".to_string());
    }
    if patterns.practicality > 0.7 {
        flags.push("Discusses real-life compatibility".to_string());
    }

    for message in messages {
        let text = message.text.to_lowercase();
        if text.contains("plan") || text.contains("meet") {
            flags.push("Takes initiative in planning".to_string());
        }
        if text.contains("feel") || text.contains("think") {
            flags.push("Opens up emotionally".to_string());
        }
    }

    flags
}

pub(crate) fn next_moves(patterns: &ChatPatterns) -> Vec<String> {
    let mut moves: Vec<&str> = if patterns.attraction_level > 0.7
        && patterns.intimacy_progression > 0.6
        && patterns.authenticity > 0.7
    {
        vec!["Suggest meeting in person", "Plan a specific date"]
    } else if patterns.attraction_level > 0.5 && patterns.intimacy_progression > 0.3 {
        vec![
            "Build more emotional connection",
            "Share more personal stories",
        ]
    } else {
        vec![
            "Keep conversation light and fun",
            "Ask more engaging questions",
        ]
    };

    if patterns.practicality < 0.5 {
        moves.push("Discuss real-life compatibility");
        moves.push("Share lifestyle preferences");
    }

    moves.into_iter().map(str::to_string).collect()
}

pub(crate) fn recommendations(patterns: &ChatPatterns) -> Vec<String> {
    let mut advice = Vec::new();

    if patterns.attraction_level > 0.7 && patterns.authenticity > 0.7 {
        advice.push("Strong mutual attraction - consider escalating");
        advice.push("Balance physical and emotional connection");
    } else if patterns.attraction_level < 0.3 && patterns.authenticity > 0.7 {
        advice.push("Build more chemistry through flirting");
        advice.push("Show more playful interest");
    }

    if patterns.practicality < 0.4 {
        advice.push("Discuss real-life compatibility factors");
        advice.push("Share more about lifestyle and values");
    }

    if patterns.authenticity < 0.5 {
        advice.push("Be more genuine in responses");
        advice.push("Share unique personal details");
    }

    advice.into_iter().map(str::to_string).collect()
}
