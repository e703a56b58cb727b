//! Chat-log scoring: raw lexical metrics, composite insight scores, and rule-driven advice.
//!
//! Everything here is a pure function of the message list; only the analysis id is random.

mod insights;
mod metrics;

pub use metrics::normalize;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// One chat line as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    /// Seconds taken to send this reply.
    #[serde(default, alias = "replyTime", skip_serializing_if = "Option::is_none")]
    pub reply_time: Option<f64>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: None,
            timestamp: None,
            reply_time: None,
        }
    }

    pub fn with_reply_time(mut self, seconds: f64) -> Self {
        self.reply_time = Some(seconds);
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }
}

/// Normalized metrics, each on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatPatterns {
    pub reply_speed: f64,
    pub message_length: f64,
    pub question_frequency: f64,
    pub emoji_usage: f64,
    pub intimacy_progression: f64,
    pub attraction_level: f64,
    pub authenticity: f64,
    pub practicality: f64,
    pub social_climbing: f64,
    pub context_checking: f64,
    pub ai_interest: f64,
    pub intellectual_depth: f64,
    pub tech_authenticity: f64,
}

impl ChatPatterns {
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("reply_speed", self.reply_speed),
            ("message_length", self.message_length),
            ("question_frequency", self.question_frequency),
            ("emoji_usage", self.emoji_usage),
            ("intimacy_progression", self.intimacy_progression),
            ("attraction_level", self.attraction_level),
            ("authenticity", self.authenticity),
            ("practicality", self.practicality),
            ("social_climbing", self.social_climbing),
            ("context_checking", self.context_checking),
            ("ai_interest", self.ai_interest),
            ("intellectual_depth", self.intellectual_depth),
            ("tech_authenticity", self.tech_authenticity),
        ])
    }
}

/// Composite scores and narrative lists. `interest` is on `[0, 1]`; the other scores on
/// `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatInsights {
    pub interest: f64,
    pub engagement: f64,
    pub chemistry: f64,
    pub intentions: Vec<String>,
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    pub next_moves: Vec<String>,
    pub relationship_potential: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnalysis {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    pub insights: ChatInsights,
    pub patterns: ChatPatterns,
    pub recommendations: Vec<String>,
}

pub fn analyze(messages: &[ChatMessage]) -> ChatAnalysis {
    let patterns = metrics::compute_patterns(messages);
    let insights = insights::derive_insights(messages, &patterns);
    let recommendations = insights::recommendations(&patterns);

    debug!(
        messages = messages.len(),
        red_flags = insights.red_flags.len(),
        green_flags = insights.green_flags.len(),
        "chat analyzed"
    );

    ChatAnalysis {
        id: Uuid::new_v4().to_string(),
        messages: messages.to_vec(),
        insights,
        patterns,
        recommendations,
    }
}
