//! Compiled-in vocabularies for profile motivators and chat signals.
//!
//! Profile motivators and chat signal tables are independent namespaces: a category name only has
//! to be unique within its own table.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Which analyzer a vocabulary belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconDomain {
    Profile,
    Chat,
}

/// Coefficients blending vocabulary coverage with pattern-memory feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningWeight {
    pub base: f64,
    pub trend: f64,
}

impl LearningWeight {
    pub const STANDARD: Self = Self {
        base: 0.3,
        trend: 0.1,
    };
}

/// A named category with the vocabulary and canned text used to describe a match.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub category: Cow<'static, str>,
    pub keywords: &'static [&'static str],
    pub learning_weight: LearningWeight,
    pub traits: &'static [&'static str],
    pub positive_phrases: &'static [&'static str],
    pub interpretations: &'static [&'static str],
}

/// One weighted level of a chat signal table (e.g. attraction/high).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTier {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Tiered keyword list consumed by the chat analyzer. Tier order is significant: several metrics
/// weight hits by tier position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTable {
    pub name: &'static str,
    pub tiers: &'static [SignalTier],
}

impl SignalTable {
    pub fn tier(&self, name: &str) -> &'static [&'static str] {
        self.tiers
            .iter()
            .find(|tier| tier.name == name)
            .map(|tier| tier.keywords)
            .unwrap_or(&[])
    }
}

pub static MOTIVATORS: [LexiconEntry; 3] = [
    LexiconEntry {
        category: Cow::Borrowed("career"),
        keywords: &[
            "ambitious",
            "career",
            "professional",
            "entrepreneur",
            "business",
            "success",
            "goals",
        ],
        learning_weight: LearningWeight {
            base: 0.4,
            trend: 0.1,
        },
        traits: &["driven", "focused", "accomplished", "motivated"],
        positive_phrases: &[
            "clear goals",
            "ambition",
            "success-oriented",
            "professional growth",
        ],
        interpretations: &[
            "values achievement",
            "career-focused",
            "professionally motivated",
        ],
    },
    LexiconEntry {
        category: Cow::Borrowed("intimacy"),
        keywords: &[
            "connection",
            "chemistry",
            "passion",
            "intimate",
            "romantic",
            "sensual",
            "physical",
        ],
        learning_weight: LearningWeight::STANDARD,
        traits: &["passionate", "affectionate", "romantic", "sensual"],
        positive_phrases: &[
            "values connection",
            "emotionally available",
            "romantically expressive",
        ],
        interpretations: &[
            "seeks genuine connection",
            "values chemistry",
            "emotionally open",
        ],
    },
    LexiconEntry {
        category: Cow::Borrowed("lifestyle"),
        keywords: &[
            "luxury",
            "travel",
            "fine dining",
            "experiences",
            "adventure",
            "quality",
        ],
        learning_weight: LearningWeight::STANDARD,
        traits: &["sophisticated", "cultured", "refined", "worldly"],
        positive_phrases: &[
            "appreciates quality",
            "values experiences",
            "refined taste",
        ],
        interpretations: &[
            "lifestyle-conscious",
            "experience-focused",
            "quality-oriented",
        ],
    },
];

pub static AI_INTEREST: SignalTable = SignalTable {
    name: "ai_interest",
    tiers: &[
        SignalTier {
            name: "technical",
            keywords: &[
                "ai",
                "machine learning",
                "neural networks",
                "data science",
                "programming",
                "tech",
            ],
        },
        SignalTier {
            name: "creative",
            keywords: &[
                "generative ai",
                "stable diffusion",
                "midjourney",
                "dall-e",
                "creative coding",
            ],
        },
        SignalTier {
            name: "philosophical",
            keywords: &[
                "consciousness",
                "singularity",
                "ethics",
                "future of ai",
                "artificial intelligence",
            ],
        },
        SignalTier {
            name: "practical",
            keywords: &[
                "chatgpt",
                "github copilot",
                "automation",
                "productivity tools",
                "ai apps",
            ],
        },
    ],
};

pub static TECH_AUTHENTICITY: SignalTable = SignalTable {
    name: "tech_authenticity",
    tiers: &[
        SignalTier {
            name: "genuine",
            keywords: &[
                "specific tools",
                "personal projects",
                "technical details",
                "real experience",
            ],
        },
        SignalTier {
            name: "suspicious",
            keywords: &[
                "buzzwords only",
                "vague tech terms",
                "name dropping",
                "superficial knowledge",
            ],
        },
    ],
};

pub static INTELLECTUAL: SignalTable = SignalTable {
    name: "intellectual",
    tiers: &[
        SignalTier {
            name: "high",
            keywords: &[
                "research",
                "papers",
                "theory",
                "concepts",
                "innovation",
                "experiments",
            ],
        },
        SignalTier {
            name: "medium",
            keywords: &[
                "interested in learning",
                "following developments",
                "reading about",
            ],
        },
        SignalTier {
            name: "low",
            keywords: &["heard about", "saw on news", "trending topic"],
        },
    ],
};

pub static INTIMACY: SignalTable = SignalTable {
    name: "intimacy",
    tiers: &[
        SignalTier {
            name: "casual",
            keywords: &["hang", "meet", "coffee", "drinks", "fun"],
        },
        SignalTier {
            name: "romantic",
            keywords: &["date", "dinner", "weekend", "special", "together"],
        },
        SignalTier {
            name: "physical",
            keywords: &["hot", "sexy", "attractive", "chemistry", "connection"],
        },
        SignalTier {
            name: "serious",
            keywords: &[
                "relationship",
                "future",
                "commitment",
                "exclusive",
                "partner",
            ],
        },
    ],
};

pub static ATTRACTION: SignalTable = SignalTable {
    name: "attraction",
    tiers: &[
        SignalTier {
            name: "high",
            keywords: &[
                "😘", "😍", "🔥", "hot", "sexy", "beautiful", "gorgeous", "stunning",
            ],
        },
        SignalTier {
            name: "medium",
            keywords: &["cute", "pretty", "handsome", "attractive", "😊", "😉"],
        },
        SignalTier {
            name: "low",
            keywords: &["nice", "cool", "good", "okay", "👍"],
        },
    ],
};

pub static INTEREST: SignalTable = SignalTable {
    name: "interest",
    tiers: &[
        SignalTier {
            name: "high",
            keywords: &["when", "where", "what", "?", "tell me more", "interesting"],
        },
        SignalTier {
            name: "medium",
            keywords: &["cool", "nice", "good", "haha", "lol"],
        },
        SignalTier {
            name: "low",
            keywords: &["ok", "yeah", "sure", "maybe", "idk"],
        },
    ],
};

pub static AUTHENTICITY: SignalTable = SignalTable {
    name: "authenticity",
    tiers: &[
        SignalTier {
            name: "genuine",
            keywords: &["specific", "personal", "unique", "detailed"],
        },
        SignalTier {
            name: "suspicious",
            keywords: &["generic", "vague", "copy", "paste", "everyone"],
        },
    ],
};

pub static PRACTICALITY: SignalTable = SignalTable {
    name: "practicality",
    tiers: &[
        SignalTier {
            name: "lifestyle",
            keywords: &["work", "live", "schedule", "time", "location"],
        },
        SignalTier {
            name: "values",
            keywords: &["family", "goals", "future", "beliefs", "important"],
        },
        SignalTier {
            name: "dealbreakers",
            keywords: &["must", "cannot", "won't", "never", "always"],
        },
    ],
};

pub static SOCIAL_CLIMBING: SignalTable = SignalTable {
    name: "social_climbing",
    tiers: &[
        SignalTier {
            name: "status",
            keywords: &[
                "rich",
                "wealthy",
                "successful",
                "luxury",
                "expensive",
                "exclusive",
            ],
        },
        SignalTier {
            name: "probing",
            keywords: &[
                "what do you do",
                "where do you work",
                "what area",
                "salary",
                "income",
            ],
        },
        SignalTier {
            name: "name_dropping",
            keywords: &["know anyone", "connected", "influential", "elite", "vip"],
        },
        SignalTier {
            name: "lifestyle",
            keywords: &["yacht", "private jet", "mansion", "penthouse", "hamptons"],
        },
    ],
};

pub static CONTEXT_CHECK: SignalTable = SignalTable {
    name: "context_check",
    tiers: &[
        SignalTier {
            name: "physical",
            keywords: &[
                "what are you wearing",
                "send pic",
                "photo",
                "selfie",
                "look like",
            ],
        },
        SignalTier {
            name: "quick_meet",
            keywords: &["tonight", "right now", "come over", "address", "location"],
        },
        SignalTier {
            name: "ghosting_signs",
            keywords: &["busy", "maybe later", "we'll see", "not sure when"],
        },
    ],
};

pub static CHAT_SIGNAL_TABLES: [&SignalTable; 10] = [
    &AI_INTEREST,
    &TECH_AUTHENTICITY,
    &INTELLECTUAL,
    &INTIMACY,
    &ATTRACTION,
    &INTEREST,
    &AUTHENTICITY,
    &PRACTICALITY,
    &SOCIAL_CLIMBING,
    &CONTEXT_CHECK,
];

/// Read-only lookup of every category for a domain, in declaration order.
///
/// Chat tiers are surfaced as `table.tier` entries that carry keywords only.
pub fn categories_for(domain: LexiconDomain) -> Vec<LexiconEntry> {
    match domain {
        LexiconDomain::Profile => MOTIVATORS.to_vec(),
        LexiconDomain::Chat => CHAT_SIGNAL_TABLES
            .iter()
            .flat_map(|table| {
                table.tiers.iter().map(move |tier| LexiconEntry {
                    category: Cow::Owned(format!("{}.{}", table.name, tier.name)),
                    keywords: tier.keywords,
                    learning_weight: LearningWeight::STANDARD,
                    traits: &[],
                    positive_phrases: &[],
                    interpretations: &[],
                })
            })
            .collect(),
    }
}
