// src/analyze/themes.rs
//! Theme catalog and per-headline reflection lines.

use serde::Serialize;

use crate::sentiment::SentimentLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    #[serde(skip)]
    pub keywords: &'static [&'static str],
}

pub const GENERAL: Theme = Theme {
    name: "General",
    description: "General news",
    color: "#6366f1",
    keywords: &[],
};

/// Matching order matters: the first theme whose list contains a headline keyword wins.
pub const THEMES: &[Theme] = &[
    Theme {
        name: "Technology",
        description: "Tech news and innovations",
        color: "#3b82f6",
        keywords: &["tech", "technology", "digital", "software", "ai", "artificial", "computer"],
    },
    Theme {
        name: "Politics",
        description: "Political developments",
        color: "#ef4444",
        keywords: &["politics", "political", "government", "election", "policy", "senate", "congress"],
    },
    Theme {
        name: "Business",
        description: "Business and economy",
        color: "#10b981",
        keywords: &["business", "economy", "market", "trade", "financial", "stock", "company"],
    },
    Theme {
        name: "Health",
        description: "Health and wellness",
        color: "#f59e0b",
        keywords: &["health", "medical", "doctor", "hospital", "disease", "treatment", "medicine"],
    },
    Theme {
        name: "Science",
        description: "Scientific discoveries",
        color: "#8b5cf6",
        keywords: &["science", "research", "study", "scientific", "discovery", "experiment"],
    },
    Theme {
        name: "Environment",
        description: "Climate and environment",
        color: "#06b6d4",
        keywords: &[
            "climate", "environment", "green", "carbon", "renewable", "energy", "sustainability",
        ],
    },
    Theme {
        name: "Mindfulness",
        description: "Mindfulness, meditation, and mental wellness",
        color: "#A78BFA",
        keywords: &[
            "mindfulness", "meditation", "mental health", "wellness", "mindful", "meditate",
            "mental", "wellbeing", "well-being", "self-care", "awareness", "presence", "calm",
            "peace", "zen", "yoga", "therapy", "counseling", "psychology",
        ],
    },
    GENERAL,
];

/// First catalog theme matching any of `keywords` (case-insensitive), else "General".
pub fn assign_theme(keywords: &[String]) -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| {
            keywords.iter().any(|kw| {
                let kw = kw.to_lowercase();
                theme.keywords.iter().any(|t| *t == kw)
            })
        })
        .unwrap_or(&THEMES[THEMES.len() - 1])
}

const POSITIVE_REFLECTIONS: [&str; 3] = [
    "A moment of progress in our shared journey.",
    "A reminder that positive change is possible.",
    "Something to appreciate in today's news.",
];

const NEGATIVE_REFLECTIONS: [&str; 3] = [
    "A complex situation that deserves thoughtful consideration.",
    "A challenge that calls for understanding and care.",
    "An opportunity to reflect on how we respond to difficulty.",
];

const NEUTRAL_REFLECTIONS: [&str; 3] = [
    "An update worth noting, without urgency.",
    "Information to consider at your own pace.",
    "A piece of the larger picture, calmly presented.",
];

/// Pick a reflection for the label. The choice is keyed on the fingerprint's first byte,
/// so a headline always gets the same line.
pub fn reflection_for(label: SentimentLabel, fingerprint: &str) -> &'static str {
    let options = match label {
        SentimentLabel::Positive => &POSITIVE_REFLECTIONS,
        SentimentLabel::Negative => &NEGATIVE_REFLECTIONS,
        SentimentLabel::Neutral => &NEUTRAL_REFLECTIONS,
    };
    let first_byte = fingerprint
        .get(..2)
        .and_then(|h| u8::from_str_radix(h, 16).ok())
        .unwrap_or(0);
    options[usize::from(first_byte) % options.len()]
}
