use serde::Serialize;
use std::fmt;

use crate::analyze::article_tokens;
use crate::lexicon::lexicon;

/// Scores strictly above this are positive, strictly below its negation negative.
pub const LABEL_BAND: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    fn from_score(score: f64) -> Self {
        if score > LABEL_BAND {
            SentimentLabel::Positive
        } else if score < -LABEL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// In [-1, 1]; exactly 0.0 when no lexicon word was seen.
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Counts positive vs negative lexicon hits in `title + " " + description`.
    ///
    /// `score = (pos - neg) / (pos + neg)`. A neutral label may carry a nonzero score
    /// anywhere in the closed band [-0.1, 0.1].
    pub fn score(&self, title: &str, description: &str) -> Sentiment {
        let (pos, neg) = count_hits(&article_tokens(title, description));

        let total = pos + neg;
        if total == 0 {
            return Sentiment {
                label: SentimentLabel::Neutral,
                score: 0.0,
            };
        }

        let score = (pos as f64 - neg as f64) / total as f64;
        Sentiment {
            label: SentimentLabel::from_score(score),
            score,
        }
    }
}

/// Returns (positive, negative) hit counts.
fn count_hits(tokens: &[String]) -> (usize, usize) {
    let lx = lexicon();
    tokens.iter().fold((0, 0), |(pos, neg), t| {
        if lx.is_positive(t) {
            (pos + 1, neg)
        } else if lx.is_negative(t) {
            (pos, neg + 1)
        } else {
            (pos, neg)
        }
    })
}

/// Convenience wrapper over a default analyzer.
pub fn score(title: &str, description: &str) -> Sentiment {
    SentimentAnalyzer::new().score(title, description)
}
