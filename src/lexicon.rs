//! Static word lists shared by the sentiment scorer and the keyword extractor.
//!
//! The lists live in `lexicon.json` at the crate root and are embedded at compile
//! time, then parsed once into read-only sets on first use.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct LexiconFile {
    positive: Vec<String>,
    negative: Vec<String>,
    stop_words: Vec<String>,
}

/// Read-only word sets. All entries are lower-case single tokens.
#[derive(Debug)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    stop_words: HashSet<String>,
}

static LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../lexicon.json");
    let file: LexiconFile = serde_json::from_str(raw).expect("valid lexicon.json");
    Lexicon::from_lists(file.positive, file.negative, file.stop_words)
});

/// Process-wide lexicon.
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

impl Lexicon {
    fn from_lists(positive: Vec<String>, negative: Vec<String>, stop_words: Vec<String>) -> Self {
        fn set(words: Vec<String>) -> HashSet<String> {
            words.into_iter().map(|w| w.trim().to_lowercase()).collect()
        }
        Self {
            positive: set(positive),
            negative: set(negative),
            stop_words: set(stop_words),
        }
    }

    #[inline]
    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    #[inline]
    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    #[inline]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}
