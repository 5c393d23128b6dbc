// src/analyze/keywords.rs
//! Frequency-ranked keyword extraction.
//!
//! Only tokens of at least 4 bytes that are not stop words are counted. Distinct tokens
//! are ranked by descending count; ties keep first-occurrence order (stable sort over
//! insertion order), so the output is deterministic for a given text.

use std::collections::HashMap;

use crate::analyze::article_tokens;
use crate::lexicon::lexicon;

pub const MAX_KEYWORDS: usize = 5;
const MIN_KEYWORD_LEN: usize = 4;

pub fn extract_keywords(title: &str, description: &str) -> Vec<String> {
    let lx = lexicon();

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for tok in article_tokens(title, description) {
        if tok.len() < MIN_KEYWORD_LEN || lx.is_stop_word(&tok) {
            continue;
        }
        match index.get(&tok) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(tok.clone(), counts.len());
                counts.push((tok, 1));
            }
        }
    }

    // `sort_by` is stable: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}
