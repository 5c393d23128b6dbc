// src/analyze/mod.rs
//! Per-article text analysis: tokenizer, fingerprint, keyword extraction and themes.
//!
//! Everything here is a pure function of article text. The sentiment scorer lives in
//! `crate::sentiment` and shares the tokenizer below.

pub mod fingerprint;
pub mod keywords;
pub mod themes;

pub use crate::analyze::fingerprint::fingerprint;
pub use crate::analyze::keywords::{extract_keywords, MAX_KEYWORDS};
pub use crate::analyze::themes::{assign_theme, reflection_for, Theme, THEMES};

/// Characters stripped from both ends of every token.
pub const TRIM_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Join title and description with a single space and lower-case the result.
pub fn combined_text(title: &str, description: &str) -> String {
    let mut out = String::with_capacity(title.len() + description.len() + 1);
    out.push_str(title);
    out.push(' ');
    out.push_str(description);
    lowercase(&out)
}

/// Per-character lower-casing with no word-final context, so `Σ` is always `σ`.
fn lowercase(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Split already lower-cased text on whitespace runs, trim surrounding punctuation per
/// token.
///
/// Tokens that trim down to nothing are yielded as empty strings; consumers drop them
/// through their own membership/length checks.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| w.trim_matches(TRIM_CHARS).to_string())
}

/// Tokens of `title + " " + description`.
pub fn article_tokens(title: &str, description: &str) -> Vec<String> {
    let text = combined_text(title, description);
    tokenize(&text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_trims_punctuation() {
        let toks: Vec<String> = tokenize("  hello, (world)!  \"inner\" peace...").collect();
        assert_eq!(toks, vec!["hello", "world", "inner", "peace"]);
    }

    #[test]
    fn article_tokens_lowercase_once() {
        assert_eq!(
            article_tokens("Hello, (World)!", "\"Inner\" PEACE..."),
            vec!["hello", "world", "inner", "peace"]
        );
    }

    #[test]
    fn sigma_lowercases_without_word_final_form() {
        assert_eq!(combined_text("ΟΔΟΣ", "ΟΔΟΣ."), "οδοσ οδοσ.");
        assert_eq!(article_tokens("ΟΔΟΣ", ""), vec!["οδοσ"]);
    }

    #[test]
    fn inner_punctuation_is_kept() {
        let toks: Vec<String> = tokenize("self-confidence isn't well-being").collect();
        assert_eq!(toks, vec!["self-confidence", "isn't", "well-being"]);
    }

    #[test]
    fn punctuation_only_tokens_become_empty() {
        let toks: Vec<String> = tokenize("calm -- ... breath").collect();
        assert_eq!(toks, vec!["calm", "--", "", "breath"]);
    }

    #[test]
    fn combined_text_joins_with_single_space() {
        assert_eq!(combined_text("Mindful", "Living"), "mindful living");
        assert_eq!(combined_text("Title", ""), "title ");
        assert_eq!(article_tokens("Title", ""), vec!["title"]);
    }
}
