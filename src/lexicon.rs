use crate::config::LexiconConfig;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

pub const POSITIVE_WORDS: &[&str] = &[
    "love",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "good",
    "best",
    "happy",
    "joy",
    "pleased",
    "satisfied",
    "recommend",
    "perfect",
    "awesome",
    "brilliant",
    "outstanding",
    "superb",
    "delighted",
    "impressive",
    "exceptional",
    "beautiful",
    "helpful",
    "friendly",
    "professional",
    "quality",
    "thank",
    "appreciate",
    "enjoy",
    "favorite",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "horrible",
    "bad",
    "worst",
    "disappointing",
    "poor",
    "angry",
    "frustrated",
    "annoyed",
    "upset",
    "complaint",
    "problem",
    "issue",
    "broken",
    "useless",
    "waste",
    "rude",
    "slow",
    "expensive",
    "overpriced",
    "never",
    "refund",
    "cancel",
    "avoid",
    "regret",
    "unfortunately",
    "failed",
    "error",
    "mistake",
    "wrong",
];

pub const NEUTRAL_WORDS: &[&str] = &[
    "okay",
    "fine",
    "average",
    "normal",
    "standard",
    "typical",
    "regular",
    "basic",
    "adequate",
    "acceptable",
    "moderate",
    "fair",
    "reasonable",
    "ordinary",
    "common",
];

pub const INTENSIFIERS: &[&str] = &[
    "very",
    "extremely",
    "absolutely",
    "really",
    "totally",
    "completely",
    "highly",
];

pub const NEGATIONS: &[&str] = &[
    "not", "never", "don't", "doesn't", "didn't", "won't", "can't", "barely", "hardly",
];

lazy_static! {
    static ref NON_LETTER: Regex = Regex::new(r"[^a-z]").unwrap();
    static ref DEFAULT_LEXICON: Arc<Lexicon> = Arc::new(Lexicon::new());
}

/// Lowercase a token and drop every character outside `a-z`.
pub fn clean_word(token: &str) -> String {
    NON_LETTER
        .replace_all(&token.to_lowercase(), "")
        .into_owned()
}

/// Word lists consulted by the scorer.
///
/// Every entry is stored in the same normalized form the scorer produces with
/// [`clean_word`], so `don't` is held as `dont`. A word may sit in more than one
/// list; the scorer checks negations, then intensifiers, then positive, negative
/// and neutral words, in that order.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    neutral: HashSet<String>,
    intensifiers: HashSet<String>,
    negations: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            positive: normalize(POSITIVE_WORDS.iter().copied()),
            negative: normalize(NEGATIVE_WORDS.iter().copied()),
            neutral: normalize(NEUTRAL_WORDS.iter().copied()),
            intensifiers: normalize(INTENSIFIERS.iter().copied()),
            negations: normalize(NEGATIONS.iter().copied()),
        }
    }

    /// Shared process-wide default lexicon.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    /// Build a lexicon where every list present in `config` replaces the default one.
    pub fn from_config(config: &LexiconConfig) -> Self {
        let mut lexicon = Self::new();

        if let Some(words) = &config.positive {
            lexicon.positive = normalize(words.iter().map(String::as_str));
        }
        if let Some(words) = &config.negative {
            lexicon.negative = normalize(words.iter().map(String::as_str));
        }
        if let Some(words) = &config.neutral {
            lexicon.neutral = normalize(words.iter().map(String::as_str));
        }
        if let Some(words) = &config.intensifiers {
            lexicon.intensifiers = normalize(words.iter().map(String::as_str));
        }
        if let Some(words) = &config.negations {
            lexicon.negations = normalize(words.iter().map(String::as_str));
        }

        log::debug!(
            "Lexicon built: {} positive, {} negative, {} neutral, {} intensifiers, {} negations",
            lexicon.positive.len(),
            lexicon.negative.len(),
            lexicon.neutral.len(),
            lexicon.intensifiers.len(),
            lexicon.negations.len()
        );

        lexicon
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_neutral(&self, word: &str) -> bool {
        self.neutral.contains(word)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }
}

fn normalize<'a>(words: impl Iterator<Item = &'a str>) -> HashSet<String> {
    words
        .map(clean_word)
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_word_strips_non_letters() {
        assert_eq!(clean_word("Product!"), "product");
        assert_eq!(clean_word("don't"), "dont");
        assert_eq!(clean_word("5-star"), "star");
        assert_eq!(clean_word("!!!"), "");
        assert_eq!(clean_word("café"), "caf");
    }

    #[test]
    fn test_default_lists() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_positive("love"));
        assert!(lexicon.is_negative("terrible"));
        assert!(lexicon.is_neutral("okay"));
        assert!(lexicon.is_intensifier("extremely"));
        assert!(lexicon.is_negation("not"));
        assert!(!lexicon.is_positive("product"));
    }

    #[test]
    fn test_contracted_negations_are_normalized() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_negation("dont"));
        assert!(lexicon.is_negation("cant"));
        assert!(lexicon.is_negation(&clean_word("Doesn't")));
    }

    #[test]
    fn test_never_is_both_negation_and_negative() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_negation("never"));
        assert!(lexicon.is_negative("never"));
    }

    #[test]
    fn test_config_replaces_only_given_lists() {
        let config = LexiconConfig {
            positive: Some(vec!["Stellar".to_string()]),
            ..LexiconConfig::default()
        };
        let lexicon = Lexicon::from_config(&config);

        assert!(lexicon.is_positive("stellar"));
        assert!(!lexicon.is_positive("love"));
        assert!(lexicon.is_negative("terrible"));
    }

    #[test]
    fn test_shared_lexicon_is_single_instance() {
        let a = Lexicon::shared();
        let b = Lexicon::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
