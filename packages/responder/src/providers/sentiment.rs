//! Lexicon-based sentiment analysis.
//!
//! A small positive/negative word-list scorer standing in for a full
//! sentiment model behind the [`SentimentAnalyzer`] boundary.

use std::collections::HashSet;

use crate::traits::{SentimentAnalyzer, Tokenizer};

use super::tokenize::WordTokenizer;

const POSITIVE: &[&str] = &[
    "good", "great", "excellent", "love", "amazing", "wonderful", "happy", "fantastic",
    "awesome", "best", "better", "glad", "well", "fine", "thanks", "thank",
];

const NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "hate", "horrible", "worst", "sad", "angry", "disappointed",
    "poor", "worse", "sick", "tired", "hurt", "pain", "depressed", "anxious", "stressed",
];

/// Word-list polarity scorer.
pub struct LexiconSentiment {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl LexiconSentiment {
    /// Create a scorer with the built-in lexicon.
    pub fn new() -> Self {
        Self {
            positive: POSITIVE.iter().copied().collect(),
            negative: NEGATIVE.iter().copied().collect(),
        }
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconSentiment {
    fn polarity(&self, text: &str) -> f32 {
        let mut positive_hits = 0.0f32;
        let mut negative_hits = 0.0f32;

        for token in WordTokenizer.tokenize(text) {
            if self.positive.contains(token.as_str()) {
                positive_hits += 1.0;
            } else if self.negative.contains(token.as_str()) {
                negative_hits += 1.0;
            }
        }

        let total = positive_hits + negative_hits;
        if total == 0.0 {
            0.0
        } else {
            (positive_hits - negative_hits) / total
        }
    }
}

/// Map a polarity score to the transcript's empathetic prefix.
pub fn empathy_prefix(polarity: f32) -> Option<&'static str> {
    if polarity < 0.0 {
        Some("It seems like you're feeling down. ")
    } else if polarity > 0.0 {
        Some("I'm glad to hear that! ")
    } else {
        None
    }
}
