//! Tokenization and sentiment boundaries.

/// Splits text into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize text into a sequence of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Scores the polarity of text.
pub trait SentimentAnalyzer: Send + Sync {
    /// Signed polarity in [-1.0, 1.0]; 0.0 means neutral.
    fn polarity(&self, text: &str) -> f32;
}
