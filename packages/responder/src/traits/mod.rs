//! Narrow provider interfaces.
//!
//! The NLP collaborators (embedding, tokenization, sentiment) sit
//! behind small traits so any equivalent provider — model server,
//! local library, deterministic stub — can be substituted without
//! touching the matcher or the selector.

pub mod embed;
pub mod nlp;

pub use embed::Embedder;
pub use nlp::{SentimentAnalyzer, Tokenizer};
