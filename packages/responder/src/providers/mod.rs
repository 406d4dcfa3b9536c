//! Reference local providers.
//!
//! These make the selector usable without any external model: a
//! deterministic feature-hashed embedder, a word tokenizer, the
//! English stop-word set, and a lexicon sentiment analyzer. Each
//! implements the corresponding trait in [`crate::traits`] and can be
//! swapped for a real model-backed provider.

pub mod hashed;
pub mod sentiment;
pub mod stop_words;
pub mod tokenize;

pub use hashed::HashedEmbedder;
pub use sentiment::{empathy_prefix, LexiconSentiment};
pub use tokenize::WordTokenizer;
