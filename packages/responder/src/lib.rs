//! Similarity-Based Canned Response Selection
//!
//! A small library that answers free-text questions from a fixed
//! question/answer corpus: the corpus questions are embedded once at
//! startup, each query is embedded and compared by cosine similarity,
//! and a two-tier threshold policy picks between the exact answer, a
//! keyword-based "related topics" reply, and a no-match reply.
//!
//! # Usage
//!
//! ```rust,ignore
//! use responder::{Corpus, HashedEmbedder, Responder, WordTokenizer};
//!
//! let responder = Responder::new(
//!     Corpus::health(),
//!     HashedEmbedder::default(),
//!     WordTokenizer,
//! ).await?;
//!
//! let reply = responder.respond("hello").await;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Provider boundaries (Embedder, Tokenizer, SentimentAnalyzer)
//! - [`corpus`] - The fixed question/answer table
//! - [`similarity`] - Cosine similarity and best-match selection
//! - [`select`] - The threshold-based response selector
//! - [`fallback`] - Keyword fallback for mid-confidence queries
//! - [`providers`] - Local reference providers
//! - [`testing`] - Mock implementations for testing

pub mod corpus;
pub mod error;
pub mod fallback;
pub mod providers;
pub mod select;
pub mod similarity;
pub mod testing;
pub mod traits;

// Re-export core types at crate root
pub use corpus::{Corpus, CorpusEntry};
pub use error::{ResponderError, Result};
pub use fallback::NO_RELATED_INFO;
pub use providers::{empathy_prefix, HashedEmbedder, LexiconSentiment, WordTokenizer};
pub use select::{Responder, HIGH_THRESHOLD, LOW_THRESHOLD, NO_MATCH, RELATED_PREFIX};
pub use similarity::{best_match, cosine_similarity, MatchResult};
pub use traits::{Embedder, SentimentAnalyzer, Tokenizer};
