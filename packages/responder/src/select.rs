//! The response selector - main entry point for the responder library.
//!
//! A [`Responder`] owns the corpus, its precomputed question vectors,
//! and the NLP providers. It is built once at startup and treated as
//! immutable for the process lifetime.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::corpus::Corpus;
use crate::error::Result;
use crate::fallback::find_related;
use crate::providers::stop_words;
use crate::similarity::best_match;
use crate::traits::{Embedder, Tokenizer};

/// Above this similarity the best match is returned verbatim.
pub const HIGH_THRESHOLD: f32 = 0.5;

/// Above this (and at most [`HIGH_THRESHOLD`]) the keyword fallback runs.
pub const LOW_THRESHOLD: f32 = 0.3;

/// Prefix for keyword-fallback replies.
pub const RELATED_PREFIX: &str =
    "I don't have specific information on that, but here is something related: ";

/// Reply when the query resembles nothing in the corpus.
pub const NO_MATCH: &str = "I'm sorry, I don't have information on that right now.";

/// Similarity-based selector over a fixed question/answer corpus.
///
/// # Example
///
/// ```rust,ignore
/// let responder = Responder::new(
///     Corpus::health(),
///     HashedEmbedder::default(),
///     WordTokenizer,
/// ).await?;
///
/// let reply = responder.respond("hello").await;
/// ```
pub struct Responder<E: Embedder, T: Tokenizer> {
    corpus: Corpus,
    question_vectors: Vec<Vec<f32>>,
    embedder: E,
    tokenizer: T,
    stop_words: HashSet<&'static str>,
}

impl<E: Embedder, T: Tokenizer> Responder<E, T> {
    /// Build a responder, embedding every corpus question once.
    ///
    /// An embedding failure here is fatal: the selector cannot operate
    /// without its precomputed vectors.
    pub async fn new(corpus: Corpus, embedder: E, tokenizer: T) -> Result<Self> {
        let questions: Vec<&str> = corpus.questions().collect();
        let question_vectors = embedder.embed_batch(&questions).await?;
        debug_assert_eq!(question_vectors.len(), corpus.len());
        debug!(entries = corpus.len(), "corpus embedded");

        Ok(Self {
            corpus,
            question_vectors,
            embedder,
            tokenizer,
            stop_words: stop_words::english(),
        })
    }

    /// The corpus this responder matches against.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Select a reply for a free-text query.
    ///
    /// A per-query embedding failure (or a provider returning the
    /// wrong dimensionality) degrades to the no-match reply rather
    /// than failing the session; dropping one query has no
    /// consequence for later turns.
    pub async fn respond(&self, query: &str) -> String {
        let query_vector = match self.embedder.embed(query).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "query embedding failed, degrading to no-match");
                return NO_MATCH.to_string();
            }
        };

        let result = match best_match(&query_vector, &self.question_vectors) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "similarity match failed, degrading to no-match");
                return NO_MATCH.to_string();
            }
        };

        debug!(index = result.index, score = result.score, "best match");

        if result.score > HIGH_THRESHOLD {
            self.corpus
                .get(result.index)
                .map(|entry| entry.answer.clone())
                .unwrap_or_else(|| NO_MATCH.to_string())
        } else if result.score > LOW_THRESHOLD {
            format!("{RELATED_PREFIX}{}", self.related_topics(query))
        } else {
            NO_MATCH.to_string()
        }
    }

    /// Keyword fallback: tokenize, drop stop words, scan question keys.
    pub fn related_topics(&self, query: &str) -> String {
        let tokens: Vec<String> = self
            .tokenizer
            .tokenize(&query.to_lowercase())
            .into_iter()
            .filter(|token| !self.stop_words.contains(token.as_str()))
            .collect();

        find_related(&self.corpus, &tokens)
    }
}
