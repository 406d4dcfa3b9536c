//! Typed errors for the responder library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while matching and selecting responses.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// Query and corpus vectors disagree on dimensionality.
    ///
    /// Embeddings are produced by a single provider, so this indicates
    /// a misconfigured or misbehaving provider rather than bad input.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Embedding generation failed
    #[error("embedding error: {0}")]
    Embedding(String),

    /// The corpus has no entries to match against
    #[error("corpus is empty")]
    EmptyCorpus,
}

/// Result type alias for responder operations.
pub type Result<T> = std::result::Result<T, ResponderError>;
