//! Testing utilities including mock implementations.
//!
//! Useful for testing selection logic without a real embedding
//! provider.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ResponderError, Result};
use crate::traits::Embedder;

/// A mock embedding provider for testing.
///
/// Returns predefined embeddings where configured and a deterministic
/// hash-seeded embedding otherwise. Can be told to fail for specific
/// texts to exercise degradation paths.
#[derive(Default)]
pub struct MockEmbedder {
    /// Predefined embeddings by text
    embeddings: Arc<RwLock<HashMap<String, Vec<f32>>>>,

    /// Texts that should fail to embed
    fail_texts: Arc<RwLock<Vec<String>>>,

    /// Default embedding dimension
    dim: usize,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockEmbedder {
    /// Create a new mock embedder with default behavior.
    pub fn new() -> Self {
        Self {
            dim: 8,
            ..Default::default()
        }
    }

    /// Set the embedding dimension used for generated embeddings.
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Add a predefined embedding for text.
    pub fn with_embedding(self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.embeddings
            .write()
            .unwrap()
            .insert(text.into(), embedding);
        self
    }

    /// Mark a text as failing to embed.
    pub fn fail_on(self, text: impl Into<String>) -> Self {
        self.fail_texts.write().unwrap().push(text.into());
        self
    }

    /// Texts this mock has been asked to embed, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Generate a deterministic embedding based on text.
    fn generate_deterministic_embedding(&self, text: &str) -> Vec<f32> {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let hash = hasher.finalize();

        (0..self.dim)
            .map(|i| {
                let byte = hash[i % 32] as f32;
                // Normalize to [-1, 1] range
                (byte / 127.5) - 1.0
            })
            .collect()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.calls.write().unwrap().push(text.to_string());

        if self.fail_texts.read().unwrap().iter().any(|t| t == text) {
            return Err(ResponderError::Embedding(format!(
                "mock embedding failure for: {text}"
            )));
        }

        Ok(self
            .embeddings
            .read()
            .unwrap()
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.generate_deterministic_embedding(text)))
    }
}
