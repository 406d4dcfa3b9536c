//! Hardcoded English stop words.
//!
//! High-frequency function words skipped during keyword matching; they
//! carry no topical signal and would match half the corpus.

use std::collections::HashSet;

/// Returns the fixed English stop-word set.
pub fn english() -> HashSet<&'static str> {
    [
        // articles & determiners
        "the", "a", "an", "this", "that", "these", "those",
        // be-verbs
        "is", "are", "was", "were", "be", "been", "being", "am",
        // auxiliaries
        "have", "has", "had", "do", "does", "did",
        // modals
        "will", "would", "shall", "should", "may", "might", "can", "could", "must",
        // prepositions
        "to", "of", "in", "for", "on", "with", "at", "by", "from", "into", "about",
        // conjunctions & negation
        "and", "or", "but", "not", "no", "if", "then", "than", "so", "as",
        // pronouns
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
        "my", "your", "his", "our", "their", "its",
        // interrogatives
        "who", "what", "which", "when", "where", "how", "why",
        // adverbs & misc high-frequency words
        "very", "also", "just", "too", "more", "most", "some", "any", "all",
        "there", "here", "now", "up", "out", "over",
    ]
    .into_iter()
    .collect()
}
