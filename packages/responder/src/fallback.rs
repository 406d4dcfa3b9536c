//! Keyword fallback for mid-confidence queries.
//!
//! When similarity lands between the two thresholds, the selector
//! falls back to scanning corpus questions for the query's keywords.

use crate::corpus::Corpus;

/// Returned when no filtered token matches any corpus question.
pub const NO_RELATED_INFO: &str = "I don't have additional related information.";

/// Maximum number of related answers joined into the fallback reply.
const MAX_RELATED: usize = 3;

/// Collect answers whose question contains any of the given tokens.
///
/// Tokens are expected to be lowercased and stop-word filtered already.
/// The scan is outer loop over tokens, inner loop over corpus entries,
/// so answers accumulate in token order then corpus order. Duplicates
/// are kept: an answer matched by two tokens appears twice. The first
/// three collected answers are joined by a single space.
pub fn find_related(corpus: &Corpus, tokens: &[String]) -> String {
    let mut related: Vec<&str> = Vec::new();
    for token in tokens {
        for entry in corpus.iter() {
            if entry.question.contains(token.as_str()) {
                related.push(entry.answer.as_str());
            }
        }
    }

    if related.is_empty() {
        NO_RELATED_INFO.to_string()
    } else {
        related[..related.len().min(MAX_RELATED)].join(" ")
    }
}
