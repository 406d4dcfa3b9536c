//! End-to-end selector tests with mock embeddings.
//!
//! The mock vectors are picked so cosine scores come out as exact f32
//! values (norms of 1, 2, or 10), letting the threshold boundaries be
//! tested without tolerance fudging.

use responder::testing::MockEmbedder;
use responder::{
    Corpus, CorpusEntry, HashedEmbedder, Responder, WordTokenizer, NO_MATCH, NO_RELATED_INFO,
    RELATED_PREFIX,
};

fn small_corpus() -> Corpus {
    Corpus::new(vec![
        CorpusEntry::new("hello", "Hello! How can I assist you with your health today?"),
        CorpusEntry::new(
            "sleep benefits",
            "Adequate sleep is crucial for physical and mental health.",
        ),
        CorpusEntry::new("hydration", "Drink plenty of water."),
    ])
}

/// Mock with a unit basis vector per corpus question.
fn corpus_mock() -> MockEmbedder {
    MockEmbedder::new()
        .with_dim(4)
        .with_embedding("hello", vec![1.0, 0.0, 0.0, 0.0])
        .with_embedding("sleep benefits", vec![0.0, 1.0, 0.0, 0.0])
        .with_embedding("hydration", vec![0.0, 0.0, 1.0, 0.0])
}

#[tokio::test]
async fn identical_embedding_returns_exact_answer() {
    let embedder = corpus_mock().with_embedding("hello", vec![1.0, 0.0, 0.0, 0.0]);
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    let reply = responder.respond("hello").await;
    assert_eq!(reply, "Hello! How can I assist you with your health today?");
}

#[tokio::test]
async fn score_exactly_high_threshold_takes_related_branch() {
    // [1,1,1,1]·[1,0,0,0] / (2·1) == 0.5 exactly.
    let embedder = corpus_mock().with_embedding("what about rest", vec![1.0, 1.0, 1.0, 1.0]);
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    let reply = responder.respond("what about rest").await;
    assert!(reply.starts_with(RELATED_PREFIX));
}

#[tokio::test]
async fn score_exactly_low_threshold_takes_no_match_branch() {
    // [3,3,1,9]·[1,0,0,0] / (10·1) == 0.3 exactly, and no corpus
    // vector scores higher.
    let embedder = corpus_mock().with_embedding("vague query", vec![3.0, 3.0, 1.0, 9.0]);
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    assert_eq!(responder.respond("vague query").await, NO_MATCH);
}

#[tokio::test]
async fn mid_band_query_gets_related_answers() {
    // Best score is 0.4 (against "hello"); the fallback then matches
    // on the "sleep" keyword.
    let embedder = corpus_mock().with_embedding("what about sleep", vec![4.0, 2.0, 4.0, 8.0]);
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    let reply = responder.respond("what about sleep").await;
    assert!(reply.starts_with(RELATED_PREFIX));
    assert!(reply.contains("Adequate sleep is crucial"));
}

#[tokio::test]
async fn mid_band_query_without_keywords_gets_default_fallback() {
    let embedder = corpus_mock().with_embedding("zzz unrelated", vec![4.0, 2.0, 4.0, 8.0]);
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    let reply = responder.respond("zzz unrelated").await;
    assert_eq!(reply, format!("{RELATED_PREFIX}{NO_RELATED_INFO}"));
}

#[tokio::test]
async fn unrelated_query_gets_no_match() {
    let embedder = corpus_mock().with_embedding("xyzzy quux", vec![0.0, 0.0, 0.0, 1.0]);
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    assert_eq!(responder.respond("xyzzy quux").await, NO_MATCH);
}

#[tokio::test]
async fn respond_is_idempotent() {
    let embedder = corpus_mock().with_embedding("what about sleep", vec![4.0, 2.0, 4.0, 8.0]);
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    let first = responder.respond("what about sleep").await;
    let second = responder.respond("what about sleep").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn query_embedding_failure_degrades_to_no_match() {
    let embedder = corpus_mock().fail_on("boom");
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    assert_eq!(responder.respond("boom").await, NO_MATCH);
}

#[tokio::test]
async fn query_dimension_mismatch_degrades_to_no_match() {
    let embedder = corpus_mock().with_embedding("odd one", vec![1.0, 0.0]);
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();

    assert_eq!(responder.respond("odd one").await, NO_MATCH);
}

#[tokio::test]
async fn corpus_embedding_failure_is_fatal_at_startup() {
    let embedder = corpus_mock().fail_on("sleep benefits");
    let result = Responder::new(small_corpus(), embedder, WordTokenizer).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn startup_embeds_every_question_once() {
    let embedder = corpus_mock();
    let responder = Responder::new(small_corpus(), embedder, WordTokenizer)
        .await
        .unwrap();
    assert_eq!(responder.corpus().len(), 3);
}

#[tokio::test]
async fn health_corpus_with_local_embedder_answers_greeting() {
    let responder = Responder::new(Corpus::health(), HashedEmbedder::default(), WordTokenizer)
        .await
        .unwrap();

    let reply = responder.respond("hello").await;
    assert_eq!(reply, "Hello! How can I assist you with your health today?");
}

#[tokio::test]
async fn health_corpus_with_local_embedder_relates_sleep_query() {
    let responder = Responder::new(Corpus::health(), HashedEmbedder::default(), WordTokenizer)
        .await
        .unwrap();

    // Shares one of three tokens with "sleep benefits": similarity
    // lands between the thresholds, and the fallback picks up "sleep".
    let reply = responder.respond("what about sleep").await;
    assert!(reply.starts_with(RELATED_PREFIX));
    assert!(reply.contains("sleep"));
}

#[tokio::test]
async fn health_corpus_with_local_embedder_rejects_nonsense() {
    let responder = Responder::new(Corpus::health(), HashedEmbedder::default(), WordTokenizer)
        .await
        .unwrap();

    assert_eq!(responder.respond("xyzzy quux").await, NO_MATCH);
}
