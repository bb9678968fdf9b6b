mod common;

use common::{car_documents, car_provider, setup, StubProvider};
use semantic_search::domain::entities::document::Document;
use semantic_search::domain::error::DomainError;
use semantic_search::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use semantic_search::infrastructure::memory::vector_store::InMemoryVectorStore;
use semantic_search::SemanticSearch;
use std::sync::Arc;

#[tokio::test]
async fn test_ingest_stores_text_metadata() {
    let (search, _) = setup(car_provider());
    search.ingest(&car_documents()).await.unwrap();

    let record = search.get("2").unwrap();
    assert_eq!(record.vector, vec![0.6, 0.8, 0.0]);
    assert_eq!(record.text(), Some("car maintenance"));
}

#[tokio::test]
async fn test_failed_embedding_leaves_store_unchanged() {
    let (search, provider) = setup(car_provider().failing_on("car maintenance"));
    let search = search.with_batch_size(1);

    search
        .ingest(&[Document::with_id("0", "car engine")])
        .await
        .unwrap();
    let before = search.size().unwrap();

    let err = search.ingest(&car_documents()).await.unwrap_err();
    assert!(matches!(err, DomainError::Embedding(_)));
    assert_eq!(search.size().unwrap(), before);
    assert!(matches!(search.get("1"), Err(DomainError::NotFound(_))));
    // one call for the seed document, then the 1st and 2nd of the batch
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn test_empty_ingest_is_noop() {
    let (search, provider) = setup(car_provider());
    assert_eq!(search.ingest(&[]).await.unwrap(), 0);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_duplicate_ids_in_batch_last_wins() {
    let (search, _) = setup(car_provider());
    let docs = vec![
        Document::with_id("x", "car engine"),
        Document::with_id("x", "car repair tips"),
    ];
    search.ingest(&docs).await.unwrap();

    assert_eq!(search.size().unwrap(), 1);
    assert_eq!(search.get("x").unwrap().text(), Some("car repair tips"));
}

#[tokio::test]
async fn test_reingest_replaces_without_growing() {
    let (search, _) = setup(car_provider());
    search.ingest(&car_documents()).await.unwrap();
    search
        .ingest(&[Document::with_id("1", "car repair tips")])
        .await
        .unwrap();

    assert_eq!(search.size().unwrap(), 3);
    assert_eq!(search.get("1").unwrap().text(), Some("car repair tips"));
}

#[tokio::test]
async fn test_provider_dimension_mismatch_rejected() {
    let provider = Arc::new(StubProvider::new(2, &[("short", vec![1.0, 0.0])]));
    let store = Arc::new(InMemoryVectorStore::new(3).unwrap());
    let search = SemanticSearch::with_providers(store, provider);

    let err = search.ingest(&[Document::with_id("a", "short")]).await.unwrap_err();
    assert!(matches!(err, DomainError::DimensionMismatch { expected: 3, actual: 2 }));
    assert_eq!(search.size().unwrap(), 0);
}

struct DroppingProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for DroppingProvider {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().skip(1).map(|_| vec![1.0, 0.0]).collect())
    }

    fn dimension(&self) -> usize {
        2
    }

    fn model(&self) -> &str {
        "dropping"
    }
}

#[tokio::test]
async fn test_short_embedding_response_is_embedding_failure() {
    let store = Arc::new(InMemoryVectorStore::new(2).unwrap());
    let search = SemanticSearch::with_providers(store, Arc::new(DroppingProvider));

    let docs = vec![Document::new("a"), Document::new("b")];
    let err = search.ingest(&docs).await.unwrap_err();
    assert!(matches!(err, DomainError::Embedding(_)));
    assert_eq!(search.size().unwrap(), 0);
}
