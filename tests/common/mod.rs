//! Shared test helpers.

#![allow(dead_code)]

use semantic_search::domain::entities::document::Document;
use semantic_search::domain::error::DomainError;
use semantic_search::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use semantic_search::infrastructure::memory::vector_store::InMemoryVectorStore;
use semantic_search::SemanticSearch;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Maps known texts to fixed vectors. Unknown texts, or texts listed in
/// `failing`, make `embed` fail.
pub struct StubProvider {
    vectors: HashMap<String, Vec<f32>>,
    failing: HashSet<String>,
    dimension: usize,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(dimension: usize, pairs: &[(&str, Vec<f32>)]) -> Self {
        Self {
            vectors: pairs.iter().map(|(t, v)| (t.to_string(), v.clone())).collect(),
            failing: HashSet::new(),
            dimension,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed(&self, texts: &[String], _input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        texts
            .iter()
            .map(|t| {
                if self.failing.contains(t) {
                    return Err(DomainError::Embedding(format!("rate limited on '{t}'")));
                }
                self.vectors
                    .get(t)
                    .cloned()
                    .ok_or_else(|| DomainError::Embedding(format!("no stub vector for '{t}'")))
            })
            .collect()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model(&self) -> &str {
        "stub"
    }
}

/// Stub vectors for the car scenario. Cosine against "repair a car" ranks
/// "3" (≈0.987) above "2" (≈0.820) above "1" (≈0.095).
pub fn car_provider() -> StubProvider {
    StubProvider::new(
        3,
        &[
            ("car engine", vec![1.0, 0.0, 0.0]),
            ("car maintenance", vec![0.6, 0.8, 0.0]),
            ("car repair tips", vec![0.2, 0.9, 0.4]),
            ("repair a car", vec![0.1, 1.0, 0.3]),
        ],
    )
}

pub fn car_documents() -> Vec<Document> {
    vec![
        Document::with_id("1", "car engine"),
        Document::with_id("2", "car maintenance"),
        Document::with_id("3", "car repair tips"),
    ]
}

pub fn setup(provider: StubProvider) -> (SemanticSearch, Arc<StubProvider>) {
    let provider = Arc::new(provider);
    let store = Arc::new(InMemoryVectorStore::new(provider.dimension()).unwrap());
    (SemanticSearch::with_providers(store, provider.clone()), provider)
}
