use crate::domain::entities::query_match::QueryMatch;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::similarity_index::SimilarityIndex;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::metric::Metric;
use std::sync::Arc;
use tracing::info;

pub struct SearchUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
    index: Arc<dyn SimilarityIndex>,
}

impl SearchUseCase {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStore>,
        index: Arc<dyn SimilarityIndex>,
    ) -> Self {
        Self { embedder, vector_store, index }
    }

    pub async fn search(&self, query: &str, top_k: usize, metric: Metric) -> Result<Vec<QueryMatch>, DomainError> {
        let vectors = self.embedder.embed(&[query.to_string()], InputType::Query).await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Embedding("Provider returned no vector for query".into()))?;
        let matches = self.search_vector(&vector, top_k, metric)?;
        info!(%metric, top_k, hits = matches.len(), "search complete");
        Ok(matches)
    }

    pub fn search_vector(&self, vector: &[f32], top_k: usize, metric: Metric) -> Result<Vec<QueryMatch>, DomainError> {
        self.index.query(self.vector_store.as_ref(), vector, top_k, metric)
    }
}
