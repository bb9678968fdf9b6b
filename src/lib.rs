pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::ingest::IngestUseCase;
use crate::application::records::RecordsUseCase;
use crate::application::search::SearchUseCase;
use crate::config::{Config, ProviderKind};
use crate::domain::entities::document::Document;
use crate::domain::entities::query_match::QueryMatch;
use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::similarity_index::SimilarityIndex;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::metric::Metric;
use crate::infrastructure::embeddings::hashing::{HashingProvider, DEFAULT_DIMENSION};
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::index::flat::FlatIndex;
use crate::infrastructure::memory::vector_store::InMemoryVectorStore;
use crate::infrastructure::sqlite::vector_store::SqliteVectorStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct SemanticSearch {
    ingest_uc: IngestUseCase,
    search_uc: SearchUseCase,
    records_uc: RecordsUseCase,
    metric: Metric,
}

impl SemanticSearch {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let embedder: Arc<dyn EmbeddingProvider> = match config.provider {
            ProviderKind::OpenAi => {
                if config.api_key.is_empty() {
                    return Err(DomainError::Config("OpenAI provider needs an API key".into()));
                }
                Arc::new(OpenAiProvider::new(
                    config.api_key.clone(),
                    config.model.clone(),
                    config.base_url.clone(),
                ))
            }
            ProviderKind::Hashing => Arc::new(HashingProvider::new(config.dimension.unwrap_or(DEFAULT_DIMENSION))?),
        };

        let dimension = config.dimension.unwrap_or_else(|| embedder.dimension());
        info!(
            provider = %config.provider,
            model = embedder.model(),
            dimension,
            persistent = config.db_path.is_some(),
            "search pipeline configured"
        );
        let vector_store: Arc<dyn VectorStore> = match &config.db_path {
            Some(path) => Arc::new(SqliteVectorStore::open_path(path, dimension)?),
            None => Arc::new(InMemoryVectorStore::new(dimension)?),
        };

        Ok(Self::with_providers(vector_store, embedder)
            .with_metric(config.metric)
            .with_batch_size(config.batch_size))
    }

    pub fn with_providers(vector_store: Arc<dyn VectorStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_index(vector_store, embedder, Arc::new(FlatIndex::new()))
    }

    pub fn with_index(
        vector_store: Arc<dyn VectorStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn SimilarityIndex>,
    ) -> Self {
        let provider_dim = embedder.dimension();
        let stored_dim = vector_store.dimension();
        if provider_dim != stored_dim {
            warn!(
                provider_dim,
                stored_dim,
                model = embedder.model(),
                "embedding provider dimension differs from store; ingest and search will fail"
            );
        }

        Self {
            ingest_uc: IngestUseCase::new(embedder.clone(), vector_store.clone()),
            search_uc: SearchUseCase::new(embedder, vector_store.clone(), index),
            records_uc: RecordsUseCase::new(vector_store),
            metric: Metric::default(),
        }
    }

    /// Metric used by `search`.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.ingest_uc = self.ingest_uc.with_batch_size(batch_size);
        self
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    // Delegating methods
    pub async fn ingest(&self, documents: &[Document]) -> Result<usize, DomainError> {
        self.ingest_uc.execute(documents).await
    }

    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<QueryMatch>, DomainError> {
        self.search_uc.search(query, top_k, self.metric).await
    }

    pub async fn search_with_metric(
        &self,
        query: &str,
        top_k: usize,
        metric: Metric,
    ) -> Result<Vec<QueryMatch>, DomainError> {
        self.search_uc.search(query, top_k, metric).await
    }

    pub fn search_vector(&self, vector: &[f32], top_k: usize, metric: Metric) -> Result<Vec<QueryMatch>, DomainError> {
        self.search_uc.search_vector(vector, top_k, metric)
    }

    pub fn get(&self, id: &str) -> Result<VectorRecord, DomainError> {
        self.records_uc.get(id)
    }

    pub fn delete(&self, id: &str) -> Result<bool, DomainError> {
        self.records_uc.delete(id)
    }

    pub fn size(&self) -> Result<usize, DomainError> {
        self.records_uc.size()
    }

    pub fn dimension(&self) -> usize {
        self.records_uc.dimension()
    }
}
