use crate::domain::entities::document::Document;
use crate::domain::entities::vector_record::{VectorRecord, TEXT_KEY};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_BATCH_SIZE: usize = 32;

pub struct IngestUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
    batch_size: usize,
}

impl IngestUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, vector_store: Arc<dyn VectorStore>) -> Self {
        Self {
            embedder,
            vector_store,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Embeds every document, then writes all records in one upsert.
    /// Any embedding failure aborts before the store is touched.
    pub async fn execute(&self, documents: &[Document]) -> Result<usize, DomainError> {
        if documents.is_empty() {
            return Ok(0);
        }

        let mut records = Vec::with_capacity(documents.len());
        for chunk in documents.chunks(self.batch_size) {
            let texts: Vec<String> = chunk.iter().map(|d| d.text.clone()).collect();
            debug!(count = texts.len(), "embedding chunk");
            let vectors = self.embedder.embed(&texts, InputType::Document).await?;
            if vectors.len() != chunk.len() {
                return Err(DomainError::Embedding(format!(
                    "Provider returned {} vectors for {} texts",
                    vectors.len(),
                    chunk.len()
                )));
            }
            for (doc, vector) in chunk.iter().zip(vectors) {
                records.push(VectorRecord::new(doc.id.clone(), vector).with_metadata(TEXT_KEY, doc.text.clone()));
            }
        }

        let total = records.len();
        self.vector_store.upsert(records)?;
        info!(records = total, model = self.embedder.model(), "ingest complete");
        Ok(total)
    }
}
