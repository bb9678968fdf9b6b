use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

pub struct RecordsUseCase {
    vector_store: Arc<dyn VectorStore>,
}

impl RecordsUseCase {
    pub fn new(vector_store: Arc<dyn VectorStore>) -> Self {
        Self { vector_store }
    }

    pub fn get(&self, id: &str) -> Result<VectorRecord, DomainError> {
        self.vector_store.get(id)
    }

    pub fn delete(&self, id: &str) -> Result<bool, DomainError> {
        self.vector_store.delete(id)
    }

    pub fn size(&self) -> Result<usize, DomainError> {
        self.vector_store.size()
    }

    pub fn dimension(&self) -> usize {
        self.vector_store.dimension()
    }
}
