use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use std::collections::HashMap;
use std::sync::RwLock;

pub struct InMemoryVectorStore {
    dimension: usize,
    records: RwLock<HashMap<String, VectorRecord>>,
}

impl InMemoryVectorStore {
    pub fn new(dimension: usize) -> Result<Self, DomainError> {
        if dimension == 0 {
            return Err(DomainError::InvalidInput("Store dimension must be positive".into()));
        }
        Ok(Self {
            dimension,
            records: RwLock::new(HashMap::new()),
        })
    }
}

impl VectorStore for InMemoryVectorStore {
    fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), DomainError> {
        for record in &records {
            DomainError::check_vector(self.dimension, &record.vector)?;
        }
        let mut map = self.records.write().map_err(|e| DomainError::Storage(e.to_string()))?;
        for record in records {
            map.insert(record.id.clone(), record);
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut map = self.records.write().map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(map.remove(id).is_some())
    }

    fn get(&self, id: &str) -> Result<VectorRecord, DomainError> {
        let map = self.records.read().map_err(|e| DomainError::Storage(e.to_string()))?;
        map.get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Record {id}")))
    }

    fn size(&self) -> Result<usize, DomainError> {
        let map = self.records.read().map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(map.len())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn scan(&self, visit: &mut dyn FnMut(&VectorRecord)) -> Result<(), DomainError> {
        let map = self.records.read().map_err(|e| DomainError::Storage(e.to_string()))?;
        map.values().for_each(|r| visit(r));
        Ok(())
    }
}
