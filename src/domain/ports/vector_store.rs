use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;

/// Owns id → record associations of a single fixed dimension.
pub trait VectorStore: Send + Sync {
    /// Insert or replace by id. Either every record is written or none is:
    /// a vector of the wrong length fails the whole batch with
    /// `DimensionMismatch`, a NaN or infinite component with `InvalidInput`.
    /// Later duplicates in one batch win.
    fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), DomainError>;

    /// Returns whether a record was removed. Absent ids are not an error.
    fn delete(&self, id: &str) -> Result<bool, DomainError>;

    fn get(&self, id: &str) -> Result<VectorRecord, DomainError>;

    fn size(&self) -> Result<usize, DomainError>;

    fn dimension(&self) -> usize;

    /// Visits each stored record exactly once, in no particular order.
    fn scan(&self, visit: &mut dyn FnMut(&VectorRecord)) -> Result<(), DomainError>;
}
