use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use std::path::Path;

/// Reads a JSON array of `{"id": ..., "text": ...}` objects. Missing ids are generated.
pub fn load_documents(path: &Path) -> Result<Vec<Document>, DomainError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Storage(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&raw).map_err(|e| DomainError::Parse(format!("{}: {e}", path.display())))
}

pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::with_id("1", "How to fix a car engine"),
        Document::with_id("2", "Best practices for car maintenance"),
        Document::with_id("3", "Top 10 car repair tips"),
    ]
}
