use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Document,
    Query,
}

/// Turns text into fixed-length vectors.
///
/// `embed` returns exactly one vector per input text, in input order. Every
/// vector a provider returns has length `dimension()`. Any transport, auth or
/// quota problem is reported as `DomainError::Embedding`; retries are the
/// provider's own business.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError>;
    fn dimension(&self) -> usize;
    fn model(&self) -> &str;
}
