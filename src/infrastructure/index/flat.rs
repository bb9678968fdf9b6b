use crate::domain::entities::query_match::QueryMatch;
use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::similarity_index::SimilarityIndex;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::metric::Metric;

/// Exhaustive scan: scores every stored vector on each query.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatIndex;

impl FlatIndex {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityIndex for FlatIndex {
    fn query(
        &self,
        store: &dyn VectorStore,
        vector: &[f32],
        top_k: usize,
        metric: Metric,
    ) -> Result<Vec<QueryMatch>, DomainError> {
        if top_k == 0 {
            return Err(DomainError::InvalidInput("top_k must be positive".into()));
        }
        DomainError::check_vector(store.dimension(), vector)?;

        let mut results: Vec<QueryMatch> = Vec::new();
        store.scan(&mut |record: &VectorRecord| {
            results.push(QueryMatch {
                id: record.id.clone(),
                score: metric.score(vector, &record.vector),
                metadata: record.metadata.clone(),
            });
        })?;

        results.sort_by(|a, b| metric.rank(a.score, b.score).then_with(|| a.id.cmp(&b.id)));
        results.truncate(top_k);
        Ok(results)
    }
}
