use crate::domain::entities::query_match::QueryMatch;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::metric::Metric;

/// Answers top-K nearest-neighbour queries over the current contents of a store.
///
/// Results are ordered best first under `metric` with ties broken by
/// ascending id, and hold at most `top_k` entries. An empty store yields an
/// empty result. A query vector whose length differs from the store's
/// dimension fails with `DimensionMismatch`; `top_k == 0` or a non-finite
/// component is `InvalidInput`.
pub trait SimilarityIndex: Send + Sync {
    fn query(
        &self,
        store: &dyn VectorStore,
        vector: &[f32],
        top_k: usize,
        metric: Metric,
    ) -> Result<Vec<QueryMatch>, DomainError>;
}
