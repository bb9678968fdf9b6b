use crate::domain::entities::vector_record::TEXT_KEY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One ranked hit of a similarity query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    pub id: String,
    pub score: f64,
    pub metadata: BTreeMap<String, String>,
}

impl QueryMatch {
    pub fn text(&self) -> &str {
        self.metadata.get(TEXT_KEY).map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for QueryMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Text: {}, Score: {}", self.id, self.text(), self.score)
    }
}
