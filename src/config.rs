use crate::application::ingest::DEFAULT_BATCH_SIZE;
use crate::domain::error::DomainError;
use crate::domain::values::metric::Metric;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_QUERY: &str = "How to repair a car";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Hashing,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Hashing => write!(f, "hashing"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "hashing" | "local" => Ok(ProviderKind::Hashing),
            _ => Err(format!("Unknown embedding provider: {s}")),
        }
    }
}

/// Runtime settings, read from `SEMSEARCH_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite path; `None` keeps the store in memory.
    pub db_path: Option<String>,
    pub provider: ProviderKind,
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    /// Overrides the provider's reported dimension.
    pub dimension: Option<usize>,
    pub metric: Metric,
    pub top_k: usize,
    pub batch_size: usize,
    pub data_file: Option<PathBuf>,
    pub query: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            provider: ProviderKind::Hashing,
            api_key: String::new(),
            model: None,
            base_url: None,
            dimension: None,
            metric: Metric::default(),
            top_k: DEFAULT_TOP_K,
            batch_size: DEFAULT_BATCH_SIZE,
            data_file: None,
            query: DEFAULT_QUERY.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("SEMSEARCH_EMBEDDING_API_KEY")
            .or_else(|| get("OPENAI_API_KEY"))
            .unwrap_or_default();

        let provider = match get("SEMSEARCH_EMBEDDING_PROVIDER") {
            Some(p) => p.parse::<ProviderKind>().map_err(DomainError::Config)?,
            None if !api_key.is_empty() => ProviderKind::OpenAi,
            None => ProviderKind::Hashing,
        };

        let metric = match get("SEMSEARCH_METRIC") {
            Some(m) => m.parse::<Metric>().map_err(DomainError::Config)?,
            None => Metric::default(),
        };

        let dimension = parse_positive(get("SEMSEARCH_DIMENSION"), "SEMSEARCH_DIMENSION")?;
        let top_k = parse_positive(get("SEMSEARCH_TOP_K"), "SEMSEARCH_TOP_K")?.unwrap_or(DEFAULT_TOP_K);
        let batch_size =
            parse_positive(get("SEMSEARCH_BATCH_SIZE"), "SEMSEARCH_BATCH_SIZE")?.unwrap_or(DEFAULT_BATCH_SIZE);

        Ok(Self {
            db_path: get("SEMSEARCH_DB").filter(|p| p != ":memory:"),
            provider,
            api_key,
            model: get("SEMSEARCH_EMBEDDING_MODEL"),
            base_url: get("SEMSEARCH_EMBEDDING_BASE_URL"),
            dimension,
            metric,
            top_k,
            batch_size,
            data_file: get("SEMSEARCH_DATA_FILE").map(PathBuf::from),
            query: get("SEMSEARCH_QUERY").unwrap_or_else(|| DEFAULT_QUERY.to_string()),
        })
    }
}

fn parse_positive(value: Option<String>, key: &str) -> Result<Option<usize>, DomainError> {
    match value {
        None => Ok(None),
        Some(v) => match v.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(DomainError::Config(format!("{key} must be a positive integer, got '{v}'"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, DomainError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let c = config_from(&[]).unwrap();
        assert_eq!(c.provider, ProviderKind::Hashing);
        assert_eq!(c.metric, Metric::Cosine);
        assert_eq!(c.top_k, 3);
        assert_eq!(c.batch_size, DEFAULT_BATCH_SIZE);
        assert!(c.db_path.is_none());
        assert_eq!(c.query, DEFAULT_QUERY);
    }

    #[test]
    fn test_api_key_selects_openai() {
        let c = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert_eq!(c.provider, ProviderKind::OpenAi);
        assert_eq!(c.api_key, "sk-test");
    }

    #[test]
    fn test_explicit_values() {
        let c = config_from(&[
            ("SEMSEARCH_EMBEDDING_PROVIDER", "hashing"),
            ("SEMSEARCH_EMBEDDING_API_KEY", "sk-test"),
            ("SEMSEARCH_METRIC", "euclidean"),
            ("SEMSEARCH_DIMENSION", "64"),
            ("SEMSEARCH_TOP_K", "5"),
            ("SEMSEARCH_DB", "/tmp/vectors.db"),
        ])
        .unwrap();
        assert_eq!(c.provider, ProviderKind::Hashing);
        assert_eq!(c.metric, Metric::Euclidean);
        assert_eq!(c.dimension, Some(64));
        assert_eq!(c.top_k, 5);
        assert_eq!(c.db_path.as_deref(), Some("/tmp/vectors.db"));
    }

    #[test]
    fn test_memory_db_means_no_path() {
        let c = config_from(&[("SEMSEARCH_DB", ":memory:")]).unwrap();
        assert!(c.db_path.is_none());
    }

    #[test]
    fn test_provider_kind_display_parses_back() {
        for kind in [ProviderKind::OpenAi, ProviderKind::Hashing] {
            assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(config_from(&[("SEMSEARCH_TOP_K", "0")]), Err(DomainError::Config(_))));
        assert!(matches!(config_from(&[("SEMSEARCH_DIMENSION", "abc")]), Err(DomainError::Config(_))));
        assert!(matches!(config_from(&[("SEMSEARCH_METRIC", "hamming")]), Err(DomainError::Config(_))));
        assert!(matches!(
            config_from(&[("SEMSEARCH_EMBEDDING_PROVIDER", "voyage")]),
            Err(DomainError::Config(_))
        ));
    }
}
