use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl DomainError {
    /// Fails with `DimensionMismatch` unless `actual == expected`.
    pub fn check_dimension(expected: usize, actual: usize) -> Result<(), DomainError> {
        if expected == actual {
            Ok(())
        } else {
            Err(DomainError::DimensionMismatch { expected, actual })
        }
    }

    /// Dimension check plus rejection of NaN and infinite components.
    pub fn check_vector(expected: usize, vector: &[f32]) -> Result<(), DomainError> {
        Self::check_dimension(expected, vector.len())?;
        match vector.iter().position(|x| !x.is_finite()) {
            Some(i) => Err(DomainError::InvalidInput(format!(
                "Vector component {i} is not finite: {}",
                vector[i]
            ))),
            None => Ok(()),
        }
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}
