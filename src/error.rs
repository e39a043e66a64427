use std::fmt;

/// Error types for element evaluation
#[derive(Debug, PartialEq)]
pub enum ElementError {
    DimensionMismatch(String),
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementError::DimensionMismatch(msg) => write!(f, "Dimension mismatch: {}", msg),
        }
    }
}

impl std::error::Error for ElementError {}
