//! Error types for kernel evaluation and covariance construction

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Expected a single point (1 row), got {rows} rows")]
    NotSinglePoint { rows: usize },

    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Non-finite value: {0}")]
    NonFinite(String),

    #[error("Linear algebra error: {0}")]
    LinalgError(#[from] linfa_linalg::LinalgError),

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;
