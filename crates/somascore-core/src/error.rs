use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("model artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("model artifact load failed: {0}")]
    ArtifactLoad(String),

    #[error("assembled columns do not match the training schema: expected {expected:?}, got {actual:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("no scaler loaded, cannot normalize the record")]
    ScalerUnavailable,

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
