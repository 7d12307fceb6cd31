use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed record on line {line}: {content:?} (expected `Actual;Predicted`)")]
    MalformedRecord { line: u64, content: String },

    #[error("No .csv file found in {0}")]
    NoInputFile(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
