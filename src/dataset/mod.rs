//! Batch input and output.

pub mod batch;
pub mod report;

pub use batch::{BatchRow, PassengerBatch};
pub use report::{write_results, BatchPrediction, BatchSummary, OutputFormat};

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write results: {0}")]
    Write(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message() {
        let err = BatchError::MissingColumns(vec!["Cabin", "Age"]);
        assert_eq!(err.to_string(), "missing required columns: Cabin, Age");
    }
}
