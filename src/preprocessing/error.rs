//! Error types for feature preparation.

use thiserror::Error;

/// Contract violations between a record, the model columns and the scaler.
///
/// None of these are row-level problems: they mean the artifacts disagree
/// with each other or with the record schema, and are never turned into a
/// "Missing values" outcome.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// Feature dimension mismatch.
    #[error("feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// A required model column is absent from the column set.
    #[error("model column set lacks required column {0}")]
    MissingColumn(&'static str),
    /// The model column set is unusable as a whole.
    #[error("invalid model column set: {0}")]
    InvalidColumnSet(String),
    /// A produced value that the encoder cannot place.
    #[error("column {column} cannot be encoded: {reason}")]
    UnencodableColumn { column: String, reason: String },
    /// A produced column outside the model columns, with `HandleUnknown::Error`.
    #[error("unknown column {0} not in model column set")]
    UnknownColumn(String),
    /// An encoded value is NaN or infinite.
    #[error("column {column} encodes to non-finite value {value}")]
    NonFiniteValue { column: String, value: f64 },
    /// Invalid stored parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
