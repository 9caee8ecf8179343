//! Core trait for fitted transformers.
//!
//! Artifacts arrive already fitted, so only the inference half of the usual
//! fit/transform pair exists here. A [`FittedTransformer`] is rebuilt from
//! its stored parameters and applied to one feature row at a time.

use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;
use ndarray::Array1;

/// A transformer with learned parameters, ready for inference.
///
/// `from_params()` validates the parameters; a transformer that exists is usable.
pub trait FittedTransformer: Clone {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform one row of `n_features_in()` values.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::FeatureMismatch`] if the row width differs.
    fn transform(&self, row: &Array1<f64>) -> Result<Array1<f64>, PreprocessingError>;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Returns the number of features seen during fit.
    fn n_features_in(&self) -> usize;

    /// Checks a row against the fitted width.
    fn check_width(&self, row: &Array1<f64>) -> Result<(), PreprocessingError> {
        if row.len() == self.n_features_in() {
            Ok(())
        } else {
            Err(PreprocessingError::FeatureMismatch {
                expected_features: self.n_features_in(),
                got_features: row.len(),
            })
        }
    }
}
