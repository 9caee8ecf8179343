//! Min-max scaler.
//!
//! Maps each feature from its stored data range onto the target range:
//! ```text
//! X_scaled = (X - X_min) / (X_max - X_min) * (max - min) + min
//! ```
//! Values outside the stored data range land outside the target range; they
//! are not clipped. A zero data range is replaced by 1, so a constant
//! feature is scaled by `max - min` of the target range, as scikit-learn's
//! `MinMaxScaler` does.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::FittedTransformer;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted MinMaxScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScalerParams {
    /// Per-feature minimum seen during fit.
    pub data_min: Vec<f64>,
    /// Per-feature maximum seen during fit.
    pub data_max: Vec<f64>,
    /// Target range `(min, max)`.
    pub feature_range: (f64, f64),
    pub n_features: usize,
}

/// Fitted MinMaxScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedMinMaxScaler {
    data_min: Array1<f64>,
    data_max: Array1<f64>,
    scale: Array1<f64>,
    feature_range: (f64, f64),
    n_features: usize,
}

impl FittedMinMaxScaler {
    /// Get the scale factor for each feature.
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    /// Get the per-feature data range.
    pub fn data_range(&self) -> Array1<f64> {
        &self.data_max - &self.data_min
    }
}

impl FittedTransformer for FittedMinMaxScaler {
    type Params = MinMaxScalerParams;

    fn transform(&self, row: &Array1<f64>) -> Result<Array1<f64>, PreprocessingError> {
        self.check_width(row)?;
        Ok((row - &self.data_min) * &self.scale + self.feature_range.0)
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        let n = params.n_features;
        if params.data_min.len() != n || params.data_max.len() != n {
            return Err(PreprocessingError::InvalidParameter(format!(
                "min-max scaler declares {n} features but has {} minima and {} maxima",
                params.data_min.len(),
                params.data_max.len()
            )));
        }
        let (low, high) = params.feature_range;
        if low.is_nan() || high.is_nan() || low >= high {
            return Err(PreprocessingError::InvalidParameter(format!(
                "feature_range ({low}, {high}) must be increasing"
            )));
        }
        if params
            .data_min
            .iter()
            .zip(params.data_max.iter())
            .any(|(min, max)| !min.is_finite() || !max.is_finite() || min > max)
        {
            return Err(PreprocessingError::InvalidParameter(
                "min-max scaler data range must be finite with data_min <= data_max".to_string(),
            ));
        }

        let scale = params
            .data_min
            .iter()
            .zip(params.data_max.iter())
            .map(|(min, max)| {
                let range = max - min;
                (high - low) / if range == 0.0 { 1.0 } else { range }
            })
            .collect();

        Ok(Self {
            data_min: Array1::from(params.data_min),
            data_max: Array1::from(params.data_max),
            scale,
            feature_range: params.feature_range,
            n_features: n,
        })
    }

    fn n_features_in(&self) -> usize {
        self.n_features
    }
}
