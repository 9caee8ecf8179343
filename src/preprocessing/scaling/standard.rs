//! Standard scaler (z-score).
//!
//! Each feature is centered by its stored mean and divided by its stored
//! scale:
//! ```text
//! z = (x - u) / s
//! ```
//! A zero scale marks a constant feature and is treated as 1.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::FittedTransformer;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted StandardScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Mean of each feature.
    pub mean: Vec<f64>,
    /// Standard deviation of each feature.
    pub scale: Vec<f64>,
    /// Number of features seen during fit.
    pub n_features: usize,
}

impl StandardScalerParams {
    /// Parameters that leave every value unchanged.
    pub fn identity(n_features: usize) -> Self {
        Self {
            mean: vec![0.0; n_features],
            scale: vec![1.0; n_features],
            n_features,
        }
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
    n_features: usize,
}

impl FittedStandardScaler {
    /// Get the mean values for each feature.
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Get the effective scale for each feature.
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }
}

impl FittedTransformer for FittedStandardScaler {
    type Params = StandardScalerParams;

    fn transform(&self, row: &Array1<f64>) -> Result<Array1<f64>, PreprocessingError> {
        self.check_width(row)?;
        Ok((row - &self.mean) / &self.scale)
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        if params.mean.len() != params.n_features || params.scale.len() != params.n_features {
            return Err(PreprocessingError::InvalidParameter(format!(
                "standard scaler declares {} features but has {} means and {} scales",
                params.n_features,
                params.mean.len(),
                params.scale.len()
            )));
        }
        if params
            .mean
            .iter()
            .chain(params.scale.iter())
            .any(|v| !v.is_finite())
        {
            return Err(PreprocessingError::InvalidParameter(
                "standard scaler parameters must be finite".to_string(),
            ));
        }

        let scale = params
            .scale
            .iter()
            .map(|&s| if s == 0.0 { 1.0 } else { s })
            .collect();
        Ok(Self {
            mean: Array1::from(params.mean),
            scale,
            n_features: params.n_features,
        })
    }

    fn n_features_in(&self) -> usize {
        self.n_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn fitted() -> FittedStandardScaler {
        FittedStandardScaler::from_params(StandardScalerParams {
            mean: vec![1.0, 10.0],
            scale: vec![2.0, 5.0],
            n_features: 2,
        })
        .unwrap()
    }

    #[test]
    fn test_standard_scaler_transform() {
        let scaled = fitted().transform(&array![3.0, 0.0]).unwrap();
        assert_eq!(scaled, array![1.0, -2.0]);
    }

    #[test]
    fn test_standard_scaler_identity() {
        let scaler = FittedStandardScaler::from_params(StandardScalerParams::identity(3)).unwrap();
        let row = array![24.0, 0.0, 1534.0];
        assert_eq!(scaler.transform(&row).unwrap(), row);
    }

    #[test]
    fn test_standard_scaler_zero_scale_is_one() {
        let scaler = FittedStandardScaler::from_params(StandardScalerParams {
            mean: vec![4.0],
            scale: vec![0.0],
            n_features: 1,
        })
        .unwrap();
        assert_eq!(scaler.scale(), &array![1.0]);
        assert_eq!(scaler.transform(&array![6.0]).unwrap(), array![2.0]);
    }

    #[test]
    fn test_standard_scaler_feature_mismatch() {
        let result = fitted().transform(&array![1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(PreprocessingError::FeatureMismatch {
                expected_features: 2,
                got_features: 3
            })
        ));
    }

    #[test]
    fn test_standard_scaler_rejects_inconsistent_params() {
        let result = FittedStandardScaler::from_params(StandardScalerParams {
            mean: vec![0.0],
            scale: vec![1.0, 1.0],
            n_features: 2,
        });
        assert!(matches!(result, Err(PreprocessingError::InvalidParameter(_))));

        let result = FittedStandardScaler::from_params(StandardScalerParams {
            mean: vec![f64::NAN],
            scale: vec![1.0],
            n_features: 1,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_standard_scaler_params_preserved() {
        let scaler = fitted();
        assert_eq!(scaler.mean(), &array![1.0, 10.0]);
        assert_eq!(scaler.scale(), &array![2.0, 5.0]);
        assert_eq!(scaler.n_features_in(), 2);
    }
}
