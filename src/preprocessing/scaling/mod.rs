//! Scalers for the numeric feature columns.
//!
//! | Scaler | Stored parameters |
//! |--------|-------------------|
//! | [`FittedStandardScaler`] | `mean`, `scale` |
//! | [`FittedMinMaxScaler`] | `data_min`, `data_max`, `feature_range` |
//!
//! A scaler artifact is a [`ScalerParams`] value; the `kind` it was stored
//! under selects the scaler at load time.

pub mod minmax;
pub mod standard;

pub use minmax::{FittedMinMaxScaler, MinMaxScalerParams};
pub use standard::{FittedStandardScaler, StandardScalerParams};

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::FittedTransformer;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Stored parameters of any supported scaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerParams {
    Standard(StandardScalerParams),
    MinMax(MinMaxScalerParams),
}

/// A fitted scaler of either kind.
#[derive(Clone, Debug)]
pub enum FittedScaler {
    Standard(FittedStandardScaler),
    MinMax(FittedMinMaxScaler),
}

impl FittedScaler {
    pub fn kind(&self) -> &'static str {
        match self {
            FittedScaler::Standard(_) => "standard",
            FittedScaler::MinMax(_) => "min_max",
        }
    }
}

impl FittedTransformer for FittedScaler {
    type Params = ScalerParams;

    fn transform(&self, row: &Array1<f64>) -> Result<Array1<f64>, PreprocessingError> {
        match self {
            FittedScaler::Standard(scaler) => scaler.transform(row),
            FittedScaler::MinMax(scaler) => scaler.transform(row),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        Ok(match params {
            ScalerParams::Standard(p) => {
                FittedScaler::Standard(FittedStandardScaler::from_params(p)?)
            }
            ScalerParams::MinMax(p) => FittedScaler::MinMax(FittedMinMaxScaler::from_params(p)?),
        })
    }

    fn n_features_in(&self) -> usize {
        match self {
            FittedScaler::Standard(scaler) => scaler.n_features_in(),
            FittedScaler::MinMax(scaler) => scaler.n_features_in(),
        }
    }
}
