//! Linear decision function `w · x + b`.

use crate::model::{InferenceModel, ModelError};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Fitted linear classifier (logistic regression, linear SVM).
#[derive(Clone, Debug)]
pub struct LinearClassifier {
    weights: Array1<f64>,
    bias: f64,
}

impl LinearClassifier {
    pub fn from_params(params: LinearParams) -> Result<Self, ModelError> {
        if params.weights.is_empty() {
            return Err(ModelError::InvalidParameter(
                "linear classifier has no weights".to_string(),
            ));
        }
        if !params.bias.is_finite() || params.weights.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::InvalidParameter(
                "linear classifier weights must be finite".to_string(),
            ));
        }
        Ok(Self {
            weights: Array1::from(params.weights),
            bias: params.bias,
        })
    }
}

impl InferenceModel for LinearClassifier {
    fn kind(&self) -> &'static str {
        "linear"
    }

    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn decision(&self, input: ArrayView1<'_, f64>) -> Result<f64, ModelError> {
        self.check_width(input)?;
        Ok(self.weights.dot(&input) + self.bias)
    }
}
