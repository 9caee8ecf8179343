//! Support vector classifier with an RBF kernel.
//!
//! ```text
//! f(x) = sum_i dual_coef[i] * exp(-gamma * ||sv_i - x||^2) + intercept
//! ```
//! The dual coefficients already carry the class sign of each support vector.

use crate::model::{InferenceModel, ModelError};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RbfSvmParams {
    /// One row per support vector.
    pub support_vectors: Vec<Vec<f64>>,
    pub dual_coef: Vec<f64>,
    pub intercept: f64,
    pub gamma: f64,
}

#[derive(Clone, Debug)]
pub struct RbfSvm {
    support_vectors: Array2<f64>,
    dual_coef: Array1<f64>,
    intercept: f64,
    gamma: f64,
}

impl RbfSvm {
    pub fn from_params(params: RbfSvmParams) -> Result<Self, ModelError> {
        let invalid = |msg: String| Err(ModelError::InvalidParameter(msg));

        let n_vectors = params.support_vectors.len();
        let width = params.support_vectors.first().map_or(0, Vec::len);
        if n_vectors == 0 || width == 0 {
            return invalid("support vector classifier has no support vectors".to_string());
        }
        if params.dual_coef.len() != n_vectors {
            return invalid(format!(
                "{} dual coefficients for {n_vectors} support vectors",
                params.dual_coef.len()
            ));
        }
        if !(params.gamma.is_finite() && params.gamma > 0.0) {
            return invalid(format!("gamma must be positive, got {}", params.gamma));
        }

        let mut flat = Vec::with_capacity(n_vectors * width);
        for (i, row) in params.support_vectors.iter().enumerate() {
            if row.len() != width {
                return invalid(format!(
                    "support vector {i} has {} values, expected {width}",
                    row.len()
                ));
            }
            flat.extend_from_slice(row);
        }
        let support_vectors = Array2::from_shape_vec((n_vectors, width), flat)
            .map_err(|e| ModelError::InvalidParameter(e.to_string()))?;

        Ok(Self {
            support_vectors,
            dual_coef: Array1::from(params.dual_coef),
            intercept: params.intercept,
            gamma: params.gamma,
        })
    }

    pub fn n_support_vectors(&self) -> usize {
        self.support_vectors.nrows()
    }
}

impl InferenceModel for RbfSvm {
    fn kind(&self) -> &'static str {
        "rbf_svm"
    }

    fn n_features(&self) -> usize {
        self.support_vectors.ncols()
    }

    fn decision(&self, input: ArrayView1<'_, f64>) -> Result<f64, ModelError> {
        self.check_width(input)?;
        let kernel: Array1<f64> = self
            .support_vectors
            .axis_iter(Axis(0))
            .map(|sv| {
                let sq_dist: f64 = sv.iter().zip(input.iter()).map(|(a, b)| (a - b).powi(2)).sum();
                (-self.gamma * sq_dist).exp()
            })
            .collect();
        Ok(self.dual_coef.dot(&kernel) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_point_svm() -> RbfSvm {
        RbfSvm::from_params(RbfSvmParams {
            support_vectors: vec![vec![0.0, 0.0], vec![2.0, 2.0]],
            dual_coef: vec![1.0, -1.0],
            intercept: 0.0,
            gamma: 0.5,
        })
        .unwrap()
    }

    #[test]
    fn test_rbf_decision_value() {
        let svm = two_point_svm();
        // ||x - sv0||^2 = 0, ||x - sv1||^2 = 8
        let expected = 1.0 - (-4.0f64).exp();
        let got = svm.decision(array![0.0, 0.0].view()).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rbf_predict_nearest_support_vector() {
        let svm = two_point_svm();
        assert_eq!(svm.predict(array![0.1, -0.2].view()).unwrap(), 1);
        assert_eq!(svm.predict(array![2.1, 1.9].view()).unwrap(), 0);
        // Equidistant: kernels cancel, decision is exactly the intercept.
        assert_eq!(svm.decision(array![1.0, 1.0].view()).unwrap(), 0.0);
    }

    #[test]
    fn test_rbf_width() {
        let svm = two_point_svm();
        assert_eq!(svm.n_features(), 2);
        assert_eq!(svm.n_support_vectors(), 2);
        assert!(svm.decision(array![1.0].view()).is_err());
    }

    #[test]
    fn test_rbf_rejects_bad_params() {
        let ragged = RbfSvmParams {
            support_vectors: vec![vec![0.0, 0.0], vec![1.0]],
            dual_coef: vec![1.0, 1.0],
            intercept: 0.0,
            gamma: 1.0,
        };
        assert!(RbfSvm::from_params(ragged).is_err());

        let coef_count = RbfSvmParams {
            support_vectors: vec![vec![0.0]],
            dual_coef: vec![1.0, 1.0],
            intercept: 0.0,
            gamma: 1.0,
        };
        assert!(RbfSvm::from_params(coef_count).is_err());

        let gamma = RbfSvmParams {
            support_vectors: vec![vec![0.0]],
            dual_coef: vec![1.0],
            intercept: 0.0,
            gamma: 0.0,
        };
        assert!(RbfSvm::from_params(gamma).is_err());
    }
}
