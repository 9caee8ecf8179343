//! Pretrained binary classifiers.
//!
//! A classifier is loaded once from its stored parameters and only ever used
//! for inference. Label 1 means "transported".

pub mod linear;
pub mod svm;

pub use linear::{LinearClassifier, LinearParams};
pub use svm::{RbfSvm, RbfSvmParams};

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("feature mismatch: classifier expects {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    #[error("invalid classifier parameter: {0}")]
    InvalidParameter(String),
}

/// A fitted classifier, shared read-only across requests.
pub trait InferenceModel: Send + Sync + fmt::Debug {
    /// Name of the stored classifier kind.
    fn kind(&self) -> &'static str;

    /// Input width the classifier was trained on.
    fn n_features(&self) -> usize;

    /// Raw decision value for one row; positive means label 1.
    fn decision(&self, input: ArrayView1<'_, f64>) -> Result<f64, ModelError>;

    /// Predict the label of a single row.
    fn predict(&self, input: ArrayView1<'_, f64>) -> Result<i64, ModelError> {
        Ok(if self.decision(input)? > 0.0 { 1 } else { 0 })
    }

    fn check_width(&self, input: ArrayView1<'_, f64>) -> Result<(), ModelError> {
        if input.len() == self.n_features() {
            Ok(())
        } else {
            Err(ModelError::FeatureMismatch {
                expected_features: self.n_features(),
                got_features: input.len(),
            })
        }
    }
}

/// Stored parameters of any supported classifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierParams {
    Linear(LinearParams),
    RbfSvm(RbfSvmParams),
}

impl ClassifierParams {
    /// Builds the classifier, validating its parameters.
    pub fn into_model(self) -> Result<Box<dyn InferenceModel>, ModelError> {
        Ok(match self {
            ClassifierParams::Linear(params) => Box::new(LinearClassifier::from_params(params)?),
            ClassifierParams::RbfSvm(params) => Box::new(RbfSvm::from_params(params)?),
        })
    }
}
