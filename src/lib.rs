//! Transported / not-transported predictions for starship passengers.
//!
//! Passenger records arrive one at a time from a form or in bulk from a CSV
//! file. Each record is turned into the exact numeric row a pretrained
//! classifier expects and classified:
//!
//! ```text
//! raw fields ──► cabin decode / total spend / group size
//!            ──► required-field gate
//!            ──► one-hot, align to model columns, scale numeric columns
//!            ──► classifier ──► Transported | Not transported | Missing values
//! ```
//!
//! The scaler, the model column vocabulary and the classifier are loaded once
//! as [`artifacts::Artifacts`] and shared read-only by
//! [`prediction::PredictionService`].

pub mod artifacts;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod model;
pub mod prediction;
pub mod preprocessing;
pub mod record;
pub mod serialization;
pub mod validation;

pub use artifacts::{ArtifactError, ArtifactPaths, Artifacts};
pub use dataset::{BatchError, OutputFormat, PassengerBatch};
pub use prediction::{
    FormPrediction, Prediction, PredictionError, PredictionOutcome, PredictionService,
};
pub use preprocessing::{encode, EncodedFeatureVector, ModelColumnSet, PreprocessingError};
pub use record::{PassengerForm, PassengerInput, RawRecord, RecordError};
