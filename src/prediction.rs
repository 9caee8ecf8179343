//! Classifier invocation and outcome labels.
//!
//! [`PredictionService`] owns a shared handle to the loaded artifacts and
//! serves both paths: a single form submission, where any record problem is
//! reported back to the caller, and a batch, where a row that cannot be built
//! becomes a "Missing values" outcome and the rest of the batch proceeds.

use crate::artifacts::Artifacts;
use crate::dataset::{BatchPrediction, PassengerBatch};
use crate::model::ModelError;
use crate::preprocessing::{EncodedFeatureVector, PreprocessingError};
use crate::record::{PassengerForm, RawRecord, RecordError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// A real classifier decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prediction {
    Transported,
    NotTransported,
}

impl Prediction {
    /// Label 1 is transported; every other label is not.
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Prediction::Transported
        } else {
            Prediction::NotTransported
        }
    }

    pub fn is_transported(self) -> bool {
        self == Prediction::Transported
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Prediction::Transported => "Transported",
            Prediction::NotTransported => "Not transported",
        })
    }
}

/// What a batch row resolves to.
///
/// `MissingValues` marks a row that never reached the classifier; it is not a
/// prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredictionOutcome {
    Predicted(Prediction),
    MissingValues,
}

impl PredictionOutcome {
    pub fn prediction(self) -> Option<Prediction> {
        match self {
            PredictionOutcome::Predicted(prediction) => Some(prediction),
            PredictionOutcome::MissingValues => None,
        }
    }
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionOutcome::Predicted(prediction) => fmt::Display::fmt(prediction, f),
            PredictionOutcome::MissingValues => f.write_str("Missing values"),
        }
    }
}

impl Serialize for PredictionOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("feature encoding failed: {0}")]
    Preprocessing(#[from] PreprocessingError),
    #[error("classifier failed: {0}")]
    Model(#[from] ModelError),
}

/// Result of a single form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPrediction {
    pub name: Option<String>,
    pub prediction: Prediction,
}

impl fmt::Display for FormPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "The passenger {name}")?,
            None => f.write_str("The passenger")?,
        }
        f.write_str(if self.prediction.is_transported() {
            " was transported."
        } else {
            " was not transported."
        })
    }
}

/// Runs records through the encoder and the classifier.
#[derive(Clone, Debug)]
pub struct PredictionService {
    artifacts: Arc<Artifacts>,
}

impl PredictionService {
    pub fn new(artifacts: Arc<Artifacts>) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &Artifacts {
        &self.artifacts
    }

    /// Classifies an encoded vector.
    pub fn predict(&self, vector: &EncodedFeatureVector<'_>) -> Result<Prediction, PredictionError> {
        let label = self
            .artifacts
            .classifier()
            .predict(vector.values().view())?;
        Ok(Prediction::from_label(label))
    }

    /// Encodes and classifies a typed record.
    pub fn predict_record(&self, record: &RawRecord) -> Result<Prediction, PredictionError> {
        let vector = self.artifacts.encoder()?.encode(record)?;
        let prediction = self.predict(&vector)?;
        debug!(%prediction, "classified record");
        Ok(prediction)
    }

    /// Gates, builds and classifies a form submission.
    ///
    /// An incomplete or invalid form is returned as
    /// [`PredictionError::Record`] and the classifier is not called.
    pub fn predict_form(&self, form: &PassengerForm) -> Result<FormPrediction, PredictionError> {
        let record = form.input.to_record()?;
        Ok(FormPrediction {
            name: form.display_name().map(String::from),
            prediction: self.predict_record(&record)?,
        })
    }

    /// Classifies every row of a batch, in row order.
    ///
    /// Row-level record problems become [`PredictionOutcome::MissingValues`];
    /// encoding or classifier failures abort the batch.
    pub fn predict_batch(
        &self,
        batch: &PassengerBatch,
    ) -> Result<Vec<BatchPrediction>, PredictionError> {
        let encoder = self.artifacts.encoder()?;
        let classifier = self.artifacts.classifier();

        batch
            .rows()
            .iter()
            .map(|row| -> Result<BatchPrediction, PredictionError> {
                let outcome = match row.record() {
                    Ok(record) => {
                        let vector = encoder.encode(&record)?;
                        let label = classifier.predict(vector.values().view())?;
                        PredictionOutcome::Predicted(Prediction::from_label(label))
                    }
                    Err(reason) => {
                        warn!(passenger_id = %row.passenger_id, %reason, "row has missing values");
                        PredictionOutcome::MissingValues
                    }
                };
                Ok(BatchPrediction {
                    passenger_id: row.passenger_id.clone(),
                    outcome,
                })
            })
            .collect()
    }
}
