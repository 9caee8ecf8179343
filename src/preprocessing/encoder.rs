//! Record to model-ready feature vector.
//!
//! The steps run in a fixed order: materialize the record as labeled values,
//! one-hot the categoricals, align to the model columns, then scale the nine
//! numeric columns in place with the stored scaler parameters.

use crate::preprocessing::alignment::{self, ModelColumnSet};
use crate::preprocessing::encoding::{HandleUnknown, OneHotEncoder};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::scaling::FittedScaler;
use crate::preprocessing::traits::FittedTransformer;
use crate::record::{schema, RawRecord};
use ndarray::Array1;
use tracing::trace;

/// One record encoded against a model column set.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedFeatureVector<'a> {
    columns: &'a ModelColumnSet,
    values: Array1<f64>,
}

impl<'a> EncodedFeatureVector<'a> {
    pub fn columns(&self) -> &'a ModelColumnSet {
        self.columns
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn into_values(self) -> Array1<f64> {
        self.values
    }

    /// Value of a named column, if the model has it.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns.position(column).map(|i| self.values[i])
    }
}

/// Encoder bound to one column set and one fitted scaler.
#[derive(Clone, Debug)]
pub struct FeatureEncoder<'a> {
    columns: &'a ModelColumnSet,
    scaler: &'a FittedScaler,
    one_hot: OneHotEncoder,
    handle_unknown: HandleUnknown,
}

impl<'a> FeatureEncoder<'a> {
    /// Binds the encoder, checking that the scaler covers exactly the numeric columns.
    pub fn new(
        columns: &'a ModelColumnSet,
        scaler: &'a FittedScaler,
    ) -> Result<Self, PreprocessingError> {
        if scaler.n_features_in() != schema::NUMERIC_COLUMNS.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: schema::NUMERIC_COLUMNS.len(),
                got_features: scaler.n_features_in(),
            });
        }
        Ok(Self {
            columns,
            scaler,
            one_hot: OneHotEncoder::new(),
            handle_unknown: HandleUnknown::default(),
        })
    }

    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.handle_unknown = strategy;
        self
    }

    pub fn encode(&self, record: &RawRecord) -> Result<EncodedFeatureVector<'a>, PreprocessingError> {
        let produced = self.one_hot.encode(&record.labeled_fields())?;
        let mut values = alignment::align(&produced, self.columns, self.handle_unknown)?;

        let positions = self.columns.numeric_positions();
        let numeric: Array1<f64> = positions.iter().map(|&i| values[i]).collect();
        let scaled = self.scaler.transform(&numeric)?;
        for (&i, &value) in positions.iter().zip(scaled.iter()) {
            values[i] = value;
        }
        if let Some((column, &value)) = self
            .columns
            .columns()
            .iter()
            .zip(values.iter())
            .find(|(_, value)| !value.is_finite())
        {
            return Err(PreprocessingError::NonFiniteValue {
                column: column.clone(),
                value,
            });
        }
        trace!(columns = self.columns.len(), "encoded record");

        Ok(EncodedFeatureVector {
            columns: self.columns,
            values,
        })
    }
}

/// Encodes one record; see [`FeatureEncoder`].
pub fn encode<'a>(
    record: &RawRecord,
    columns: &'a ModelColumnSet,
    scaler: &'a FittedScaler,
) -> Result<EncodedFeatureVector<'a>, PreprocessingError> {
    FeatureEncoder::new(columns, scaler)?.encode(record)
}
