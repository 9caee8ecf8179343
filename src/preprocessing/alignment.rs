//! Alignment of produced columns to the model's column vocabulary.
//!
//! The classifier was trained on a fixed, ordered list of columns. A record
//! only produces the indicators for the categories it actually has, so
//! alignment zero-fills every other indicator, drops columns the model never
//! saw, and lays the values out in model order.

use crate::preprocessing::encoding::{HandleUnknown, ProducedColumns};
use crate::preprocessing::error::PreprocessingError;
use crate::record::category::{Categorical, Deck, Destination, HomePlanet, Side};
use crate::record::schema;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// The ordered column names the classifier expects.
///
/// Immutable once built. Construction guarantees the list is non-empty, has
/// no duplicates, names only columns an encoded record can produce, and
/// contains all nine numeric columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ModelColumnSet {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    numeric_positions: [usize; 9],
}

impl ModelColumnSet {
    pub fn new(columns: Vec<String>) -> Result<Self, PreprocessingError> {
        if columns.is_empty() {
            return Err(PreprocessingError::InvalidColumnSet(
                "no columns".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if !schema::is_base_column(column) && schema::split_indicator(column).is_none() {
                return Err(PreprocessingError::InvalidColumnSet(format!(
                    "column {column:?} is neither a record field nor a one-hot indicator"
                )));
            }
            if index.insert(column.clone(), position).is_some() {
                return Err(PreprocessingError::InvalidColumnSet(format!(
                    "column {column:?} appears more than once"
                )));
            }
        }

        let mut numeric_positions = [0; 9];
        for (slot, name) in numeric_positions.iter_mut().zip(schema::NUMERIC_COLUMNS) {
            *slot = *index
                .get(name)
                .ok_or(PreprocessingError::MissingColumn(name))?;
        }

        Ok(Self {
            columns,
            index,
            numeric_positions,
        })
    }

    /// Every column a record can produce: pass-through columns in canonical
    /// order, then the indicators of each categorical field with categories
    /// sorted by label.
    pub fn full_vocabulary() -> Result<Self, PreprocessingError> {
        let mut columns: Vec<String> = schema::CANONICAL_FIELDS
            .iter()
            .filter(|field| schema::is_base_column(field))
            .map(|field| field.to_string())
            .collect();
        columns.extend(indicators::<HomePlanet>());
        columns.extend(indicators::<Destination>());
        columns.extend(indicators::<Deck>());
        columns.extend(indicators::<Side>());
        Self::new(columns)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    /// Positions of the nine numeric columns, in scaler order.
    pub fn numeric_positions(&self) -> &[usize; 9] {
        &self.numeric_positions
    }
}

fn indicators<C: Categorical>() -> Vec<String> {
    let mut labels: Vec<&str> = C::all().iter().map(|c| c.label()).collect();
    labels.sort_unstable();
    labels
        .into_iter()
        .map(|label| schema::indicator_column(C::FIELD, label))
        .collect()
}

impl TryFrom<Vec<String>> for ModelColumnSet {
    type Error = PreprocessingError;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

impl From<ModelColumnSet> for Vec<String> {
    fn from(set: ModelColumnSet) -> Self {
        set.columns
    }
}

impl fmt::Display for ModelColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.join(", "))
    }
}

/// Lays produced columns out in model order, zero-filling absent indicators.
///
/// # Errors
/// - A record field column of the model set that was not produced is a
///   [`PreprocessingError::UnencodableColumn`]; only indicators are zero-filled.
/// - A produced column outside the set fails with
///   [`PreprocessingError::UnknownColumn`] under [`HandleUnknown::Error`].
pub fn align(
    produced: &ProducedColumns,
    columns: &ModelColumnSet,
    handle_unknown: HandleUnknown,
) -> Result<Array1<f64>, PreprocessingError> {
    if let Some(column) = columns
        .columns()
        .iter()
        .find(|column| schema::is_base_column(column) && !produced.contains_key(*column))
    {
        return Err(PreprocessingError::UnencodableColumn {
            column: column.clone(),
            reason: "not produced by the record".to_string(),
        });
    }

    let mut row = Array1::zeros(columns.len());
    for (name, value) in produced {
        match (columns.position(name), handle_unknown) {
            (Some(position), _) => row[position] = *value,
            (None, HandleUnknown::Ignore) => trace!(column = %name, "dropping unknown column"),
            (None, HandleUnknown::Error) => {
                return Err(PreprocessingError::UnknownColumn(name.clone()))
            }
        }
    }
    Ok(row)
}
