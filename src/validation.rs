//! Required-field gate.
//!
//! Runs before a record is built. A single form submission that fails the
//! gate is rejected with the list of missing fields; a batch row that fails
//! it gets a "Missing values" outcome while the rest of the batch proceeds.

/// A field value as seen by the gate.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// The field was not supplied at all.
    Missing,
    /// Free text, e.g. a category label or an unparsed number.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Flag(bool),
}

impl FieldValue {
    /// True for an absent field, blank text or a NaN number.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(value) => value.is_nan(),
            FieldValue::Flag(_) => false,
        }
    }
}

impl From<Option<&String>> for FieldValue {
    fn from(value: Option<&String>) -> Self {
        value.map_or(FieldValue::Missing, |text| FieldValue::Text(text.clone()))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// True iff no field is empty or missing.
pub fn is_complete(fields: &[FieldValue]) -> bool {
    fields.iter().all(|field| !field.is_empty())
}

/// Names of the empty or missing fields, in input order.
pub fn missing_fields<'a>(fields: &[(&'a str, FieldValue)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect()
}
