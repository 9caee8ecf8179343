//! One-hot encoding of a labeled record.
//!
//! Every categorical field becomes a single `<Field>_<category>` indicator
//! set to 1.0; no reference category is dropped. Flags become 0.0 / 1.0 under
//! their own name and numbers pass through unchanged. The output is sparse:
//! only produced columns appear, and alignment to the model columns zero-fills
//! the rest.

use crate::preprocessing::error::PreprocessingError;
use crate::record::schema;
use crate::validation::FieldValue;
use std::collections::BTreeMap;

/// Produced column name to value, before alignment.
pub type ProducedColumns = BTreeMap<String, f64>;

/// Stateless one-hot encoder over labeled field values.
#[derive(Clone, Debug)]
pub struct OneHotEncoder {
    categorical: Vec<&'static str>,
}

impl Default for OneHotEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl OneHotEncoder {
    /// Encoder for the record's four categorical fields.
    pub fn new() -> Self {
        Self {
            categorical: schema::CATEGORICAL_COLUMNS.to_vec(),
        }
    }

    pub fn is_categorical(&self, field: &str) -> bool {
        self.categorical.contains(&field)
    }

    /// Encodes labeled fields into their produced columns.
    ///
    /// # Errors
    /// An empty value, text in a non-categorical field or a number in a
    /// categorical one is a [`PreprocessingError::UnencodableColumn`]; records
    /// reaching the encoder have already passed the required-field gate.
    pub fn encode(
        &self,
        fields: &[(&'static str, FieldValue)],
    ) -> Result<ProducedColumns, PreprocessingError> {
        let mut produced = ProducedColumns::new();
        for (field, value) in fields {
            let unencodable = |reason: &str| PreprocessingError::UnencodableColumn {
                column: field.to_string(),
                reason: reason.to_string(),
            };
            if value.is_empty() {
                return Err(unencodable("value is empty"));
            }

            let (column, encoded) = match value {
                FieldValue::Text(label) if self.is_categorical(field) => {
                    (schema::indicator_column(field, label.trim()), 1.0)
                }
                FieldValue::Flag(flag) if !self.is_categorical(field) => {
                    (field.to_string(), if *flag { 1.0 } else { 0.0 })
                }
                FieldValue::Number(number) if !self.is_categorical(field) => {
                    (field.to_string(), *number)
                }
                FieldValue::Text(_) => return Err(unencodable("expected a numeric value")),
                _ => return Err(unencodable("expected a category label")),
            };
            if produced.insert(column.clone(), encoded).is_some() {
                return Err(PreprocessingError::UnencodableColumn {
                    column,
                    reason: "produced twice".to_string(),
                });
            }
        }
        Ok(produced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot_categorical_and_passthrough() {
        let fields = vec![
            ("HomePlanet", FieldValue::from("Earth")),
            ("CryoSleep", FieldValue::from(true)),
            ("Age", FieldValue::from(24.0)),
            ("Side", FieldValue::from("P")),
        ];
        let produced = OneHotEncoder::new().encode(&fields).unwrap();

        assert_eq!(produced.len(), 4);
        assert_eq!(produced["HomePlanet_Earth"], 1.0);
        assert_eq!(produced["CryoSleep"], 1.0);
        assert_eq!(produced["Age"], 24.0);
        assert_eq!(produced["Side_P"], 1.0);
        assert!(!produced.contains_key("HomePlanet"));
    }

    #[test]
    fn test_one_hot_false_flag_is_zero() {
        let produced = OneHotEncoder::new()
            .encode(&[("VIP", FieldValue::Flag(false))])
            .unwrap();
        assert_eq!(produced["VIP"], 0.0);
    }

    #[test]
    fn test_one_hot_unseen_category_still_produced() {
        let produced = OneHotEncoder::new()
            .encode(&[("Deck", FieldValue::from("Q"))])
            .unwrap();
        assert_eq!(produced["Deck_Q"], 1.0);
    }

    #[test]
    fn test_one_hot_rejects_empty_value() {
        let result = OneHotEncoder::new().encode(&[("Age", FieldValue::Number(f64::NAN))]);
        assert!(matches!(
            result,
            Err(PreprocessingError::UnencodableColumn { ref column, .. }) if column == "Age"
        ));
        assert!(OneHotEncoder::new()
            .encode(&[("Deck", FieldValue::Missing)])
            .is_err());
    }

    #[test]
    fn test_one_hot_rejects_type_confusion() {
        assert!(OneHotEncoder::new()
            .encode(&[("Age", FieldValue::from("old"))])
            .is_err());
        assert!(OneHotEncoder::new()
            .encode(&[("Deck", FieldValue::from(3.0))])
            .is_err());
    }

    #[test]
    fn test_one_hot_duplicate_field() {
        let fields = [("Age", FieldValue::from(1.0)), ("Age", FieldValue::from(2.0))];
        assert!(OneHotEncoder::new().encode(&fields).is_err());
    }
}
