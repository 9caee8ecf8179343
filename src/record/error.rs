//! Row-level record errors.
//!
//! Every variant describes bad or incomplete user data. In the batch path these
//! are caught at the row boundary and turned into a "Missing values" outcome;
//! in the single-record path they block the prediction.

/// Error raised while turning user-entered or file-sourced fields into a record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// One or more required fields are empty or absent.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// A field holds a value that cannot be parsed for its type.
    #[error("invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },
    /// A numeric field lies outside its declared bounds.
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// The cabin token is not of the form `deck/number/side`.
    #[error("malformed cabin {0:?}, expected deck/number/side")]
    MalformedCabin(String),
    /// The passenger identifier is not of the form `group_member`.
    #[error("malformed passenger id {0:?}, expected group_member")]
    MalformedPassengerId(String),
    /// A field name that no record carries.
    #[error("unknown field {0:?}")]
    UnknownField(String),
    /// A derived field was supplied as input.
    #[error("{0} is derived from the spend fields and cannot be supplied")]
    DerivedField(&'static str),
}
