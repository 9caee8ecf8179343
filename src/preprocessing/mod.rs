//! Feature preparation: from a typed record to the classifier's input row.
//!
//! # Components
//!
//! - [`OneHotEncoder`]: categorical fields to indicator columns
//! - [`ModelColumnSet`] and [`alignment::align`]: model column order, zero padding
//! - [`FittedScaler`]: stored standard or min-max parameters for the numeric columns
//! - [`FeatureEncoder`]: the whole chain for one record
//!
//! # Example
//!
//! ```ignore
//! use spaceship_transport::preprocessing::{encode, FittedScaler, FittedTransformer, ModelColumnSet};
//!
//! let columns = ModelColumnSet::full_vocabulary()?;
//! let scaler = FittedScaler::from_params(scaler_params)?;
//! let vector = encode(&record, &columns, &scaler)?;
//! ```

pub mod alignment;
pub mod encoder;
pub mod encoding;
pub mod error;
pub mod scaling;
pub mod traits;

pub use alignment::ModelColumnSet;
pub use encoder::{encode, EncodedFeatureVector, FeatureEncoder};
pub use encoding::{HandleUnknown, OneHotEncoder, ProducedColumns};
pub use error::PreprocessingError;
pub use scaling::{
    FittedMinMaxScaler, FittedScaler, FittedStandardScaler, MinMaxScalerParams, ScalerParams,
    StandardScalerParams,
};
pub use traits::FittedTransformer;
