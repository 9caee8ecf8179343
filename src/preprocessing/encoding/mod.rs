//! Categorical feature encoding.
//!
//! [`OneHotEncoder`] turns a labeled record into a sparse set of produced
//! columns. Which of those columns reach the model, and in what order, is
//! decided by [`crate::preprocessing::alignment`].

mod one_hot;

pub use one_hot::{OneHotEncoder, ProducedColumns};

/// Strategy for produced columns that are not in the model column set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HandleUnknown {
    /// Fail when an unknown column is produced.
    Error,
    /// Drop unknown columns; an unseen category encodes as all-zero indicators.
    #[default]
    Ignore,
}
