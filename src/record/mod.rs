//! Passenger records and the field derivations that feed the encoder.
//!
//! - [`cabin`] decodes `deck/number/side` tokens.
//! - [`group`] derives GroupSize from passenger identifiers.
//! - [`spend`] sums the itemized spend into TotalSpend.
//! - [`PassengerInput`] holds untyped fields until the gate accepts them and
//!   they become a [`RawRecord`].

pub mod cabin;
pub mod category;
pub mod error;
pub mod group;
mod input;
mod raw;
pub mod schema;
pub mod spend;

pub use cabin::{CabinToken, MalformedCabin};
pub use category::{Categorical, Deck, Destination, HomePlanet, Side};
pub use error::RecordError;
pub use input::{parse_flag, PassengerForm, PassengerInput};
pub use raw::{Bounds, RawRecord, Spending, AGE_BOUNDS, CABIN_NUM_BOUNDS, GROUP_SIZE_BOUNDS};
