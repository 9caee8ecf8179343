//! Categorical record fields.
//!
//! Each category knows the label it carries in input files and the one-hot
//! column it produces (`<Field>_<label>`).

use crate::record::error::RecordError;
use crate::record::schema;
use std::fmt;
use std::str::FromStr;

/// A closed set of categories for one record field.
pub trait Categorical: Copy + FromStr<Err = RecordError> + 'static {
    /// Name of the record field this category belongs to.
    const FIELD: &'static str;

    /// Every category, in vocabulary order.
    fn all() -> &'static [Self];

    /// The label used in input files and in the indicator column name.
    fn label(&self) -> &'static str;

    /// Name of the one-hot indicator column for this category.
    fn column_name(&self) -> String {
        schema::indicator_column(Self::FIELD, self.label())
    }
}

macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident, $field:expr, { $($variant:ident => $label:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Categorical for $name {
            const FIELD: &'static str = $field;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim();
                Self::all()
                    .iter()
                    .copied()
                    .find(|category| category.label() == token)
                    .ok_or_else(|| RecordError::InvalidValue {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

categorical!(
    /// Planet of departure.
    HomePlanet, schema::HOME_PLANET, {
        Earth => "Earth",
        Europa => "Europa",
        Mars => "Mars",
    }
);

categorical!(
    /// Planet the passenger was bound for.
    Destination, schema::DESTINATION, {
        Trappist1e => "TRAPPIST-1e",
        Cancri55e => "55 Cancri e",
        PsoJ318 => "PSO J318.5-22",
    }
);

categorical!(
    /// Cabin deck.
    Deck, schema::DECK, {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
        E => "E",
        F => "F",
        G => "G",
        T => "T",
    }
);

categorical!(
    /// Cabin side: port or starboard.
    Side, schema::SIDE, {
        Port => "P",
        Starboard => "S",
    }
);
