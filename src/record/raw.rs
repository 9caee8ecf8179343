//! Fully typed passenger records.

use crate::record::category::{Categorical, Deck, Destination, HomePlanet, Side};
use crate::record::error::RecordError;
use crate::record::schema;
use crate::record::spend;
use crate::validation::FieldValue;

/// Inclusive bounds for a numeric field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `value` if it lies within the bounds.
    pub fn check(&self, field: &'static str, value: f64) -> Result<f64, RecordError> {
        if value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(RecordError::OutOfBounds {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const AGE_BOUNDS: Bounds = Bounds::new(0.0, 300.0);
pub const GROUP_SIZE_BOUNDS: Bounds = Bounds::new(1.0, 300.0);
pub const CABIN_NUM_BOUNDS: Bounds = Bounds::new(0.0, 2000.0);

/// The five itemized spend amounts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spending {
    pub room_service: f64,
    pub food_court: f64,
    pub shopping_mall: f64,
    pub spa: f64,
    pub vr_deck: f64,
}

impl Spending {
    /// TotalSpend: sum of the five amounts.
    pub fn total(&self) -> f64 {
        spend::total(
            self.room_service,
            self.food_court,
            self.shopping_mall,
            self.spa,
            self.vr_deck,
        )
    }
}

/// One passenger, with every field present and typed.
///
/// TotalSpend is not stored; it is always derived from [`Spending`].
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    pub home_planet: HomePlanet,
    pub cryo_sleep: bool,
    pub destination: Destination,
    pub age: f64,
    pub vip: bool,
    pub spending: Spending,
    pub group_size: u32,
    pub deck: Deck,
    pub cabin_num: u32,
    pub side: Side,
}

impl RawRecord {
    pub fn total_spend(&self) -> f64 {
        self.spending.total()
    }

    /// Checks every numeric field against its declared bounds.
    pub fn check_bounds(&self) -> Result<(), RecordError> {
        AGE_BOUNDS.check(schema::AGE, self.age)?;
        GROUP_SIZE_BOUNDS.check(schema::GROUP_SIZE, f64::from(self.group_size))?;
        CABIN_NUM_BOUNDS.check(schema::CABIN_NUM, f64::from(self.cabin_num))?;

        let amounts = [
            (schema::ROOM_SERVICE, self.spending.room_service),
            (schema::FOOD_COURT, self.spending.food_court),
            (schema::SHOPPING_MALL, self.spending.shopping_mall),
            (schema::SPA, self.spending.spa),
            (schema::VR_DECK, self.spending.vr_deck),
        ];
        for (field, amount) in amounts {
            if !amount.is_finite() || amount < 0.0 {
                return Err(RecordError::InvalidValue {
                    field,
                    value: amount.to_string(),
                });
            }
        }
        let total = self.total_spend();
        if !total.is_finite() {
            return Err(RecordError::InvalidValue {
                field: schema::TOTAL_SPEND,
                value: total.to_string(),
            });
        }
        Ok(())
    }

    /// The record as labeled values, in canonical field order.
    pub fn labeled_fields(&self) -> [(&'static str, FieldValue); 15] {
        [
            (schema::HOME_PLANET, self.home_planet.label().into()),
            (schema::CRYO_SLEEP, self.cryo_sleep.into()),
            (schema::DESTINATION, self.destination.label().into()),
            (schema::AGE, self.age.into()),
            (schema::VIP, self.vip.into()),
            (schema::ROOM_SERVICE, self.spending.room_service.into()),
            (schema::FOOD_COURT, self.spending.food_court.into()),
            (schema::SHOPPING_MALL, self.spending.shopping_mall.into()),
            (schema::SPA, self.spending.spa.into()),
            (schema::VR_DECK, self.spending.vr_deck.into()),
            (schema::GROUP_SIZE, f64::from(self.group_size).into()),
            (schema::DECK, self.deck.label().into()),
            (schema::CABIN_NUM, f64::from(self.cabin_num).into()),
            (schema::SIDE, self.side.label().into()),
            (schema::TOTAL_SPEND, self.total_spend().into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation;

    fn record() -> RawRecord {
        RawRecord {
            home_planet: HomePlanet::Earth,
            cryo_sleep: false,
            destination: Destination::Trappist1e,
            age: 24.0,
            vip: false,
            spending: Spending {
                room_service: 100.0,
                ..Spending::default()
            },
            group_size: 1,
            deck: Deck::B,
            cabin_num: 3,
            side: Side::Port,
        }
    }

    #[test]
    fn test_total_spend_is_derived() {
        let mut r = record();
        assert_eq!(r.total_spend(), 100.0);
        r.spending.spa = 25.5;
        assert_eq!(r.total_spend(), 125.5);
    }

    #[test]
    fn test_labeled_fields_canonical_order() {
        let fields = record().labeled_fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, schema::CANONICAL_FIELDS.to_vec());
        assert_eq!(fields[14].1, FieldValue::Number(100.0));
        assert_eq!(fields[0].1, FieldValue::Text("Earth".to_string()));
    }

    #[test]
    fn test_labeled_fields_complete() {
        let values: Vec<FieldValue> = record()
            .labeled_fields()
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        assert!(validation::is_complete(&values));
    }

    #[test]
    fn test_check_bounds() {
        assert!(record().check_bounds().is_ok());

        let mut old = record();
        old.age = 301.0;
        assert!(matches!(
            old.check_bounds(),
            Err(RecordError::OutOfBounds { field: "Age", .. })
        ));

        let mut alone = record();
        alone.group_size = 0;
        assert!(alone.check_bounds().is_err());

        let mut far = record();
        far.cabin_num = 2001;
        assert!(far.check_bounds().is_err());

        let mut refund = record();
        refund.spending.food_court = -1.0;
        assert!(matches!(
            refund.check_bounds(),
            Err(RecordError::InvalidValue { field: "FoodCourt", .. })
        ));
    }

    #[test]
    fn test_check_bounds_rejects_overflowing_total() {
        let mut lavish = record();
        lavish.spending = Spending {
            room_service: 1e308,
            food_court: 1e308,
            shopping_mall: 1e308,
            spa: 1e308,
            vr_deck: 1e308,
        };
        assert!(lavish.total_spend().is_infinite());
        assert!(matches!(
            lavish.check_bounds(),
            Err(RecordError::InvalidValue { field: "TotalSpend", .. })
        ));
    }
}
