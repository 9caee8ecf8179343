//! Untyped passenger input, as entered in a form or read from a file.
//!
//! Every field is kept as text until [`PassengerInput::to_record`] runs the
//! required-field gate and parses it. CryoSleep and VIP share a single
//! boolean contract, see [`parse_flag`].

use crate::record::cabin::{self, CabinToken};
use crate::record::error::RecordError;
use crate::record::raw::{RawRecord, Spending};
use crate::record::schema;
use crate::validation::{self, FieldValue};

/// Parses a boolean field.
///
/// Accepted tokens, case-insensitive: `true`/`false`, `1`/`0`, `yes`/`no`
/// and the form labels `oui`/`non`. Anything else is an invalid value.
pub fn parse_flag(field: &'static str, raw: &str) -> Result<bool, RecordError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "oui" => Ok(true),
        "false" | "0" | "no" | "non" => Ok(false),
        _ => Err(RecordError::InvalidValue {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, RecordError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| RecordError::InvalidValue {
            field,
            value: raw.to_string(),
        })
}

/// Parses a whole number; `3` and `3.0` are both accepted.
fn parse_count(field: &'static str, raw: &str) -> Result<u32, RecordError> {
    let invalid = || RecordError::InvalidValue {
        field,
        value: raw.to_string(),
    };
    let value = parse_number(field, raw)?;
    if value.fract() != 0.0 {
        return Err(invalid());
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(RecordError::OutOfBounds {
            field,
            value,
            min: 0.0,
            max: f64::from(u32::MAX),
        });
    }
    Ok(value as u32)
}

/// Passenger fields before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassengerInput {
    pub home_planet: Option<String>,
    pub cryo_sleep: Option<String>,
    pub destination: Option<String>,
    pub age: Option<String>,
    pub vip: Option<String>,
    pub room_service: Option<String>,
    pub food_court: Option<String>,
    pub shopping_mall: Option<String>,
    pub spa: Option<String>,
    pub vr_deck: Option<String>,
    pub group_size: Option<String>,
    pub deck: Option<String>,
    pub cabin_num: Option<String>,
    pub side: Option<String>,
    malformed_cabin: Option<String>,
}

impl PassengerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field by its canonical name.
    ///
    /// `Cabin` is accepted too and decoded into Deck, Cabin_Num and Side.
    /// TotalSpend is derived and is refused.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), RecordError> {
        let value = value.into();
        let slot = match field {
            schema::HOME_PLANET => &mut self.home_planet,
            schema::CRYO_SLEEP => &mut self.cryo_sleep,
            schema::DESTINATION => &mut self.destination,
            schema::AGE => &mut self.age,
            schema::VIP => &mut self.vip,
            schema::ROOM_SERVICE => &mut self.room_service,
            schema::FOOD_COURT => &mut self.food_court,
            schema::SHOPPING_MALL => &mut self.shopping_mall,
            schema::SPA => &mut self.spa,
            schema::VR_DECK => &mut self.vr_deck,
            schema::GROUP_SIZE => &mut self.group_size,
            schema::DECK => &mut self.deck,
            schema::CABIN_NUM => &mut self.cabin_num,
            schema::SIDE => &mut self.side,
            schema::CABIN => {
                self.set_cabin(&value);
                return Ok(());
            }
            schema::TOTAL_SPEND => return Err(RecordError::DerivedField(schema::TOTAL_SPEND)),
            other => return Err(RecordError::UnknownField(other.to_string())),
        };
        *slot = Some(value);
        Ok(())
    }

    /// Decodes a `deck/number/side` token into the three cabin fields.
    ///
    /// A malformed token leaves all three empty, so the record fails the gate.
    pub fn set_cabin(&mut self, token: &str) {
        let decoded = cabin::decode(token);
        self.malformed_cabin = match &decoded {
            CabinToken::Parsed { .. } => None,
            CabinToken::Malformed { token, .. } if token.trim().is_empty() => None,
            CabinToken::Malformed { token, .. } => Some(token.clone()),
        };
        let (deck, number, side) = decoded.into_parts();
        self.deck = deck.map(String::from);
        self.cabin_num = number.map(|n| n.to_string());
        self.side = side.map(String::from);
    }

    /// Sets GroupSize from a derived group count.
    pub fn set_group_size(&mut self, size: Option<u32>) {
        self.group_size = size.map(|n| n.to_string());
    }

    /// The 14 user-supplied fields as seen by the gate, in canonical order.
    pub fn fields(&self) -> [(&'static str, FieldValue); 14] {
        [
            (schema::HOME_PLANET, self.home_planet.as_ref().into()),
            (schema::CRYO_SLEEP, self.cryo_sleep.as_ref().into()),
            (schema::DESTINATION, self.destination.as_ref().into()),
            (schema::AGE, self.age.as_ref().into()),
            (schema::VIP, self.vip.as_ref().into()),
            (schema::ROOM_SERVICE, self.room_service.as_ref().into()),
            (schema::FOOD_COURT, self.food_court.as_ref().into()),
            (schema::SHOPPING_MALL, self.shopping_mall.as_ref().into()),
            (schema::SPA, self.spa.as_ref().into()),
            (schema::VR_DECK, self.vr_deck.as_ref().into()),
            (schema::GROUP_SIZE, self.group_size.as_ref().into()),
            (schema::DECK, self.deck.as_ref().into()),
            (schema::CABIN_NUM, self.cabin_num.as_ref().into()),
            (schema::SIDE, self.side.as_ref().into()),
        ]
    }

    /// True iff every field is populated.
    pub fn is_complete(&self) -> bool {
        let values: Vec<FieldValue> = self.fields().into_iter().map(|(_, v)| v).collect();
        validation::is_complete(&values)
    }

    /// Runs the gate, parses every field and checks the declared bounds.
    pub fn to_record(&self) -> Result<RawRecord, RecordError> {
        let missing = validation::missing_fields(&self.fields());
        if !missing.is_empty() {
            return Err(match &self.malformed_cabin {
                Some(token) if missing.contains(&schema::DECK) => {
                    RecordError::MalformedCabin(token.clone())
                }
                _ => RecordError::MissingFields(missing),
            });
        }

        let flag = |field, value: &Option<String>| {
            required(value, field).and_then(|raw| parse_flag(field, raw))
        };
        let number = |field, value: &Option<String>| {
            required(value, field).and_then(|raw| parse_number(field, raw))
        };
        let count = |field, value: &Option<String>| {
            required(value, field).and_then(|raw| parse_count(field, raw))
        };

        let record = RawRecord {
            home_planet: required(&self.home_planet, schema::HOME_PLANET)?.parse()?,
            cryo_sleep: flag(schema::CRYO_SLEEP, &self.cryo_sleep)?,
            destination: required(&self.destination, schema::DESTINATION)?.parse()?,
            age: number(schema::AGE, &self.age)?,
            vip: flag(schema::VIP, &self.vip)?,
            spending: Spending {
                room_service: number(schema::ROOM_SERVICE, &self.room_service)?,
                food_court: number(schema::FOOD_COURT, &self.food_court)?,
                shopping_mall: number(schema::SHOPPING_MALL, &self.shopping_mall)?,
                spa: number(schema::SPA, &self.spa)?,
                vr_deck: number(schema::VR_DECK, &self.vr_deck)?,
            },
            group_size: count(schema::GROUP_SIZE, &self.group_size)?,
            deck: required(&self.deck, schema::DECK)?.parse()?,
            cabin_num: count(schema::CABIN_NUM, &self.cabin_num)?,
            side: required(&self.side, schema::SIDE)?.parse()?,
        };
        record.check_bounds()?;
        Ok(record)
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, RecordError> {
    value
        .as_deref()
        .ok_or_else(|| RecordError::MissingFields(vec![field]))
}

/// A single form submission: passenger fields plus an optional display name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassengerForm {
    pub name: Option<String>,
    pub input: PassengerInput,
}

impl PassengerForm {
    /// Builds a form from `(field, value)` pairs; `Name` sets the display name.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = PassengerForm::default();
        for (field, value) in pairs {
            match field.as_ref().trim() {
                schema::NAME => form.name = Some(value.into()),
                other => form.input.set(other, value)?,
            }
        }
        Ok(form)
    }

    /// The name to display, if one was given.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::category::{Deck, Destination, HomePlanet, Side};

    fn earth_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("HomePlanet", "Earth"),
            ("CryoSleep", "False"),
            ("Destination", "TRAPPIST-1e"),
            ("Age", "24"),
            ("VIP", "False"),
            ("RoomService", "100"),
            ("FoodCourt", "0"),
            ("ShoppingMall", "0"),
            ("Spa", "0"),
            ("VRDeck", "0"),
            ("GroupSize", "1"),
            ("Deck", "B"),
            ("Cabin_Num", "3"),
            ("Side", "P"),
        ]
    }

    #[test]
    fn test_parse_flag_contract() {
        for raw in ["True", "true", "TRUE", "1", "yes", "Oui", " true "] {
            assert!(parse_flag("VIP", raw).unwrap(), "{raw}");
        }
        for raw in ["False", "false", "0", "No", "non"] {
            assert!(!parse_flag("CryoSleep", raw).unwrap(), "{raw}");
        }
        assert!(parse_flag("VIP", "maybe").is_err());
        assert!(parse_flag("VIP", "1.0").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("GroupSize", "3").unwrap(), 3);
        assert_eq!(parse_count("GroupSize", "3.0").unwrap(), 3);
        assert!(parse_count("GroupSize", "3.5").is_err());
        assert!(parse_count("GroupSize", "-1").is_err());
        assert!(parse_count("GroupSize", "abc").is_err());
    }

    #[test]
    fn test_to_record_from_form() {
        let form = PassengerForm::from_pairs(earth_pairs()).unwrap();
        let record = form.input.to_record().unwrap();

        assert_eq!(record.home_planet, HomePlanet::Earth);
        assert!(!record.cryo_sleep);
        assert_eq!(record.destination, Destination::Trappist1e);
        assert_eq!(record.age, 24.0);
        assert_eq!(record.deck, Deck::B);
        assert_eq!(record.cabin_num, 3);
        assert_eq!(record.side, Side::Port);
        assert_eq!(record.total_spend(), 100.0);
        assert_eq!(form.display_name(), None);
    }

    #[test]
    fn test_to_record_reports_missing_fields() {
        let pairs: Vec<_> = earth_pairs()
            .into_iter()
            .filter(|(field, _)| *field != "Age" && *field != "Spa")
            .collect();
        let form = PassengerForm::from_pairs(pairs).unwrap();
        assert!(!form.input.is_complete());
        assert_eq!(
            form.input.to_record(),
            Err(RecordError::MissingFields(vec!["Age", "Spa"]))
        );
    }

    #[test]
    fn test_blank_value_is_missing() {
        let mut form = PassengerForm::from_pairs(earth_pairs()).unwrap();
        form.input.set("HomePlanet", "  ").unwrap();
        assert_eq!(
            form.input.to_record(),
            Err(RecordError::MissingFields(vec!["HomePlanet"]))
        );
    }

    #[test]
    fn test_cabin_token_sets_three_fields() {
        let mut input = PassengerInput::new();
        input.set("Cabin", "F/1534/S").unwrap();
        assert_eq!(input.deck.as_deref(), Some("F"));
        assert_eq!(input.cabin_num.as_deref(), Some("1534"));
        assert_eq!(input.side.as_deref(), Some("S"));
    }

    #[test]
    fn test_malformed_cabin_fails_gate() {
        let mut form = PassengerForm::from_pairs(earth_pairs()).unwrap();
        form.input.set_cabin("B3P");
        assert_eq!(form.input.deck, None);
        assert_eq!(
            form.input.to_record(),
            Err(RecordError::MalformedCabin("B3P".to_string()))
        );
    }

    #[test]
    fn test_empty_cabin_is_missing() {
        let mut form = PassengerForm::from_pairs(earth_pairs()).unwrap();
        form.input.set_cabin("");
        assert_eq!(
            form.input.to_record(),
            Err(RecordError::MissingFields(vec!["Deck", "Cabin_Num", "Side"]))
        );
    }

    #[test]
    fn test_unknown_deck_letter_is_invalid() {
        let mut form = PassengerForm::from_pairs(earth_pairs()).unwrap();
        form.input.set_cabin("Z/3/P");
        assert!(matches!(
            form.input.to_record(),
            Err(RecordError::InvalidValue { field: "Deck", .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_age() {
        let mut form = PassengerForm::from_pairs(earth_pairs()).unwrap();
        form.input.set("Age", "301").unwrap();
        assert!(matches!(
            form.input.to_record(),
            Err(RecordError::OutOfBounds { field: "Age", .. })
        ));
    }

    #[test]
    fn test_total_spend_cannot_be_supplied() {
        let result = PassengerForm::from_pairs([("TotalSpend", "5")]);
        assert_eq!(result, Err(RecordError::DerivedField("TotalSpend")));
    }

    #[test]
    fn test_unknown_field() {
        let result = PassengerForm::from_pairs([("Planet", "Earth")]);
        assert_eq!(result, Err(RecordError::UnknownField("Planet".to_string())));
    }

    #[test]
    fn test_display_name() {
        let form = PassengerForm::from_pairs([("Name", "  Juanna Vines ")]).unwrap();
        assert_eq!(form.display_name(), Some("Juanna Vines"));

        let blank = PassengerForm::from_pairs([("Name", "   ")]).unwrap();
        assert_eq!(blank.display_name(), None);
    }

    #[test]
    fn test_group_size_from_derivation() {
        let mut form = PassengerForm::from_pairs(earth_pairs()).unwrap();
        form.input.set_group_size(Some(4));
        assert_eq!(form.input.to_record().unwrap().group_size, 4);

        form.input.set_group_size(None);
        assert_eq!(
            form.input.to_record(),
            Err(RecordError::MissingFields(vec!["GroupSize"]))
        );
    }
}
