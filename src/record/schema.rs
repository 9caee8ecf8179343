//! Column names shared by the record, encoder and batch loader.
//!
//! The canonical field order is the order in which a record is materialized
//! before encoding. The numeric columns are the exact set (and order) the
//! fitted scaler was trained on.

pub const HOME_PLANET: &str = "HomePlanet";
pub const CRYO_SLEEP: &str = "CryoSleep";
pub const DESTINATION: &str = "Destination";
pub const AGE: &str = "Age";
pub const VIP: &str = "VIP";
pub const ROOM_SERVICE: &str = "RoomService";
pub const FOOD_COURT: &str = "FoodCourt";
pub const SHOPPING_MALL: &str = "ShoppingMall";
pub const SPA: &str = "Spa";
pub const VR_DECK: &str = "VRDeck";
pub const GROUP_SIZE: &str = "GroupSize";
pub const DECK: &str = "Deck";
pub const CABIN_NUM: &str = "Cabin_Num";
pub const SIDE: &str = "Side";
pub const TOTAL_SPEND: &str = "TotalSpend";

/// Raw cabin token column ("deck/number/side") of the batch format.
pub const CABIN: &str = "Cabin";
pub const PASSENGER_ID: &str = "PassengerId";
pub const NAME: &str = "Name";

/// The 15 fields of a record, in materialization order.
pub const CANONICAL_FIELDS: [&str; 15] = [
    HOME_PLANET,
    CRYO_SLEEP,
    DESTINATION,
    AGE,
    VIP,
    ROOM_SERVICE,
    FOOD_COURT,
    SHOPPING_MALL,
    SPA,
    VR_DECK,
    GROUP_SIZE,
    DECK,
    CABIN_NUM,
    SIDE,
    TOTAL_SPEND,
];

/// Fields that are one-hot encoded, with no dropped reference category.
pub const CATEGORICAL_COLUMNS: [&str; 4] = [HOME_PLANET, DESTINATION, DECK, SIDE];

/// Boolean fields, encoded as 0.0 / 1.0.
pub const FLAG_COLUMNS: [&str; 2] = [CRYO_SLEEP, VIP];

/// Columns passed through the fitted scaler, in scaler order.
pub const NUMERIC_COLUMNS: [&str; 9] = [
    AGE,
    ROOM_SERVICE,
    FOOD_COURT,
    SHOPPING_MALL,
    SPA,
    VR_DECK,
    CABIN_NUM,
    GROUP_SIZE,
    TOTAL_SPEND,
];

/// The five itemized spend fields summed into [`TOTAL_SPEND`].
pub const SPEND_COLUMNS: [&str; 5] = [ROOM_SERVICE, FOOD_COURT, SHOPPING_MALL, SPA, VR_DECK];

/// Columns a batch file must carry.
pub const REQUIRED_BATCH_COLUMNS: [&str; 12] = [
    PASSENGER_ID,
    HOME_PLANET,
    CRYO_SLEEP,
    CABIN,
    DESTINATION,
    AGE,
    VIP,
    ROOM_SERVICE,
    FOOD_COURT,
    SHOPPING_MALL,
    SPA,
    VR_DECK,
];

/// Name of the one-hot indicator column for `field` taking `category`.
pub fn indicator_column(field: &str, category: &str) -> String {
    format!("{field}_{category}")
}

/// Splits an indicator column name back into its categorical field and category.
///
/// Returns `None` when the name does not start with one of the
/// [`CATEGORICAL_COLUMNS`] followed by `_` and a non-empty category.
pub fn split_indicator(column: &str) -> Option<(&'static str, &str)> {
    CATEGORICAL_COLUMNS.iter().find_map(|field| {
        column
            .strip_prefix(field)
            .and_then(|rest| rest.strip_prefix('_'))
            .filter(|category| !category.is_empty())
            .map(|category| (*field, category))
    })
}

/// True if `column` is a non-indicator column an encoded record can produce.
pub fn is_base_column(column: &str) -> bool {
    FLAG_COLUMNS.contains(&column) || NUMERIC_COLUMNS.contains(&column)
}
