//! Total on-board spend.

/// Sums the five itemized spend fields.
///
/// Inputs are validated non-negative upstream; no clamping happens here. The
/// parts are added in ascending order so the sum is identical for every
/// argument order.
pub fn total(room_service: f64, food_court: f64, shopping_mall: f64, spa: f64, vr_deck: f64) -> f64 {
    let mut parts = [room_service, food_court, shopping_mall, spa, vr_deck];
    parts.sort_by(f64::total_cmp);
    parts.iter().sum()
}

/// Sums the spend fields, or returns `None` if any of them is absent.
///
/// An absent field is never counted as zero.
pub fn total_of(parts: [Option<f64>; 5]) -> Option<f64> {
    let [room_service, food_court, shopping_mall, spa, vr_deck] = parts;
    Some(total(room_service?, food_court?, shopping_mall?, spa?, vr_deck?))
}
