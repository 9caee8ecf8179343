//! Group membership derived from passenger identifiers.
//!
//! Identifiers look like `0013_01`: the part before `_` names the travel
//! group, the part after it the member. GroupSize is the number of rows in a
//! batch sharing the same group.

use crate::record::error::RecordError;
use std::collections::HashMap;

/// Extracts the group prefix of a `group_member` identifier.
pub fn group_id(passenger_id: &str) -> Result<&str, RecordError> {
    match passenger_id.trim().split_once('_') {
        Some((group, member)) if !group.is_empty() && !member.is_empty() => Ok(group),
        _ => Err(RecordError::MalformedPassengerId(passenger_id.to_string())),
    }
}

/// Computes the group size of every row, in input order.
///
/// Rows with a malformed identifier get `None` and do not count toward any
/// group; they are rejected later as incomplete.
pub fn group_sizes<S: AsRef<str>>(passenger_ids: &[S]) -> Vec<Option<u32>> {
    let groups: Vec<Option<&str>> = passenger_ids
        .iter()
        .map(|id| group_id(id.as_ref()).ok())
        .collect();

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for group in groups.iter().flatten() {
        *counts.entry(*group).or_insert(0) += 1;
    }

    groups
        .iter()
        .map(|group| group.and_then(|g| counts.get(g).copied()))
        .collect()
}
