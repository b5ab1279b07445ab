// Record helpers
// Identifier assignment, lookup and partial-update merging over JSON records

use serde_json::Value;

use crate::storage::Record;

/// Compute the id to assign to the next created record.
///
/// Positional by contract: last record's id + 1, or 1 for an empty
/// collection. A collection with gaps or out-of-order ids yields a next id
/// derived solely from the final element.
pub fn next_id(records: &[Record]) -> u64 {
    records
        .last()
        .and_then(|record| record.get("id"))
        .and_then(Value::as_u64)
        .map_or(1, |id| id + 1)
}

/// Find the position of the record whose `id` field equals `id`
pub fn find_index(records: &[Record], id: u64) -> Option<usize> {
    records
        .iter()
        .position(|record| record.get("id").and_then(Value::as_u64) == Some(id))
}

/// Shallow-merge `patch` fields onto `existing`; patch fields win.
///
/// The `id` field is deliberately excluded so a partial update can never
/// reassign a record's identifier.
pub fn merge(existing: &mut Record, patch: Record) {
    for (field, value) in patch {
        if field == "id" {
            continue;
        }
        existing.insert(field, value);
    }
}
