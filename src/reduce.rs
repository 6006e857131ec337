//! The keep-newest reduction.
//!
//! This is the whole point of the tool: collapse every group of records
//! sharing a `path` down to its recency winner, then order the survivors
//! by when they were indexed. One linear pass over the input plus one sort.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::models::Record;

/// Deduplicate `records` by `path`, keeping the most recently indexed record
/// for each, and return the survivors sorted ascending by `indexed_at`.
///
/// A held record is replaced only when a later one is strictly newer, so on
/// an exact `indexed_at` tie the first record seen wins. Survivors that share
/// an `indexed_at` keep the order in which their paths first appeared in the
/// input: the map preserves insertion order and the sort is stable.
pub fn reduce(records: Vec<Record>) -> Vec<Record> {
    let mut newest: IndexMap<String, Record> = IndexMap::with_capacity(records.len());

    for record in records {
        match newest.entry(record.path.clone()) {
            Entry::Occupied(mut held) => {
                if record.indexed_at > held.get().indexed_at {
                    held.insert(record);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    let mut survivors: Vec<Record> = newest.into_values().collect();
    survivors.sort_by_key(|record| record.indexed_at);
    survivors
}
