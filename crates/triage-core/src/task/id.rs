//! Task identifier allocation.
//!
//! System-allocated task ids are `T` followed by exactly four zero-padded
//! digits. Allocation is gap-filling: the smallest unused positive number
//! wins, so deleting `T0002` makes it the next id handed out. The four-digit
//! format is a hard contract of the persisted schema; numbers past 9999 fall
//! outside it (the allocator keeps counting rather than wrapping, but the
//! resulting five-digit ids are no longer recognized as system ids).

use super::model::Task;
use std::collections::BTreeSet;

/// Parses the numeric suffix of a well-formed task id (`^T\d{4}$`).
/// Anything else, including ids the allocator never produced, yields `None`.
pub fn parse_task_number(id: &str) -> Option<u32> {
    let digits = id.strip_prefix('T')?;
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Formats a task number as `T` + 4 zero-padded digits.
pub fn format_task_id(number: u32) -> String {
    format!("T{:04}", number)
}

/// Returns the next available task id for the given collection.
///
/// Ids not matching the `TXXXX` format are ignored for numbering purposes,
/// and duplicate ids (malformed input) are deduplicated before the gap scan
/// so they cannot skew the result. An empty collection yields `T0001`.
pub fn next_available_id(tasks: &[Task]) -> String {
    let used: BTreeSet<u32> = tasks
        .iter()
        .filter_map(|task| parse_task_number(&task.id))
        .collect();

    let max = used.iter().next_back().copied().unwrap_or(0);
    let next = (1..=max + 1)
        .find(|number| !used.contains(number))
        .unwrap_or(max + 1);

    format_task_id(next)
}

/// Detects task ids (`T` + 4 digits) mentioned in free text, deduplicated in
/// first-seen order.
pub fn detect_task_ids(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut seen = BTreeSet::new();
    let mut found = Vec::new();

    let mut index = 0;
    while index + 5 <= bytes.len() {
        if bytes[index] == b'T' && bytes[index + 1..index + 5].iter().all(u8::is_ascii_digit) {
            let id = &text[index..index + 5];
            if seen.insert(id.to_string()) {
                found.push(id.to_string());
            }
            index += 5;
        } else {
            index += 1;
        }
    }

    found
}
