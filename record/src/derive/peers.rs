use crate::DELIMITER;
use crate::snapshot::RawSnapshot;

/// Reads the count packed in front of a `<count>@!@<extra>` field.
///
/// Without a delimiter the whole value is the count. A count that does not
/// parse gives `0`.
pub fn derive(snapshot: &RawSnapshot, field: &str) -> u64 {
    let raw = snapshot.text(field);
    let count = match raw.split_once(DELIMITER) {
        Some((count, _)) => count,
        None => raw.as_ref(),
    };
    count.trim().parse().unwrap_or_default()
}
