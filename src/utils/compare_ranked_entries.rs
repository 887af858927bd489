use crate::types::RankedEntry;
use std::cmp::Ordering;

/// Orders entries by count, highest first. Entries with equal counts fall
/// back to ascending word order for deterministic output.
pub fn compare_by_count_desc(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Orders entries ascending alphabetically by word. Tally keys are already
/// lower-cased, so this doubles as a case-insensitive ordering.
pub fn compare_by_word(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    a.0.cmp(&b.0)
}
