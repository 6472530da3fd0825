//! Ordering and selection helpers for collection listings

use crate::content::Dated;

/// Sort entries newest first.
///
/// The sort is stable, so entries sharing a date keep their declaration
/// order across repeated runs.
pub fn sort_newest_first<T: Dated>(entries: &mut [T]) {
    entries.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
}

/// The first `amount` entries of an already-sorted slice
pub fn recent<T>(entries: &[T], amount: usize) -> &[T] {
    &entries[..amount.min(entries.len())]
}
