//! Ranking — order of the visible rows.
//!
//! Rows whose primary field starts with the raw query come first; within
//! each group the primary fields sort lexicographically (byte order, which is
//! Unicode scalar order for UTF-8). Only field 0 is consulted, whichever
//! field made the row visible.
//!
//! The comparator alone cannot order rows with equal primary fields, so
//! [`sort_by_rank`] uses a stable sort and such rows keep their incoming
//! order.

use crate::types::Row;
use std::cmp::Ordering;

/// Compare two primary-field strings under `raw_query`.
///
/// `raw_query` is the text as typed, not the compiled pattern, and the prefix
/// test is case-sensitive.
pub fn compare_primary(a: &str, b: &str, raw_query: &str) -> Ordering {
    match (a.starts_with(raw_query), b.starts_with(raw_query)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

/// Compare two rows by their primary field. See [`compare_primary`].
pub fn compare(a: &Row, b: &Row, raw_query: &str) -> Ordering {
    compare_primary(a.primary(), b.primary(), raw_query)
}

/// Stable-sort `items` by rank. `row_of` maps each item to the row it stands
/// for, so callers can sort ids or positions without cloning rows.
pub fn sort_by_rank<'r, T, F>(items: &mut [T], raw_query: &str, row_of: F)
where
    F: Fn(&T) -> &'r Row,
{
    items.sort_by(|a, b| compare(row_of(a), row_of(b), raw_query));
}
