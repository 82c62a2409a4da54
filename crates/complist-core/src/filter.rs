//! Visibility — does a row survive the current [`Predicate`]?
//!
//! A row is visible when at least one of its fields matches. Every column is
//! searched; which columns get their matches highlighted is a display
//! concern ([`CategoryOptions::highlight_columns`]).
//!
//! [`CategoryOptions::highlight_columns`]: crate::CategoryOptions::highlight_columns

use crate::pattern::Predicate;
use crate::types::Row;

/// True when any field of `row` matches `predicate`.
pub fn is_visible(row: &Row, predicate: &Predicate) -> bool {
    row.fields().iter().any(|field| predicate.is_match(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile;

    #[test]
    fn any_field_is_enough() {
        let row = Row::from(["open", "Open a URL in a new tab", "o"]);
        assert!(is_visible(&row, &compile("new tab")));
        assert!(is_visible(&row, &compile("ope")));
        assert!(!is_visible(&row, &compile("close")));
    }

    #[test]
    fn token_order_is_respected() {
        let row = Row::from(["bar foo"]);
        assert!(!is_visible(&row, &compile("foo bar")));
        assert!(is_visible(&row, &compile("bar foo")));
        assert!(is_visible(&row, &compile("ba fo")));
    }

    #[test]
    fn tokens_must_land_in_one_field() {
        // "open" only in field 0, "tab" only in field 1.
        let row = Row::from(["open", "new tab"]);
        assert!(!is_visible(&row, &compile("open tab")));
    }
}
