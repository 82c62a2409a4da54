#![allow(unused)]
//! Category behaviour harness.
//!
//! # What this covers
//!
//! The observable contract of [`Category`] as a collaborator sees it: push a
//! query, read the ranked view, delete by identity.
//!
//! - **Matching**: empty query, token order, case folding, space collapse,
//!   meta characters taken literally, any-field visibility.
//! - **Ranking**: prefix-first, lexicographic fallback, stability under ties,
//!   field 0 only.
//! - **Deletion**: refusal without a callback, callback-then-remove, stale
//!   identities.
//! - **Options**: highlight columns and match spans, unsorted views.
//!
//! # Running
//!
//! ```sh
//! cargo test --test category_harness
//! ```

mod common;

use common::*;
use complist_core::{Category, CategoryError, CategoryOptions, Row, RowId};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[test]
fn empty_query_shows_every_row() {
    let mut c = CategoryBuilder::new("history").rows(history_rows()).build();
    c.set_query("");
    assert_eq!(c.visible_len(), c.len());
    assert_eq!(c.visible_len(), 5);
}

#[rstest]
#[case::exact_order("bar foo", true)]
#[case::partial_tokens("ba fo", true)]
#[case::reversed("foo bar", false)]
#[case::single_token("oo", true)]
fn token_order_matters(#[case] query: &str, #[case] visible: bool) {
    let mut c = CategoryBuilder::new("t").words(&["bar foo"]).build();
    c.set_query(query);
    assert_eq!(c.visible_len() == 1, visible, "query {query:?}");
}

#[rstest]
#[case("hello")]
#[case("WORLD")]
#[case("hElLo WoRlD")]
fn matching_ignores_case(#[case] query: &str) {
    let mut c = CategoryBuilder::new("t").words(&["Hello World"]).build();
    c.set_query(query);
    assert_visible_order!(c, ["Hello World"]);
}

#[test]
fn runs_of_spaces_act_like_one() {
    let rows = ["foo bar", "foobar", "bar foo", "food barn"];
    let mut collapsed = CategoryBuilder::new("a").words(&rows).build();
    let mut spaced = CategoryBuilder::new("b").words(&rows).build();

    collapsed.set_query("foo bar");
    spaced.set_query("foo    bar");

    assert_eq!(visible_primaries(&collapsed), visible_primaries(&spaced));
    assert_visible_order!(spaced, ["foo bar", "foobar", "food barn"]);
}

#[rstest]
#[case("a.b", &["a.b"])]
#[case("(x)", &["(x)"])]
#[case("1+1", &["1+1"])]
#[case("[ab]", &["[ab]"])]
#[case("^$", &["^$"])]
#[case("a|b", &["a|b"])]
#[case("c#", &["c#"])]
fn meta_characters_match_literally(#[case] query: &str, #[case] expected: &[&str]) {
    let mut c = CategoryBuilder::new("t")
        .words(&["a.b", "axb", "(x)", "x", "1+1", "11", "[ab]", "a", "^$", "a|b", "c#", "c"])
        .build();
    c.set_query(query);
    assert_eq!(visible_primaries(&c), expected.to_vec());
}

#[test]
fn any_field_makes_a_row_visible() {
    let mut c = CategoryBuilder::new("commands").rows(command_rows()).build();
    c.set_query("close");
    assert_visible_order!(c, ["tab-close", "tab-only"]);
}

#[test]
fn nothing_matches_gives_an_empty_view() {
    let mut c = CategoryBuilder::new("commands").rows(command_rows()).build();
    c.set_query("zzz");
    assert_view_empty!(c);
    assert_eq!(c.len(), 5);
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn prefix_matches_come_first() {
    let mut c = CategoryBuilder::new("t")
        .words(&["zebra", "apple", "applesauce"])
        .build();
    c.set_query("app");
    assert_visible_order!(c, ["apple", "applesauce"]);

    // "zebra" only joins the view when the query lets it through; it still
    // ranks behind every prefix match.
    let mut c = CategoryBuilder::new("t")
        .words(&["zebra app", "apple", "applesauce"])
        .build();
    c.set_query("app");
    assert_visible_order!(c, ["apple", "applesauce", "zebra app"]);
}

#[test]
fn non_prefix_matches_fall_back_to_lexicographic() {
    let mut c = CategoryBuilder::new("t")
        .words(&["my-app", "an-app", "the-app", "app"])
        .build();
    c.set_query("app");
    assert_visible_order!(c, ["app", "an-app", "my-app", "the-app"]);
}

#[test]
fn prefix_check_is_case_sensitive() {
    let mut c = CategoryBuilder::new("t").words(&["Apple", "apple", "bapple"]).build();
    c.set_query("app");
    // Only "apple" starts with the raw query; the rest sort bytewise.
    assert_visible_order!(c, ["apple", "Apple", "bapple"]);
}

#[test]
fn ties_keep_insertion_order() {
    let mut c = CategoryBuilder::new("t")
        .row(["same", "A"])
        .row(["other", "x"])
        .row(["same", "B"])
        .build();

    for query in ["", "s", "sa", "same", "", "am"] {
        c.set_query(query);
        let seconds: Vec<&str> = c
            .visible_rows()
            .filter(|(_, r)| r.primary() == "same")
            .map(|(_, r)| r.field(1).unwrap())
            .collect();
        assert_eq!(seconds, vec!["A", "B"], "query {query:?}");
    }
}

#[test]
fn rank_ignores_the_field_that_matched() {
    let mut c = CategoryBuilder::new("history").rows(history_rows()).build();
    // "rust" hits the title of the docs.rs row and the url of rust-lang.org;
    // order is decided by the url alone.
    c.set_query("rust");
    assert_visible_order!(c, ["https://docs.rs/regex", "https://rust-lang.org/"]);
}

#[test]
fn repeated_query_is_idempotent() {
    let mut c = CategoryBuilder::new("history").rows(history_rows()).build();
    c.set_query("example");
    let first: Vec<(RowId, Row)> = c.visible_rows().map(|(id, r)| (id, r.clone())).collect();
    c.set_query("example");
    let second: Vec<(RowId, Row)> = c.visible_rows().map(|(id, r)| (id, r.clone())).collect();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[test]
fn delete_without_callback_is_refused() {
    let mut c = CategoryBuilder::new("commands").rows(command_rows()).build();
    let before: Vec<Row> = c.rows().map(|(_, r)| r.clone()).collect();

    let err = c.delete(RowId::new(0)).unwrap_err();

    assert_eq!(err, CategoryError::NotDeletable);
    assert_eq!(err.to_string(), "Cannot delete this item.");
    let after: Vec<Row> = c.rows().map(|(_, r)| r.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn delete_hands_the_row_to_the_callback_once() {
    let log = DeleteLog::new();
    let mut c = CategoryBuilder::new("commands")
        .rows(command_rows())
        .deletable(&log)
        .build();

    c.set_query("tab");
    let (id, _) = c.visible_at(0).unwrap();
    c.delete(id).unwrap();

    assert_eq!(log.rows(), vec![Row::from(["tab-close", "Close the current tab"])]);
    assert_visible_order!(c, ["tab-only"]);

    for query in ["", "close", "tab-close", "t"] {
        c.set_query(query);
        assert!(
            c.visible_rows().all(|(_, r)| r.primary() != "tab-close"),
            "deleted row resurfaced for {query:?}"
        );
    }
    assert_eq!(log.len(), 1);
    assert_eq!(c.len(), 4);
}

#[test]
fn deleting_twice_reports_a_stale_identity() {
    let log = DeleteLog::new();
    let mut c = CategoryBuilder::new("t").words(&["a", "b"]).deletable(&log).build();
    let id = RowId::new(1);

    c.delete(id).unwrap();
    assert_eq!(c.delete(id), Err(CategoryError::InvalidRowIdentity(id)));
    assert_eq!(log.len(), 1);
}

#[test]
fn identities_survive_other_deletions() {
    let log = DeleteLog::new();
    let mut c = CategoryBuilder::new("t")
        .words(&["a", "b", "c", "d"])
        .deletable(&log)
        .build();

    c.delete(RowId::new(1)).unwrap();
    assert_eq!(c.row(RowId::new(2)).unwrap().primary(), "c");
    assert_eq!(c.field_at(RowId::new(3), 0), Ok("d"));
    c.delete(RowId::new(3)).unwrap();
    assert_visible_order!(c, ["a", "c"]);
}

// ---------------------------------------------------------------------------
// Construction and options
// ---------------------------------------------------------------------------

#[test]
fn ragged_rows_are_rejected() {
    let err = Category::new("t", vec![Row::from(["a", "b"]), Row::from(["c"])], None).unwrap_err();
    assert_eq!(
        err,
        CategoryError::ArityMismatch {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn field_access_is_bounds_checked() {
    let c = CategoryBuilder::new("commands").rows(command_rows()).build();
    assert_eq!(
        c.field_at(RowId::new(0), 2),
        Err(CategoryError::OutOfRange { column: 2, arity: 2 })
    );
}

#[test]
fn highlight_columns_never_hide_rows() {
    let mut c = CategoryBuilder::new("commands")
        .rows(command_rows())
        .highlight_columns(&[0])
        .build();
    c.set_query("close");
    // Visibility still searches the description column.
    assert_visible_order!(c, ["tab-close", "tab-only"]);

    let (_, only) = c.visible_at(1).unwrap();
    assert!(c.match_spans(only, 0).is_empty());
    assert!(c.match_spans(only, 1).is_empty());
    let (_, close) = c.visible_at(0).unwrap();
    assert_eq!(c.match_spans(close, 0), vec![4..9]);
}

#[test]
fn match_spans_mark_tokens_in_query_order() {
    let mut c = CategoryBuilder::new("history").rows(history_rows()).build();
    c.set_query("rust lang");
    assert_visible_order!(c, ["https://rust-lang.org/"]);

    let (_, row) = c.visible_at(0).unwrap();
    assert_eq!(c.match_spans(row, 0), vec![8..12, 13..17]);
    assert_eq!(c.match_spans(row, 1), vec![0..4, 17..21]);
    assert!(c.match_spans(row, 2).is_empty());
}

#[test]
fn unsorted_category_keeps_insertion_order() {
    let mut c = CategoryBuilder::new("t")
        .words(&["zebra", "apple", "applesauce", "snapple"])
        .unsorted()
        .build();
    c.set_query("app");
    assert_visible_order!(c, ["apple", "applesauce", "snapple"]);
}

#[test]
fn empty_category_accepts_any_query() {
    let mut c = Category::new("empty", Vec::<Row>::new(), None).unwrap();
    c.set_query("anything");
    assert_view_empty!(c);
    assert!(c.is_empty());
}
