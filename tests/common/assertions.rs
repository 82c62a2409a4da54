//! Assertion macros for complist harnesses.
//!
//! These wrap `pretty_assertions` so a failed ordering check prints a diff of
//! primary fields instead of two opaque `Vec<Row>` dumps.

use complist_core::Category;

/// Primary fields of the visible rows, in ranked order.
pub fn visible_primaries(category: &Category) -> Vec<String> {
    category
        .visible_rows()
        .map(|(_, row)| row.primary().to_string())
        .collect()
}

/// Assert the exact ranked view by primary field.
///
/// ```rust
/// assert_visible_order!(category, ["apple", "applesauce"]);
/// ```
#[macro_export]
macro_rules! assert_visible_order {
    ($category:expr, [$($primary:expr),* $(,)?]) => {{
        let actual = $crate::common::visible_primaries(&$category);
        let expected: Vec<String> = vec![$($primary.to_string()),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_visible_order! failed for query {:?}", $category.query()
        );
    }};
}

/// Assert that nothing is visible.
#[macro_export]
macro_rules! assert_view_empty {
    ($category:expr) => {{
        let category: &complist_core::Category = &$category;
        if category.visible_len() != 0 {
            panic!(
                "assert_view_empty! failed for query {:?}:\n  visible: {:?}",
                category.query(),
                $crate::common::visible_primaries(category)
            );
        }
    }};
}
