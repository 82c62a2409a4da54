//! Test builders for categories and recording delete callbacks.
//!
//! These panic on invalid input rather than returning `Result`.

use complist_core::{Category, CategoryOptions, DeleteFn, Row};
use std::cell::RefCell;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// DeleteLog
// ---------------------------------------------------------------------------

/// Records every row handed to a delete callback.
#[derive(Clone, Default)]
pub struct DeleteLog(Rc<RefCell<Vec<Row>>>);

impl DeleteLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends to this log.
    pub fn callback(&self) -> DeleteFn {
        let log = Rc::clone(&self.0);
        Box::new(move |row: &Row| log.borrow_mut().push(row.clone()))
    }

    pub fn rows(&self) -> Vec<Row> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

// ---------------------------------------------------------------------------
// CategoryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Category`] fixtures.
///
/// ```rust
/// let log = DeleteLog::new();
/// let category = CategoryBuilder::new("words")
///     .row(["apple", "fruit"])
///     .row(["zebra", "animal"])
///     .deletable(&log)
///     .build();
/// ```
pub struct CategoryBuilder {
    name: String,
    rows: Vec<Row>,
    callback: Option<DeleteFn>,
    options: CategoryOptions,
}

impl CategoryBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            callback: None,
            options: CategoryOptions::default(),
        }
    }

    pub fn row(mut self, row: impl Into<Row>) -> Self {
        self.rows.push(row.into());
        self
    }

    pub fn rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Row>,
    {
        self.rows.extend(rows.into_iter().map(Into::into));
        self
    }

    /// Single-column rows from plain strings.
    pub fn words(self, words: &[&str]) -> Self {
        self.rows(words.iter().map(|w| Row::new([*w])))
    }

    pub fn deletable(mut self, log: &DeleteLog) -> Self {
        self.callback = Some(log.callback());
        self
    }

    pub fn highlight_columns(mut self, columns: &[usize]) -> Self {
        self.options.highlight_columns = Some(columns.to_vec());
        self
    }

    pub fn unsorted(mut self) -> Self {
        self.options.sort = false;
        self
    }

    pub fn build(self) -> Category {
        Category::with_options(self.name, self.rows, self.callback, self.options)
            .expect("CategoryBuilder: invalid rows")
    }
}
