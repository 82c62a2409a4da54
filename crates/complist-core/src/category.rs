//! Category — one completion list: rows, current query, ranked view and
//! deletion policy.
//!
//! The collaborator builds a category once, calls [`Category::set_query`] on
//! every input change and reads [`Category::visible_rows`] back for display.
//! Deletion goes through [`Category::delete`] with the [`RowId`] shown to the
//! user, never a display position.
//!
//! # Recompute
//!
//! `set_query` always rebuilds the ranked view. When the new query extends
//! the previous one, only the rows that were visible are re-filtered: a
//! longer query can only hide rows, never reveal them. Any other edit
//! re-filters every row.

use crate::error::{CategoryError, Result};
use crate::pattern::{self, Predicate};
use crate::types::{Row, RowId};
use crate::{filter, rank};
use std::ops::Range;

/// Called with the full row right before it is removed.
pub type DeleteFn = Box<dyn FnMut(&Row)>;

/// Per-category behaviour knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOptions {
    /// Columns whose matched text the UI highlights. `None` (or an empty
    /// list) means all. Visibility always looks at every column.
    pub highlight_columns: Option<Vec<usize>>,
    /// When false the visible rows stay in insertion order.
    pub sort: bool,
}

impl Default for CategoryOptions {
    fn default() -> Self {
        Self {
            highlight_columns: None,
            sort: true,
        }
    }
}

#[derive(Debug)]
struct Entry {
    id: RowId,
    row: Row,
}

pub struct Category {
    name: String,
    arity: usize,
    /// Insertion order; ids strictly increasing, so lookups binary-search.
    entries: Vec<Entry>,
    query: String,
    predicate: Predicate,
    /// Positions into `entries`, in ranked order.
    visible: Vec<usize>,
    options: CategoryOptions,
    delete_callback: Option<DeleteFn>,
}

impl std::fmt::Debug for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Category")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("rows", &self.entries.len())
            .field("visible", &self.visible.len())
            .field("query", &self.query)
            .field("options", &self.options)
            .field("deletable", &self.delete_callback.is_some())
            .finish()
    }
}

impl Category {
    /// Build a category with default options.
    ///
    /// Fails when rows disagree on arity or a row has no fields. An empty row
    /// set is fine and gets arity 1.
    pub fn new<I>(
        name: impl Into<String>,
        rows: I,
        delete_callback: Option<DeleteFn>,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Row>,
    {
        Self::with_options(name, rows, delete_callback, CategoryOptions::default())
    }

    pub fn with_options<I>(
        name: impl Into<String>,
        rows: I,
        delete_callback: Option<DeleteFn>,
        mut options: CategoryOptions,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Row>,
    {
        let rows: Vec<Row> = rows.into_iter().map(Into::into).collect();

        let arity = match rows.first() {
            Some(first) => first.arity(),
            None => 1,
        };
        for (i, row) in rows.iter().enumerate() {
            if row.arity() == 0 {
                return Err(CategoryError::EmptyRow { row: i });
            }
            if row.arity() != arity {
                return Err(CategoryError::ArityMismatch {
                    row: i,
                    expected: arity,
                    found: row.arity(),
                });
            }
        }

        if options.highlight_columns.as_ref().is_some_and(Vec::is_empty) {
            options.highlight_columns = None;
        }
        if !rows.is_empty() {
            if let Some(&column) = options
                .highlight_columns
                .iter()
                .flatten()
                .find(|&&c| c >= arity)
            {
                return Err(CategoryError::OutOfRange { column, arity });
            }
        }

        let entries: Vec<Entry> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| Entry {
                id: RowId::new(i),
                row,
            })
            .collect();

        let mut category = Self {
            name: name.into(),
            arity,
            entries,
            query: String::new(),
            predicate: pattern::compile(""),
            visible: Vec::new(),
            options,
            delete_callback,
        };
        category.recompute(false);

        tracing::debug!(
            name = %category.name,
            rows = category.entries.len(),
            arity,
            deletable = category.delete_callback.is_some(),
            "category: created"
        );
        Ok(category)
    }

    // -----------------------------------------------------------------------
    // Query
    // -----------------------------------------------------------------------

    /// Replace the query and rebuild the ranked view.
    pub fn set_query(&mut self, query: &str) {
        let narrowing = query.starts_with(self.query.as_str());
        if query != self.query {
            self.query = query.to_string();
            self.predicate = pattern::compile(query);
        }
        self.recompute(narrowing);

        tracing::debug!(
            name = %self.name,
            query = %self.query,
            narrowing,
            visible = self.visible.len(),
            total = self.entries.len(),
            "category: query set"
        );
    }

    /// The raw query last passed to [`set_query`](Self::set_query).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Should the UI highlight matched text in `column`?
    pub fn highlights(&self, column: usize) -> bool {
        column < self.arity
            && self
                .options
                .highlight_columns
                .as_ref()
                .is_none_or(|columns| columns.contains(&column))
    }

    /// Byte ranges of the query tokens inside one field, for highlighting.
    /// Empty when the column is not highlighted or the field does not match.
    pub fn match_spans(&self, row: &Row, column: usize) -> Vec<Range<usize>> {
        match row.field(column) {
            Some(text) if self.highlights(column) => self.predicate.find_spans(text),
            _ => Vec::new(),
        }
    }

    fn recompute(&mut self, narrowing: bool) {
        let candidates: Vec<usize> = if narrowing {
            std::mem::take(&mut self.visible)
        } else {
            (0..self.entries.len()).collect()
        };

        let mut visible: Vec<usize> = candidates
            .into_iter()
            .filter(|&pos| filter::is_visible(&self.entries[pos].row, &self.predicate))
            .collect();

        // Narrowing starts from the previous ranking. Rows the comparator
        // cannot tell apart share a primary field and were already in
        // insertion order there, so the stable sort keeps them that way.
        if self.options.sort {
            let entries = &self.entries;
            rank::sort_by_rank(&mut visible, &self.query, |&pos| &entries[pos].row);
        }

        self.visible = visible;
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn options(&self) -> &CategoryOptions {
        &self.options
    }

    /// Number of rows still in the category, visible or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_deletable(&self) -> bool {
        self.delete_callback.is_some()
    }

    /// Visible rows in ranked order.
    pub fn visible_rows(&self) -> impl ExactSizeIterator<Item = (RowId, &Row)> + '_ {
        self.visible.iter().map(|&pos| {
            let entry = &self.entries[pos];
            (entry.id, &entry.row)
        })
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The row at display position `index` of the ranked view.
    pub fn visible_at(&self, index: usize) -> Option<(RowId, &Row)> {
        self.visible.get(index).map(|&pos| {
            let entry = &self.entries[pos];
            (entry.id, &entry.row)
        })
    }

    /// All rows in insertion order, ignoring the query.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = (RowId, &Row)> + '_ {
        self.entries.iter().map(|e| (e.id, &e.row))
    }

    pub fn row(&self, id: RowId) -> Result<&Row> {
        self.position(id)
            .map(|pos| &self.entries[pos].row)
            .ok_or(CategoryError::InvalidRowIdentity(id))
    }

    /// Literal text of one field.
    pub fn field_at(&self, id: RowId, column: usize) -> Result<&str> {
        if column >= self.arity {
            return Err(CategoryError::OutOfRange {
                column,
                arity: self.arity,
            });
        }
        let row = self.row(id)?;
        Ok(row.field(column).unwrap_or_default())
    }

    fn position(&self, id: RowId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, |e| e.id).ok()
    }

    // -----------------------------------------------------------------------
    // Deletion
    // -----------------------------------------------------------------------

    /// Delete the row named by `id`.
    ///
    /// The callback sees the row before it is removed. The ranked view drops
    /// the row in place; the other rows keep their order.
    pub fn delete(&mut self, id: RowId) -> Result<()> {
        if self.delete_callback.is_none() {
            tracing::debug!(name = %self.name, %id, "category: delete refused, not deletable");
            return Err(CategoryError::NotDeletable);
        }
        let pos = self
            .position(id)
            .ok_or(CategoryError::InvalidRowIdentity(id))?;

        if let Some(callback) = self.delete_callback.as_mut() {
            callback(&self.entries[pos].row);
        }

        let removed = self.entries.remove(pos);
        self.visible.retain(|&p| p != pos);
        for p in &mut self.visible {
            if *p > pos {
                *p -= 1;
            }
        }

        tracing::debug!(
            name = %self.name,
            %id,
            row = %removed.row,
            remaining = self.entries.len(),
            "category: row deleted"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
