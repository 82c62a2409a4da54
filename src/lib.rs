//! complist — type-ahead completion lists.
//!
//! Glue between the command line and the engine: load rows, build a
//! [`Category`], then either print the ranked view for one query (headless
//! mode) or hand the category to the TUI.
//!
//! # Architecture
//!
//! ```text
//! rows (file / stdin) ──► source ──► Category ──► headless writer
//!                                        │
//!                                        └──► complist-tui
//! ```
//!
//! Everything is synchronous: a query update recomputes the view before the
//! next read.

use complist_core::{
    source, Category, CategoryError, CategoryOptions, DeleteFn, Row, RowFormat, SourceError,
};
use std::io::{self, Write};
use std::path::Path;

pub use complist_core;

/// Read rows from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_rows(path: Option<&Path>, format: RowFormat) -> Result<Vec<Row>, SourceError> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = std::fs::File::open(p)?;
            source::read_rows(io::BufReader::new(file), format)
        }
        _ => source::read_rows(io::stdin().lock(), format),
    }
}

/// Build the category. A deletable category logs each removed row; the rows
/// come from a plain file, so there is nothing else to clean up.
pub fn build_category(
    name: &str,
    rows: Vec<Row>,
    options: CategoryOptions,
    deletable: bool,
) -> Result<Category, CategoryError> {
    let callback: Option<DeleteFn> = if deletable {
        let category = name.to_string();
        Some(Box::new(move |row: &Row| {
            tracing::info!(category = %category, row = %row, "row deleted by user");
        }))
    } else {
        None
    };
    Category::with_options(name, rows, callback, options)
}

/// Write the ranked view, one tab-separated row per line. Returns the number
/// of rows written.
pub fn write_ranked(
    category: &Category,
    limit: Option<usize>,
    out: &mut impl Write,
) -> io::Result<usize> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut written = 0;
    for (_, row) in category.visible_rows().take(limit) {
        writeln!(out, "{row}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Apply `query` and print the result.
pub fn run_headless(
    category: &mut Category,
    query: &str,
    limit: Option<usize>,
    out: &mut impl Write,
) -> io::Result<usize> {
    category.set_query(query);
    let written = write_ranked(category, limit, out)?;
    tracing::debug!(query, written, visible = category.visible_len(), "headless: done");
    Ok(written)
}
