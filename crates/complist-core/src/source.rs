//! Row sources — parse candidate rows out of text handed over by a
//! collaborator (a file, stdin, another program's output).
//!
//! Two formats:
//!
//! - [`RowFormat::Tsv`]: one row per line, fields separated by `\t`. Blank
//!   lines are skipped and a trailing `\r` is dropped.
//! - [`RowFormat::Json`]: a JSON array of arrays of strings.
//!
//! Both check arity up front so a bad file is reported with the offending
//! line, not as a category construction error.

use crate::types::Row;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFormat {
    #[default]
    Tsv,
    Json,
}

impl std::str::FromStr for RowFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" => Ok(RowFormat::Tsv),
            "json" => Ok(RowFormat::Json),
            other => Err(format!("unknown row format: {other} (expected tsv or json)")),
        }
    }
}

impl std::fmt::Display for RowFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowFormat::Tsv => write!(f, "tsv"),
            RowFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read rows: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON rows: {0}")]
    Json(#[from] serde_json::Error),

    /// `line` is 1-based: the file line for TSV, the array element for JSON.
    #[error("line {line}: expected {expected} fields, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: row has no fields")]
    Empty { line: usize },
}

/// Read everything from `reader` and parse it as `format`.
pub fn read_rows(mut reader: impl Read, format: RowFormat) -> Result<Vec<Row>, SourceError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_rows(&text, format)
}

pub fn parse_rows(text: &str, format: RowFormat) -> Result<Vec<Row>, SourceError> {
    let rows = match format {
        RowFormat::Tsv => parse_tsv(text)?,
        RowFormat::Json => parse_json(text)?,
    };
    tracing::debug!(%format, rows = rows.len(), "source: parsed rows");
    Ok(rows)
}

pub fn parse_tsv(text: &str) -> Result<Vec<Row>, SourceError> {
    let mut arity = None;
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let row = Row::new(line.split('\t'));
        check_arity(&mut arity, &row, i + 1)?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn parse_json(text: &str) -> Result<Vec<Row>, SourceError> {
    let raw: Vec<Vec<String>> = serde_json::from_str(text)?;
    let mut arity = None;
    let mut rows = Vec::with_capacity(raw.len());

    for (i, fields) in raw.into_iter().enumerate() {
        let row = Row::from(fields);
        check_arity(&mut arity, &row, i + 1)?;
        rows.push(row);
    }
    Ok(rows)
}

fn check_arity(arity: &mut Option<usize>, row: &Row, line: usize) -> Result<(), SourceError> {
    if row.arity() == 0 {
        return Err(SourceError::Empty { line });
    }
    match *arity {
        None => *arity = Some(row.arity()),
        Some(expected) if expected != row.arity() => {
            return Err(SourceError::Ragged {
                line,
                expected,
                found: row.arity(),
            });
        }
        Some(_) => {}
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
