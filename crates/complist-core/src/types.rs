//! Core types for complist-core.
//!
//! This module defines the candidate [`Row`] and its stable [`RowId`]
//! identity inside a [`Category`](crate::Category).

/// Stable identity of a row inside one category.
///
/// Assigned from the row's position at construction time. Deleting a row never
/// frees its id for reuse, so an id held by the UI either still names the same
/// row or is rejected with
/// [`CategoryError::InvalidRowIdentity`](crate::CategoryError::InvalidRowIdentity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(usize);

impl RowId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Insertion index this id was assigned from.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for RowId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One completion candidate: an ordered tuple of text fields.
///
/// Field 0 is the primary field. It is the only field ranking looks at;
/// filtering looks at every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn field(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// The ranking field. Empty for a zero-field row, which a category never
    /// accepts.
    pub fn primary(&self) -> &str {
        self.field(0).unwrap_or("")
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl From<Vec<&str>> for Row {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(fields: [&str; N]) -> Self {
        Self::new(fields)
    }
}

/// Tab-separated, the same shape [`source::parse_tsv`](crate::source::parse_tsv) reads.
impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fields.join("\t"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
