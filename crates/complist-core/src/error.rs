//! Errors returned by [`Category`](crate::Category) operations.
//!
//! Nothing here is fatal to the host UI. `NotDeletable` and
//! `InvalidRowIdentity` are meant to be shown to the user; `OutOfRange` points
//! at a bug in the caller.

use crate::types::RowId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    /// The category was built without a delete callback.
    #[error("Cannot delete this item.")]
    NotDeletable,

    /// Field access past the category's arity.
    #[error("column {column} is out of range for rows with {arity} fields")]
    OutOfRange { column: usize, arity: usize },

    /// The id no longer names a row, usually because it was already deleted.
    #[error("row {0} is no longer in this category")]
    InvalidRowIdentity(RowId),

    /// Construction-time check: every row must have the arity of row 0.
    #[error("row {row} has {found} fields, expected {expected}")]
    ArityMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has no fields")]
    EmptyRow { row: usize },
}

pub type Result<T, E = CategoryError> = std::result::Result<T, E>;
