//! complist-core — candidate filtering and ranking for type-ahead completion.
//!
//! A [`Category`] owns a fixed set of multi-field [`Row`]s. Every time the
//! collaborator pushes a new query the category recomputes which rows are
//! visible and in what order.
//!
//! # Pipeline
//!
//! ```text
//! raw query ──► pattern::compile ──► filter::is_visible ──► rank::compare
//!                 (Predicate)          (visible set)          (ranked view)
//! ```
//!
//! The two stages are independent pure functions; [`Category`] only wires
//! them together and keeps the current query, the cached predicate and the
//! ranked view.

pub mod category;
pub mod config;
pub mod error;
pub mod filter;
pub mod pattern;
pub mod rank;
pub mod source;
pub mod types;

pub use category::{Category, CategoryOptions, DeleteFn};
pub use error::{CategoryError, Result};
pub use pattern::{compile, Predicate};
pub use source::{RowFormat, SourceError};
pub use types::{Row, RowId};
