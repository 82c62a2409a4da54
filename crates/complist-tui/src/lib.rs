//! complist TUI — ratatui prompt over a single [`Category`].
//!
//! The UI is a plain collaborator of the engine: it pushes the query on every
//! edit, reads the ranked view back for display and deletes rows by
//! [`RowId`](complist_core::RowId). Matching and ranking live entirely in
//! `complist-core`.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use complist_core::{config::Config, Category, Row};

/// Run the prompt until the user accepts a row or quits.
pub fn run(category: Category, config: Config) -> anyhow::Result<Option<Row>> {
    App::new(category, config).run()
}
