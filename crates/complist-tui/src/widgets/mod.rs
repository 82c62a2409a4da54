//! Ratatui widgets for the complist TUI.

pub mod command_bar;
pub mod completion_list;
pub mod help;
pub mod query_bar;
