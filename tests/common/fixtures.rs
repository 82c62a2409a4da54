//! Canned row sets shared by the harnesses.

use complist_core::Row;

/// Three-column history rows: url, title, last visit.
pub fn history_rows() -> Vec<Row> {
    vec![
        Row::from(["https://example.com/", "Example Domain", "2024-03-01"]),
        Row::from(["https://docs.rs/regex", "regex - Rust", "2024-03-02"]),
        Row::from(["https://github.com/", "GitHub", "2024-03-03"]),
        Row::from(["http://example.org/path", "Example Org", "2024-03-04"]),
        Row::from(["https://rust-lang.org/", "Rust Programming Language", "2024-03-05"]),
    ]
}

/// Two-column command rows: name, description.
pub fn command_rows() -> Vec<Row> {
    vec![
        Row::from(["open", "Open a URL"]),
        Row::from(["tab-close", "Close the current tab"]),
        Row::from(["tab-only", "Close all other tabs"]),
        Row::from(["quit", "Quit the application"]),
        Row::from(["set", "Set an option"]),
    ]
}

/// `command_rows` as tab-separated text.
pub const COMMANDS_TSV: &str = "open\tOpen a URL\n\
tab-close\tClose the current tab\n\
tab-only\tClose all other tabs\n\
quit\tQuit the application\n\
set\tSet an option\n";

/// `command_rows` as a JSON array of arrays.
pub const COMMANDS_JSON: &str = r#"[
  ["open", "Open a URL"],
  ["tab-close", "Close the current tab"],
  ["tab-only", "Close all other tabs"],
  ["quit", "Quit the application"],
  ["set", "Set an option"]
]"#;
