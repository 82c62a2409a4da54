//! Configuration types for complist.
//!
//! [`Config::load`] reads `~/.config/complist/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::category::CategoryOptions;
use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[engine]
sort              = true
highlight_columns = []

[ui]
theme                    = "default"
show_secondary_columns   = true
primary_column_width_pct = 40
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/complist/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[engine]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_sort")]
    pub sort: bool,
    /// Columns whose matched text is highlighted. Empty means every column.
    /// Matching always searches every column.
    #[serde(default)]
    pub highlight_columns: Vec<usize>,
}

fn default_sort() -> bool { true }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            highlight_columns: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn category_options(&self) -> CategoryOptions {
        CategoryOptions {
            highlight_columns: if self.highlight_columns.is_empty() {
                None
            } else {
                Some(self.highlight_columns.clone())
            },
            sort: self.sort,
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_secondary_columns")]
    pub show_secondary_columns: bool,
    #[serde(default = "default_primary_column_width_pct")]
    pub primary_column_width_pct: u16,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_secondary_columns() -> bool { true }
fn default_primary_column_width_pct() -> u16 { 40 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_secondary_columns: default_show_secondary_columns(),
            primary_column_width_pct: default_primary_column_width_pct(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/complist/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "config: wrote defaults");
        }

        Self::load_from(&path)
    }

    /// Layer an explicit file over the built-in defaults. A missing file is
    /// not an error.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("complist")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert!(cfg.engine.sort);
        assert!(cfg.engine.highlight_columns.is_empty());
        assert_eq!(cfg.ui.theme, "default");
        assert_eq!(cfg.ui.primary_column_width_pct, 40);
    }

    #[test]
    fn default_engine_maps_to_default_options() {
        let cfg = Config::defaults();
        assert_eq!(cfg.engine.category_options(), CategoryOptions::default());
    }

    #[test]
    fn highlight_columns_map_to_options() {
        let engine = EngineConfig {
            sort: false,
            highlight_columns: vec![0, 2],
        };
        let opts = engine.category_options();
        assert_eq!(opts.highlight_columns, Some(vec![0, 2]));
        assert!(!opts.sort);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = Config::load_from(std::path::Path::new("/nonexistent/complist.toml")).unwrap();
        assert!(cfg.engine.sort);
    }
}
