use clap::Parser;
use complist_core::{config::Config, RowFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "complist", about = "Type-ahead completion list over tab-separated rows")]
struct Cli {
    /// Row file; reads stdin when omitted or `-`.
    rows: Option<PathBuf>,

    /// Input format: tsv or json.
    #[arg(long, default_value = "tsv")]
    format: RowFormat,

    /// Category label shown above the list.
    #[arg(long, default_value = "items")]
    name: String,

    /// Print the ranked rows for --query and exit instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Query to apply (headless mode).
    #[arg(long, default_value = "")]
    query: String,

    /// Print at most N rows (headless mode).
    #[arg(long)]
    limit: Option<usize>,

    /// Allow deleting rows from the list (Ctrl+d).
    #[arg(long)]
    deletable: bool,

    /// Config file to use instead of ~/.config/complist/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to $TMPDIR/complist-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("complist-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "complist debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config: load failed, using defaults");
            Config::defaults()
        }),
    };

    let rows = complist::load_rows(cli.rows.as_deref(), cli.format)?;
    let mut category = complist::build_category(
        &cli.name,
        rows,
        config.engine.category_options(),
        cli.deletable,
    )?;

    if cli.headless {
        let stdout = std::io::stdout();
        complist::run_headless(&mut category, &cli.query, cli.limit, &mut stdout.lock())?;
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.query.is_empty() {
        category.set_query(&cli.query);
    }

    match complist_tui::run(category, config)? {
        Some(row) => {
            println!("{row}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::from(1)),
    }
}
