//! Rollcall Console
//!
//! Starts an interactive student record session on stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use rollcall::config::ConfigBuilder;
use rollcall::shell::Session;
use rollcall::{Config, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Rollcall
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(about = "Interactive student record keeper")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record file to load before the first prompt
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Capacity reserved on the first insert
    #[arg(long)]
    initial_capacity: Option<usize>,

    /// Keep capacity after removals instead of halving it
    #[arg(long)]
    no_shrink: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with the console table output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rollcall=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!("Rollcall v{} with {:?}", rollcall::VERSION, config);

    let mut store = RecordStore::with_config(&config);
    if let Some(path) = &args.load {
        match store.load(path) {
            Ok(report) if !report.is_complete() => {
                tracing::warn!("Loaded {} of {} records", report.added, report.expected);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::with_store(config, store, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}

/// Config file first, then command-line overrides
fn build_config(args: &Args) -> rollcall::Result<Config> {
    let base = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut builder = ConfigBuilder::from_config(base);
    if let Some(capacity) = args.initial_capacity {
        builder = builder.initial_capacity(capacity);
    }
    if args.no_shrink {
        builder = builder.shrink_on_remove(false);
    }

    let config = builder.build();
    config.validate()?;
    Ok(config)
}
