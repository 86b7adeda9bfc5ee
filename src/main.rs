//! Binary entrypoint: directory bootstrap, logging, interactive builder.

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use trainerforge::api::PokeApi;
use trainerforge::config::Config;

/// Interactive Cobblemon trainer team builder backed by PokeAPI.
#[derive(Parser, Debug)]
#[command(name = "trainerforge", version, about)]
struct Cli {
    /// Trainer name for this session
    #[arg(long, default_value = "trainer")]
    name: String,

    /// Minimum seconds between PokeAPI fetches
    #[arg(long)]
    cooldown_secs: Option<u64>,

    /// Remote API base URL
    #[arg(long)]
    api_base: Option<String>,

    /// Directory holding the persistent response cache
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    let mut config = Config::from_env();
    if let Some(secs) = args.cooldown_secs {
        config.cooldown_secs = secs;
    }
    if let Some(base) = args.api_base {
        config.api_base = base;
    }
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    init_logging(&config)?;
    std::fs::create_dir_all(&config.export_dir)?;
    std::fs::create_dir_all(&config.import_dir)?;

    let api = Arc::new(PokeApi::new(
        &config.api_base,
        config.cache_path(),
        config.cooldown(),
    ));

    cli::run_builder(api, &config, &args.name).await
}

/// Console layer at info, plus a dated debug-level file layer
/// (`logs/YYYY-MM-DD.log`). Per-field fallback events only reach the file.
fn init_logging(config: &Config) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    let filename = format!("{}.log", chrono::Local::now().format("%Y-%m-%d"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_dir.join(filename))?;

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::INFO);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();
    Ok(())
}
