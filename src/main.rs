use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tennews::config::Config;
use tennews::content::{NewsClient, SlideSource};
use tennews::logging::init_tracing;

/// Page through today's Ten News digest, one story at a time.
#[derive(Debug, Parser)]
#[command(name = "tennews", version, about)]
struct Cli {
    /// Config file (default: ~/.config/tennews/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the content provider base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Read the digest from a local JSON file instead of the provider
    #[arg(long, value_name = "FILE", conflicts_with = "sample")]
    slides: Option<PathBuf>,

    /// Use the bundled sample digest
    #[arg(long)]
    sample: bool,

    /// Write logs here instead of the cache directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.content.base_url = base_url;
        config.validate()?;
    }

    let log_path = init_tracing(&config.logging, cli.log_file.as_deref())
        .context("Failed to initialise logging")?;
    tracing::info!(log = %log_path.display(), "Starting tennews");

    let source = if cli.sample {
        SlideSource::Sample
    } else if let Some(path) = cli.slides {
        SlideSource::File(path)
    } else {
        SlideSource::Http(NewsClient::new(&config.content)?)
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    tennews::ui::runtime::run(&config, source, runtime.handle().clone())
        .context("Terminal UI failed")?;

    tracing::info!("Exiting");
    Ok(())
}
