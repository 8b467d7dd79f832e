use std::path::PathBuf;

use abp_config::{ClientConfig, config_files, fetch_and_render, load_config};
use clap::Parser;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let files = config_files(cli.config.unwrap_or_default());
    let app_config = load_config(&files)?;

    initialize_tracing(&app_config.app)?;
    tracing::debug!(?files, "Config files loaded");

    let rendered = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(fetch_and_render(app_config))?;

    println!("{rendered}");

    Ok(())
}

fn initialize_tracing(config: &ClientConfig) -> anyhow::Result<()> {
    // RUST_LOG wins over the configured level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info"))
    })?;

    let tracing_layer = tracing_subscriber::registry().with(filter);

    // logs go to stderr, stdout carries the document
    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
