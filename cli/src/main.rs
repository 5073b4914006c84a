use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use metamap_gen::{GeneratorConfig, MapGenerator};
use metamap_watcher::{MetaWatcher, drive};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Generate the route metadata map for the client pages tree.
#[derive(Parser)]
#[command(name = "metamap")]
#[command(about = "Generates the route -> metadata import map")]
struct Cli {
    /// Keep running and regenerate the map on every descriptor change.
    #[arg(long)]
    watch: bool,

    /// Project root containing the pages tree and the generated module.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::new(&cli.root);
    let pages_path = config.pages_path();
    let generator = MapGenerator::new(config);

    // Cold generation runs in both modes; a broken setup fails here.
    generator
        .generate()
        .await
        .context("meta map generation failed")?;

    if !cli.watch {
        return Ok(());
    }

    let mut watcher = MetaWatcher::new(pages_path);
    let events = watcher
        .take_events()
        .context("watch event channel unavailable")?;
    watcher.start()?;
    info!("watching metadata files...");

    let regenerator = generator.clone();
    tokio::select! {
        _ = drive(events, move || {
            let regenerator = regenerator.clone();
            async move {
                if let Err(e) = regenerator.generate().await {
                    error!("map regeneration failed: {e}");
                }
            }
        }) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
        }
    }

    watcher.stop();
    Ok(())
}
