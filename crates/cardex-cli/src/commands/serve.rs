//! Serve command - run the HTTP extraction service.

use clap::Args;
use console::style;
use tracing::info;

use cardex_core::ScanPipeline;

use super::config::load_config;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides `server.bind_addr`)
    #[arg(short, long)]
    bind: Option<String>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }

    let pipeline = ScanPipeline::from_config(&config);
    info!(
        tesseract = %pipeline.recognizer().cmd().display(),
        variant = %config.extraction.variant,
        "Starting cardex server"
    );

    println!(
        "{} Listening on {} (Ctrl-C to stop)",
        style("ℹ").blue(),
        config.server.bind_addr
    );

    cardex_server::serve(pipeline, &config.server).await?;

    Ok(())
}
