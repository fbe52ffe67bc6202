//! Entry point wiring CLI dispatch to the enrichment pipeline.

use anyhow::Result;
use takeout_insights::{cli::Cli, config::Settings, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;
    logging::init_tracing(&settings.log_level)?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
