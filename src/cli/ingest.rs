//! CLI entry-point for turning Takeout exports into a session file.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    cli::print_json,
    config::Settings,
    data::{
        store::Session,
        takeout::{self, TakeoutFiles},
    },
};

/// Args for the `ingest` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Extracted Takeout directory to search for history files.
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Explicit watch-history.json.
    #[arg(long)]
    pub watch: Option<PathBuf>,
    /// Explicit search-history.json.
    #[arg(long)]
    pub search: Option<PathBuf>,
    /// Explicit subscriptions.csv.
    #[arg(long)]
    pub subscriptions: Option<PathBuf>,
    /// Session file to write; defaults to DATA_DIR/session.json.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mut files = match &args.dir {
        Some(dir) => TakeoutFiles::discover(dir),
        None => TakeoutFiles::default(),
    };
    files.watch_history = args.watch.or(files.watch_history);
    files.search_history = args.search.or(files.search_history);
    files.subscriptions = args.subscriptions.or(files.subscriptions);
    if files.watch_history.is_none() && files.search_history.is_none() && files.subscriptions.is_none() {
        bail!("no takeout files found; pass --dir or an explicit file");
    }

    let report = takeout::preprocess_files(&files)?;
    let target = args.output.unwrap_or_else(|| settings.join_data("session.json"));
    Session::new(report.events).save(&target).await?;
    info!(path = %target.display(), "wrote session");
    print_json(&report.stats)
}
