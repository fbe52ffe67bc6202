//! CLI entry-point for language classification.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{cli::print_json, nlp::language::classify_with_details};

/// Args for the `classify` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Text to classify.
    pub text: String,
}

#[instrument]
pub async fn run(args: Args) -> Result<()> {
    print_json(&classify_with_details(&args.text))
}
