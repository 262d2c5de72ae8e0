//! The `floorplan run` command: analyze a directory of images.

use clap::Args;
use floorplan_core::{Analyzer, Config, ImageScanner, ReplicateClient};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory of floor plan images (defaults to $IMAGES_DIR)
    pub input: Option<PathBuf>,

    /// Model version identifier, overriding the configured pin
    #[arg(long)]
    pub model_version: Option<String>,
}

/// Execute the run command.
///
/// On success, emits a single structured log entry containing every
/// parsed record in input order. Any failure aborts with no partial
/// output.
pub async fn execute(args: RunArgs, config: Config) -> anyhow::Result<()> {
    let token = config.api_token()?;
    let root = match args.input {
        Some(path) => path,
        None => config.images_dir()?,
    };

    let mut api = config.api.clone();
    if let Some(version) = args.model_version {
        api.model_version = version;
    }

    let client = ReplicateClient::new(&api, &token);
    let scanner = ImageScanner::new(config.scan.clone());
    let analyzer = Analyzer::new(Arc::new(client), scanner);

    let plans = analyzer.run(&root).await?;

    tracing::info!(
        count = plans.len(),
        data = %serde_json::to_string(&plans)?,
        "floor plans"
    );

    Ok(())
}
