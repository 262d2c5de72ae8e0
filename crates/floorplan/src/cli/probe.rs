//! The `floorplan probe` command: prompt-only prediction.
//!
//! Sends the extraction prompt with no image attached and prints the raw
//! model reply. Useful as a credentials and model-version check before
//! pointing `run` at a large directory.

use clap::Args;
use floorplan_core::{
    concat_fragments, Config, PredictionClient, PredictionInput, ReplicateClient,
    FLOOR_PLAN_PROMPT,
};

/// Arguments for the `probe` command.
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Prompt to send instead of the default extraction prompt
    #[arg(long)]
    pub prompt: Option<String>,
}

/// Execute the probe command.
pub async fn execute(args: ProbeArgs, config: Config) -> anyhow::Result<()> {
    let token = config.api_token()?;
    let client = ReplicateClient::new(&config.api, &token);

    let prompt = args.prompt.as_deref().unwrap_or(FLOOR_PLAN_PROMPT);
    let input = PredictionInput::prompt_only(prompt);

    let prediction = client.create(input).await?;
    tracing::info!(id = %prediction.id, "probe prediction submitted");

    let prediction = client.wait(prediction).await?;
    let reply = concat_fragments(prediction.output.as_ref())?;

    println!("{reply}");
    Ok(())
}
