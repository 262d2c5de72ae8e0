//! Floorplan Core - floor plan analysis via a hosted vision model.
//!
//! Walks a directory of floor plan images, submits each one to a hosted
//! model inference API (create a prediction, poll it to a terminal state),
//! and decodes the model's textual answer into a fixed two-field record.
//!
//! # Architecture
//!
//! ```text
//! Scan directory → (per image) Submit prediction → Wait → Parse JSON → Collect
//! ```
//!
//! Processing is strictly sequential and fail-fast: the first error at any
//! stage aborts the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use floorplan_core::{Analyzer, Config, ImageScanner, ReplicateClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> floorplan_core::Result<()> {
//!     let config = Config::load()?;
//!     let client = ReplicateClient::new(&config.api, &config.api_token()?);
//!     let analyzer = Analyzer::new(Arc::new(client), ImageScanner::new(config.scan.clone()));
//!     let plans = analyzer.run(&config.images_dir()?).await?;
//!     println!("{plans:?}");
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod client;
pub mod config;
pub mod error;
pub mod plan;
pub mod scan;

pub use analyzer::Analyzer;
pub use client::{
    ImageInput, Prediction, PredictionClient, PredictionInput, PredictionStatus, ReplicateClient,
    FLOOR_PLAN_PROMPT,
};
pub use config::Config;
pub use error::{AnalysisError, AnalysisResult, ConfigError, FloorplanError, Result};
pub use plan::{concat_fragments, parse_output, FloorPlan};
pub use scan::ImageScanner;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
