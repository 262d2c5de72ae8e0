//! The sequential analysis run: scan, predict, parse, aggregate.

use crate::client::{ImageInput, PredictionClient, PredictionInput};
use crate::error::AnalysisError;
use crate::plan::{parse_output, FloorPlan};
use crate::scan::ImageScanner;
use std::path::Path;
use std::sync::Arc;

/// Drives one full run over a directory of floor plan images.
///
/// Each image is fully processed (submit, wait, parse) before the next
/// begins; there is no concurrency and no retry. The first error at any
/// stage aborts the run and discards results already computed.
pub struct Analyzer {
    client: Arc<dyn PredictionClient>,
    scanner: ImageScanner,
}

impl Analyzer {
    pub fn new(client: Arc<dyn PredictionClient>, scanner: ImageScanner) -> Self {
        Self { client, scanner }
    }

    /// Analyze every image under `root`, in lexicographic path order.
    ///
    /// Returns one record per input file, index-aligned with the scanned
    /// list. Zero matching files is a successful run with an empty result.
    pub async fn run(&self, root: &Path) -> Result<Vec<FloorPlan>, AnalysisError> {
        let paths = self.scanner.scan(root)?;
        tracing::info!(count = paths.len(), root = %root.display(), "found floor plan images");

        let mut plans = Vec::with_capacity(paths.len());
        for path in &paths {
            let plan = self.analyze_one(path).await?;
            tracing::debug!(path = %path.display(), sq_ft = plan.sq_ft, num_floors = plan.num_floors, "image analyzed");
            plans.push(plan);
        }

        Ok(plans)
    }

    async fn analyze_one(&self, path: &Path) -> Result<FloorPlan, AnalysisError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AnalysisError::ReadImage {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_else(|| "jpeg".to_string());
        let image = ImageInput::from_bytes(&bytes, &format);
        let input = PredictionInput::floor_plan(&image);

        let prediction = self.client.create(input).await?;
        tracing::debug!(id = %prediction.id, path = %path.display(), "prediction submitted");

        let prediction = self.client.wait(prediction).await?;
        parse_output(prediction.output.as_ref())
    }
}
