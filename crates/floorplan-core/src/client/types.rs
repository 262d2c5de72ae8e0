//! Wire types for the prediction API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle states reported by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl PredictionStatus {
    /// Whether polling stops at this status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PredictionStatus::Succeeded | PredictionStatus::Failed | PredictionStatus::Canceled
        )
    }
}

/// One remote inference job: remote-assigned id, current status, and the
/// output payload once available. Owned by the client for the duration of
/// a single request; never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub status: PredictionStatus,
    /// Streamed output fragments once the job produces them
    #[serde(default)]
    pub output: Option<Value>,
    /// Remote error text for failed jobs
    #[serde(default)]
    pub error: Option<String>,
}
