//! Remote prediction client: request types and the client trait.
//!
//! The hosted model service is a black box with two operations: create a
//! prediction job, then wait for it to reach a terminal state. The trait
//! keeps the analyzer testable against a mock.

mod replicate;
mod types;

pub use replicate::ReplicateClient;
pub use types::{Prediction, PredictionStatus};

use crate::error::AnalysisError;
use async_trait::async_trait;
use base64::Engine;

/// Instruction prompt asking the model for the two-field answer.
///
/// The trailing "Do not escape the text" works around the model sometimes
/// escaping the JSON inside a string.
pub const FLOOR_PLAN_PROMPT: &str = "In this image, extract the information about the number of floors and the square footage of the building. The output should solely be a valid json object that is the following schema: {\"sq_ft\": number, \"num_floors\": number}. Do not escape the text";

/// Base64-encoded image ready to embed in a prediction request.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg")
    pub media_type: String,
}

impl ImageInput {
    /// Create an `ImageInput` from raw bytes and a format identifier
    /// (e.g., "jpeg", "png").
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        let media_type = match format {
            "jpeg" | "jpg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            other => {
                tracing::warn!("Unknown image format '{other}', defaulting to image/jpeg");
                "image/jpeg"
            }
        };

        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Return a data URL for inline embedding in the request body.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// Named inputs for one prediction job. Built fresh per image and
/// discarded after submission.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PredictionInput {
    /// Inline image payload as a data URL, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Text prompt for the model
    pub prompt: String,
}

impl PredictionInput {
    /// Build the floor plan extraction request for one image.
    pub fn floor_plan(image: &ImageInput) -> Self {
        Self {
            image: Some(image.data_url()),
            prompt: FLOOR_PLAN_PROMPT.to_string(),
        }
    }

    /// Build a prompt-only request with no image attached.
    pub fn prompt_only(prompt: &str) -> Self {
        Self {
            image: None,
            prompt: prompt.to_string(),
        }
    }
}

/// Trait over the remote prediction service.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the analyzer holds an `Arc<dyn PredictionClient>` for dynamic dispatch).
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Client name for logging (e.g., "replicate").
    fn name(&self) -> &str;

    /// Submit a prediction job for the configured model version.
    async fn create(&self, input: PredictionInput) -> Result<Prediction, AnalysisError>;

    /// Block until the prediction reaches a terminal state.
    ///
    /// Returns the succeeded prediction with its output populated; a
    /// failed or canceled terminal state is surfaced as an error. Nothing
    /// is retried.
    async fn wait(&self, prediction: Prediction) -> Result<Prediction, AnalysisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_input_from_bytes_jpeg() {
        let input = ImageInput::from_bytes(&[0xFF, 0xD8, 0xFF], "jpeg");
        assert_eq!(input.media_type, "image/jpeg");
        assert!(!input.data.is_empty());
    }

    #[test]
    fn test_image_input_data_url() {
        let input = ImageInput::from_bytes(&[1, 2, 3], "jpeg");
        let url = input.data_url();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_floor_plan_input_serializes_both_fields() {
        let image = ImageInput::from_bytes(&[1, 2, 3], "jpeg");
        let input = PredictionInput::floor_plan(&image);
        let json = serde_json::to_value(&input).unwrap();
        assert!(json["image"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,"));
        assert!(json["prompt"].as_str().unwrap().contains("sq_ft"));
        assert!(json["prompt"].as_str().unwrap().contains("num_floors"));
    }

    #[test]
    fn test_prompt_only_input_omits_image() {
        let input = PredictionInput::prompt_only("hello");
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["prompt"], "hello");
    }
}
