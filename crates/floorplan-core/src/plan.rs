//! Parsing model output into the floor plan record.
//!
//! The model streams its answer as an array of text fragments. The
//! fragments are concatenated in arrival order and the resulting string
//! must decode as the two-field JSON schema; anything else is a hard
//! error carrying the raw text for diagnosis.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The extracted answer for one floor plan image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Total area in square feet
    pub sq_ft: i64,
    /// Number of floors
    pub num_floors: i64,
}

/// Concatenate the streamed output fragments into one string.
///
/// The payload must be an array whose elements are all strings; any other
/// shape (missing output, non-array, non-string element) is an error.
pub fn concat_fragments(output: Option<&Value>) -> Result<String, AnalysisError> {
    let output = output.ok_or_else(|| AnalysisError::OutputShape {
        payload: "null".to_string(),
    })?;

    let fragments = output.as_array().ok_or_else(|| AnalysisError::OutputShape {
        payload: output.to_string(),
    })?;

    let mut text = String::new();
    for fragment in fragments {
        let piece = fragment.as_str().ok_or_else(|| AnalysisError::OutputShape {
            payload: output.to_string(),
        })?;
        text.push_str(piece);
    }

    Ok(text)
}

/// Decode the prediction output as a [`FloorPlan`].
pub fn parse_output(output: Option<&Value>) -> Result<FloorPlan, AnalysisError> {
    let text = concat_fragments(output)?;
    serde_json::from_str(&text).map_err(|e| AnalysisError::Decode {
        message: e.to_string(),
        raw: text,
    })
}
