/// Wire types and user-facing text for the ask flow
use crate::error::PopupError;
use serde::{Deserialize, Serialize};

/// Shown for every failed request; the underlying error only goes to the log.
pub const FAILURE_MESSAGE: &str = "Failed to connect to the backend. Is the Python server running?";
pub const LOADING_MESSAGE: &str = "Thinking...";
pub const ASK_LABEL: &str = "Ask";
pub const BUSY_LABEL: &str = "Processing...";

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub video_id: String,
    pub question: String,
}

impl AskRequest {
    /// Build a request from raw form inputs, trimming both
    pub fn from_inputs(video_id: &str, question: &str) -> Result<AskRequest, PopupError> {
        let video_id = video_id.trim();
        let question = question.trim();

        if video_id.is_empty() || question.is_empty() {
            return Err(PopupError::MissingInput);
        }

        Ok(AskRequest {
            video_id: video_id.to_string(),
            question: question.to_string(),
        })
    }
}

/// Successful reply from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Error reply from the backend (sent with 4xx)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendErrorBody {
    pub error: String,
}
