/// Error types for the popup
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopupError {
    /// Either input was empty after trimming; no request is made.
    #[error("Please provide both a video ID and a question.")]
    MissingInput,

    #[error("HTTP error! Status: {status} ({detail})")]
    Http { status: u16, detail: String },

    #[error("network: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("tab query failed: {0}")]
    TabQuery(String),

    #[error("invalid backend endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Render a JS exception as text, preferring the `Error.message` when there is one
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
