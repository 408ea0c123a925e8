/// Backend endpoint configuration
use crate::error::PopupError;
use url::Url;

/// Local question-answering service the popup talks to
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/ask";

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub endpoint: String,
}

impl BackendConfig {
    /// Build a config for a custom endpoint; only absolute http(s) URLs are accepted
    pub fn with_endpoint(endpoint: &str) -> Result<Self, PopupError> {
        let parsed = Url::parse(endpoint.trim())
            .map_err(|e| PopupError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PopupError::InvalidEndpoint(format!(
                "{}: unsupported scheme '{}'",
                endpoint,
                parsed.scheme()
            )));
        }

        Ok(BackendConfig {
            endpoint: parsed.to_string(),
        })
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
