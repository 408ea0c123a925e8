/// HTTP client for the question-answering backend, built on `fetch`
use crate::ask::{AskRequest, AskResponse, BackendErrorBody};
use crate::config::BackendConfig;
use crate::controller::AskBackend;
use crate::error::{describe_js_error, PopupError};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Raw bodies longer than this are cut when echoed into an error.
const MAX_DETAIL_LEN: usize = 200;

pub const ASK_METHOD: &str = "POST";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub struct FetchBackend {
    config: BackendConfig,
}

impl FetchBackend {
    pub fn new(config: BackendConfig) -> Self {
        FetchBackend { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The `fetch` request for one ask: JSON POST to the configured endpoint
    pub fn build_request(&self, request: &AskRequest) -> Result<Request, PopupError> {
        let body = encode_body(request)?;

        let headers = Headers::new().map_err(|e| PopupError::Encode(describe_js_error(&e)))?;
        headers
            .set("Content-Type", JSON_CONTENT_TYPE)
            .map_err(|e| PopupError::Encode(describe_js_error(&e)))?;

        let init = RequestInit::new();
        init.set_method(ASK_METHOD);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        Request::new_with_str_and_init(&self.config.endpoint, &init)
            .map_err(|e| PopupError::Encode(describe_js_error(&e)))
    }
}

impl Default for FetchBackend {
    fn default() -> Self {
        Self::new(BackendConfig::default())
    }
}

impl AskBackend for FetchBackend {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, PopupError> {
        let http_request = self.build_request(request)?;
        let window = web_sys::window()
            .ok_or_else(|| PopupError::Network("no window available".to_string()))?;

        debug!("POST {}", self.config.endpoint);

        let response_js = JsFuture::from(window.fetch_with_request(&http_request))
            .await
            .map_err(|e| PopupError::Network(describe_js_error(&e)))?;
        let response: Response = response_js
            .dyn_into()
            .map_err(|e| PopupError::Network(format!("unexpected fetch result: {:?}", e)))?;

        let text_promise = response
            .text()
            .map_err(|e| PopupError::MalformedResponse(describe_js_error(&e)))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(|e| PopupError::Network(describe_js_error(&e)))?
            .as_string()
            .unwrap_or_default();

        interpret_response(response.status(), &body)
    }
}

/// JSON body of `POST /ask`
pub fn encode_body(request: &AskRequest) -> Result<String, PopupError> {
    serde_json::to_string(request).map_err(|e| PopupError::Encode(e.to_string()))
}

/// Decide what a backend reply means
///
/// - 2xx with `{"answer": ...}` → the answer
/// - 2xx with anything else → malformed response
/// - non-2xx → HTTP error, carrying the backend's `error` field when it sent one
pub fn interpret_response(status: u16, body: &str) -> Result<AskResponse, PopupError> {
    if !(200..300).contains(&status) {
        let detail = match serde_json::from_str::<BackendErrorBody>(body) {
            Ok(err) => err.error,
            Err(_) => truncate(body.trim(), MAX_DETAIL_LEN),
        };
        return Err(PopupError::Http { status, detail });
    }

    serde_json::from_str::<AskResponse>(body).map_err(|e| PopupError::MalformedResponse(e.to_string()))
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
