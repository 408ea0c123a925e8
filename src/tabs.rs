/// Active-tab lookup through the extension's JS bridge
use crate::controller::TabProvider;
use crate::error::{describe_js_error, PopupError};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;
}

/// The part of a browser tab the popup reads; every other tab field is ignored
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActiveTab {
    #[serde(default)]
    pub url: Option<String>,
}

/// `chrome.tabs` backed provider
pub struct ChromeTabs;

impl TabProvider for ChromeTabs {
    async fn active_tab_url(&self) -> Result<Option<String>, PopupError> {
        let tab_js = getActiveTab()
            .await
            .map_err(|e| PopupError::TabQuery(describe_js_error(&e)))?;

        if tab_js.is_null() || tab_js.is_undefined() {
            return Ok(None);
        }

        let tab: ActiveTab = serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| PopupError::TabQuery(format!("Failed to parse tab: {:?}", e)))?;

        Ok(tab.url.filter(|url| !url.is_empty()))
    }
}
