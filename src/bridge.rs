/// Browser glue: `chrome.storage.local`, `chrome.tabs` and the clock
///
/// The extern functions live in `bridge.js`. Off wasm32 they compile to
/// stubs, so only [`now_millis`] is usable in native builds.
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::error::{self, TabStateError};
use crate::operations::{TabSink, TabSource};
use crate::storage::KeyValueStore;
use crate::tab_data::TabInfo;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createBackgroundTab(url: &str) -> Result<(), JsValue>;
}

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_else(|e| {
            log::warn!("system clock is before the epoch: {}", e);
            0
        })
}

/// `chrome.storage.local`
#[derive(Debug, Default, Clone, Copy)]
pub struct ChromeStorage;

impl KeyValueStore for ChromeStorage {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> error::Result<Option<T>> {
        let value = getStorage(key)
            .await
            .map_err(|e| TabStateError::Storage(format!("Failed to get storage: {:?}", e)))?;

        if value.is_null() || value.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| TabStateError::Storage(format!("Failed to parse storage: {:?}", e)))
    }

    async fn set<T: Serialize>(&self, key: &str, value: &T) -> error::Result<()> {
        // Plain objects, not ES Maps, so chrome.storage can persist them
        let value_js = value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| TabStateError::Storage(format!("Failed to serialize storage: {:?}", e)))?;

        setStorage(key, value_js)
            .await
            .map_err(|e| TabStateError::Storage(format!("Failed to save storage: {:?}", e)))
    }
}

/// `chrome.tabs` for the current window
#[derive(Debug, Default, Clone, Copy)]
pub struct ChromeTabs;

impl TabSource for ChromeTabs {
    async fn current_window_tabs(&self) -> error::Result<Vec<TabInfo>> {
        let tabs_js = getCurrentWindowTabs()
            .await
            .map_err(|e| TabStateError::Tabs(format!("Failed to get tabs: {:?}", e)))?;

        serde_wasm_bindgen::from_value(tabs_js)
            .map_err(|e| TabStateError::Tabs(format!("Failed to parse tabs: {:?}", e)))
    }
}

impl TabSink for ChromeTabs {
    async fn create_tab(&self, url: &str) -> error::Result<()> {
        createBackgroundTab(url)
            .await
            .map_err(|e| TabStateError::Tabs(format!("Failed to open {}: {:?}", url, e)))
    }
}
