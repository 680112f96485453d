/// Tab State QR - share open tabs as a compact token, link or QR code
/// Built with Rust + WASM
pub mod bridge;
pub mod codec;
pub mod domain;
pub mod error;
pub mod history;
pub mod operations;
pub mod parser;
pub mod share;
pub mod storage;
pub mod tab_data;

use log::error;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::bridge::{ChromeStorage, ChromeTabs, now_millis};
use crate::error::TabStateError;
use crate::storage::HistoryStore;

pub use crate::codec::{decode, encode, strip_locator_prefix, to_share_locator};
pub use crate::parser::parse_any;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn to_js_error(err: TabStateError) -> JsValue {
    error!("{}", err);
    JsValue::from_str(&err.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {:?}", e)))
}

fn urls_from_js(urls: JsValue) -> Result<Vec<String>, JsValue> {
    serde_wasm_bindgen::from_value(urls)
        .map_err(|e| JsValue::from_str(&format!("Expected an array of URLs: {:?}", e)))
}

// Re-export the codec for JavaScript access

#[wasm_bindgen(js_name = encodeTabs)]
pub fn encode_tabs(urls: JsValue) -> Result<String, JsValue> {
    Ok(encode(&urls_from_js(urls)?))
}

#[wasm_bindgen(js_name = shareLocator)]
pub fn share_locator(urls: JsValue) -> Result<String, JsValue> {
    Ok(to_share_locator(&urls_from_js(urls)?))
}

#[wasm_bindgen(js_name = sharePayload)]
pub fn share_payload(urls: JsValue) -> Result<JsValue, JsValue> {
    to_js(&share::SharePayload::new(&urls_from_js(urls)?))
}

#[wasm_bindgen(js_name = decodeToken)]
pub fn decode_token(token: &str) -> Result<JsValue, JsValue> {
    to_js(&codec::decode_locator(token).map_err(to_js_error)?)
}

#[wasm_bindgen(js_name = parseInput)]
pub fn parse_input(input: &str) -> Result<JsValue, JsValue> {
    to_js(&parse_any(input).map_err(to_js_error)?)
}

// Tabs and history, backed by the chrome.* APIs

/// Shareable tabs of the current window
#[wasm_bindgen(js_name = captureTabs)]
pub async fn capture_tabs() -> Result<JsValue, JsValue> {
    let state = operations::collect_shareable_tabs(&ChromeTabs, now_millis())
        .await
        .map_err(to_js_error)?;
    to_js(&state)
}

/// The current window's shareable tabs at the given positions, in window order
#[wasm_bindgen(js_name = selectTabs)]
pub async fn select_tabs(indices: JsValue) -> Result<JsValue, JsValue> {
    let indices: Vec<usize> = serde_wasm_bindgen::from_value(indices)
        .map_err(|e| JsValue::from_str(&format!("Expected an array of indices: {:?}", e)))?;
    let state = operations::select_shareable_tabs(&ChromeTabs, &indices, now_millis())
        .await
        .map_err(to_js_error)?;
    to_js(&state)
}

#[wasm_bindgen(js_name = saveHistory)]
pub async fn save_history(urls: JsValue) -> Result<JsValue, JsValue> {
    let urls = urls_from_js(urls)?;
    let entry = HistoryStore::new(ChromeStorage)
        .save(&urls)
        .await
        .map_err(to_js_error)?;
    to_js(&entry)
}

#[wasm_bindgen(js_name = listHistory)]
pub async fn list_history() -> Result<JsValue, JsValue> {
    let entries = HistoryStore::new(ChromeStorage)
        .list()
        .await
        .map_err(to_js_error)?;
    to_js(&entries)
}

/// Reopen the tabs of a history entry; ids arrive as JS numbers
#[wasm_bindgen(js_name = openHistoryEntry)]
pub async fn open_history_entry(id: f64) -> Result<JsValue, JsValue> {
    let urls = HistoryStore::new(ChromeStorage)
        .restore(id as u64)
        .await
        .map_err(to_js_error)?;
    to_js(&operations::open_tabs(&ChromeTabs, &urls).await)
}

/// Reopen the tabs described by pasted text
#[wasm_bindgen(js_name = openPastedInput)]
pub async fn open_pasted_input(input: String) -> Result<JsValue, JsValue> {
    let urls = parse_any(&input).map_err(to_js_error)?;
    to_js(&operations::open_tabs(&ChromeTabs, &urls).await)
}
