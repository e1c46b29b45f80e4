//! Catalog Store
//!
//! One-shot fetch of the bundled picto catalog. The catalog is immutable
//! for the rest of the session; a failed fetch degrades to an empty list.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::Picto;

const CATALOG_URL: &str = "pictos.json";

pub fn parse_catalog(raw: &str) -> serde_json::Result<Vec<Picto>> {
    serde_json::from_str(raw)
}

/// Fetches and parses the bundled catalog asset.
pub async fn fetch_catalog() -> Result<Vec<Picto>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(CATALOG_URL))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "catalog request failed with status {}",
            response.status()
        )));
    }
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    parse_catalog(&text).map_err(|err| JsValue::from_str(&err.to_string()))
}
