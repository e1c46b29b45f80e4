//! Snapshot File I/O
//!
//! Browser-side glue for handing a progress snapshot to the user as a
//! downloaded file. Reading the import file lives with the file picker in
//! `components/progress_controls.rs`.

use wasm_bindgen::{JsCast, JsValue};

use crate::progress::ProgressSnapshot;

/// Current time as an ISO-8601 string, for the snapshot's `exportDate`.
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Today as `YYYY-MM-DD`, for the download filename.
pub fn today_stamp() -> String {
    let iso = now_iso();
    iso.split('T').next().unwrap_or(&iso).to_string()
}

/// Triggers a download of the snapshot as
/// `pictos-progression-<YYYY-MM-DD>.json` via a temporary object URL.
pub fn download_snapshot(snapshot: &ProgressSnapshot) -> Result<(), JsValue> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&format!("pictos-progression-{}.json", today_stamp()));
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
