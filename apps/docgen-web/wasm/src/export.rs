//! Browser side of document export: file download and clipboard copy
//!
//! Failures (no DOM, clipboard permission denied) are returned to the
//! caller as `JsValue` errors. The engine never sees them.

use document_engine::TEXT_MIME_TYPE;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Save `text` as a downloadable UTF-8 file named `filename`
pub fn download_text(filename: &str, text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    let body = document.body().ok_or("No document body")?;

    let parts = Array::new();
    parts.push(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(TEXT_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("Failed to create download link"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url)?;

    Ok(())
}

/// Place `text` on the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}
