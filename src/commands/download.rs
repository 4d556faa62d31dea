//! File Download
//!
//! Offers generated text (the `.ics` export) as a file download.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::js_error;

pub fn download_text_file(file_name: &str, mime_type: &str, content: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(|e| js_error(&e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_error(&e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error(&e))?
        .dyn_into()
        .map_err(|_| "Not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Revoke later; some browsers start the download asynchronously
    Timeout::new(1_000, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("[DOWNLOAD] {}", js_error(&e));
        }
    })
    .forget();
    log::info!("[DOWNLOAD] {} ({} bytes)", file_name, content.len());
    Ok(())
}
