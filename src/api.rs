use std::future::Future;

use caption_core::generate::Timer;
use js_sys::{Array, Function, Promise};
use leptos::web_sys::{
    Blob, BlobPropertyBag, Element, File, HtmlAnchorElement, ScrollBehavior, ScrollToOptions, Url,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub async fn read_file_text(file: &File) -> Result<String, String> {
    let value = JsFuture::from(file.text()).await.map_err(extract_error)?;
    value
        .as_string()
        .ok_or_else(|| "File content is not text".to_string())
}

pub fn alert(message: &str) {
    if let Some(window) = leptos::web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            leptos::logging::error!("Failed to show alert: {}", extract_error(e));
        }
    }
}

pub fn smooth_scroll_to(container: &Element, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}

/// Offer `content` to the user as a downloaded file.
pub fn download_text(file_name: &str, mime: &str, content: &str) -> Result<(), String> {
    let document = leptos::web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;

    let parts = Array::of1(&JsValue::from_str(content));
    let bag = BlobPropertyBag::new();
    bag.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &bag).map_err(extract_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(extract_error)?;

    let anchor = document
        .create_element("a")
        .map_err(extract_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Could not create download link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(extract_error)
}

/// `setTimeout` wrapped as a future.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
            let scheduled = leptos::web_sys::window().and_then(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        &resolve,
                        ms.min(i32::MAX as u32) as i32,
                    )
                    .ok()
            });
            if scheduled.is_none() {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        async move {
            if let Err(e) = JsFuture::from(promise).await {
                leptos::logging::warn!("Timer rejected: {}", extract_error(e));
            }
        }
    }
}

pub fn extract_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &"message".into())
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}
