use leptos::web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen::JsCast;

fn input_element(ev: &leptos::ev::Event) -> Option<HtmlInputElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
}

pub fn textarea_value(ev: &leptos::ev::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}

pub fn selected_file(ev: &leptos::ev::Event) -> Option<File> {
    input_element(ev)?.files()?.get(0)
}

/// Lets the same file be picked again after an upload.
pub fn clear_input(ev: &leptos::ev::Event) {
    if let Some(input) = input_element(ev) {
        input.set_value("");
    }
}
