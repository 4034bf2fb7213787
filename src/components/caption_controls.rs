use caption_core::generate::GenerationProgress;
use caption_core::CaptionError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{alert, read_file_text};
use crate::utils::{clear_input, selected_file};

#[component]
pub fn CaptionControls(
    is_generating: ReadSignal<bool>,
    progress: ReadSignal<Option<GenerationProgress>>,
    on_upload: Callback<String>,
    on_generate: Callback<()>,
    on_export: Callback<()>,
) -> impl IntoView {
    let handle_file = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        clear_input(&ev);
        spawn_local(async move {
            match read_file_text(&file).await {
                Ok(text) => on_upload.run(text),
                Err(e) => {
                    let err = CaptionError::Upload(e);
                    log::error!("Error reading caption file: {err}");
                    alert(err.user_message());
                }
            }
        });
    };

    let generate_label = move || {
        if !is_generating.get() {
            return "Auto-Generate".to_string();
        }
        match progress.get() {
            Some(p) => format!("Generating... {:.0}%", p.fraction() * 100.0),
            None => "Generating...".to_string(),
        }
    };

    view! {
        <div class="control-row">
            <label class="button upload">
                <input type="file" accept=".srt" class="hidden" on:change=handle_file />
                "Upload Captions"
            </label>
            <button
                class:busy=move || is_generating.get()
                disabled=move || is_generating.get()
                on:click=move |_| on_generate.run(())
            >
                {generate_label}
            </button>
            <button class="ghost" on:click=move |_| on_export.run(())>"Export SRT"</button>
        </div>
    }
}
