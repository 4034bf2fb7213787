use std::collections::HashMap;

use caption_core::generate::{
    CancellationToken, CaptionGenerator, GenerationProgress, GenerationRequest, GenerationTask,
    PlaceholderGenerator,
};
use caption_core::sync::{self, PlaybackSync};
use caption_core::{seed, settings, srt, CaptionError, CaptionId, CaptionStore};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{alert, download_text, smooth_scroll_to, BrowserTimer};
use crate::components::caption_controls::CaptionControls;
use crate::components::caption_editor::CaptionEditor;
use crate::components::video_player::VideoPlayer;

const SETTINGS_JSON: &str = include_str!("../settings.json");

/// Rendered caption cards by id, used as scroll targets.
pub type CardRefs = StoredValue<HashMap<CaptionId, NodeRef<html::Div>>>;

fn initial_store() -> CaptionStore {
    match seed::seed_captions() {
        Ok(captions) => CaptionStore::new(captions),
        Err(e) => {
            let err = CaptionError::from(e);
            log::error!("{err}");
            CaptionStore::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let settings = settings::load(SETTINGS_JSON);
    let margin = settings.scroll_margin;

    let (store, set_store) = signal(initial_store());
    let (show_captions, set_show_captions) = signal(settings.show_captions);
    let (current_time, set_current_time) = signal(0.0_f64);
    let (is_generating, set_is_generating) = signal(false);
    let (progress, set_progress) = signal::<Option<GenerationProgress>>(None);

    let video_ref = NodeRef::<html::Video>::new();
    let editor_ref = NodeRef::<html::Div>::new();
    let card_refs: CardRefs = StoredValue::new(HashMap::new());
    let running: StoredValue<Option<CancellationToken>> = StoredValue::new(None);

    let overlay = Memo::new(move |_| {
        let sync = PlaybackSync::new(show_captions.get(), margin);
        store.with(|s| sync.tick(s, current_time.get()).overlay)
    });

    let on_time_update = Callback::new(move |time: f64| {
        set_current_time.set(time);
        let sync = PlaybackSync::new(show_captions.get_untracked(), margin);
        let Some(id) = store.with_untracked(|s| sync.tick(s, time).scroll_target) else {
            return;
        };
        let Some(editor) = editor_ref.get_untracked() else {
            return;
        };
        let card = card_refs.with_value(|refs| refs.get(&id).and_then(|r| r.try_get_untracked().flatten()));
        if let Some(card) = card {
            let top = sync.scroll_top_from_viewport(
                card.get_bounding_client_rect().top(),
                editor.get_bounding_client_rect().top(),
                editor.scroll_top() as f64,
            );
            smooth_scroll_to(&editor, top);
        }
    });

    let on_seek = Callback::new(move |id: CaptionId| {
        let Some(time) = store.with_untracked(|s| sync::seek_time(s, id)) else {
            return;
        };
        // Not mounted yet: nothing to seek.
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        video.set_current_time(time);
        if let Err(e) = video.play() {
            log::warn!("Playback did not start: {}", crate::api::extract_error(e));
        }
    });

    let on_update = Callback::new(move |(id, text): (CaptionId, String)| {
        set_store.update(|s| {
            s.update_text(id, text);
        });
    });

    let on_upload = Callback::new(move |content: String| {
        let mut next = store.get_untracked();
        match next.load_srt(&content) {
            Ok(count) => {
                log::info!("Loaded {count} captions from upload");
                card_refs.update_value(|refs| refs.clear());
                set_store.set(next);
            }
            Err(e) => {
                let err = CaptionError::from(e);
                log::error!("Error parsing caption file: {err}");
                alert(err.user_message());
            }
        }
    });

    let video_src = settings.video_src.clone();
    let (delay_ms, steps) = (settings.generate_delay_ms, settings.generate_steps);
    let on_generate = Callback::new(move |_: ()| {
        if is_generating.get_untracked() {
            return;
        }
        set_is_generating.set(true);
        set_progress.set(None);

        let task = GenerationTask::new(move |p| set_progress.set(Some(p)));
        running.set_value(Some(task.token()));
        let request = GenerationRequest {
            source: video_src.clone(),
            current: store.with_untracked(|s| s.captions().to_vec()),
        };
        let generator = PlaceholderGenerator::new(BrowserTimer, delay_ms, steps);

        spawn_local(async move {
            let result = generator.generate(request, &task).await;
            if task.is_cancelled() {
                // The app was torn down; its signals are gone.
                log::info!("Caption generation cancelled");
                return;
            }
            match result {
                Ok(captions) => {
                    card_refs.update_value(|refs| refs.clear());
                    set_store.update(|s| s.replace_all(captions));
                }
                Err(e) => {
                    let err = CaptionError::from(e);
                    log::error!("{err}");
                    alert(err.user_message());
                }
            }
            running.set_value(None);
            set_progress.set(None);
            set_is_generating.set(false);
        });
    });

    on_cleanup(move || {
        if let Some(token) = running.try_get_value().flatten() {
            token.cancel();
        }
    });

    let on_export = Callback::new(move |_: ()| {
        let content = store.with_untracked(|s| srt::encode(s.captions()));
        if let Err(e) = download_text("captions.srt", "application/x-subrip", &content) {
            log::error!("Export failed: {e}");
        }
    });

    view! {
        <main class="shell">
            <header class="hero">
                <p class="eyebrow">"Caption Studio"</p>
                <h1>"VideoHub Pro"</h1>
            </header>

            <section class="grid">
                <div class="column">
                    <div class="card player-card">
                        <VideoPlayer src=settings.video_src video_ref overlay on_time_update />
                        <button
                            class="toggle"
                            class:active=move || show_captions.get()
                            title=move || if show_captions.get() { "Hide Captions" } else { "Show Captions" }
                            on:click=move |_| set_show_captions.update(|show| *show = !*show)
                        >
                            {move || if show_captions.get() { "CC" } else { "CC off" }}
                        </button>
                    </div>

                    <div class="card">
                        <div class="card-header"><p class="eyebrow">"Video Information"</p></div>
                        <h3>"Athlete Academy Feature"</h3>
                        <p class="result-text">
                            "Feature story on Ashton Martin's training at the Athlete Academy in Berlin. "
                            "Watch how dedication and hard work shape the future of local athletes."
                        </p>
                    </div>
                </div>

                <div class="card editor-card">
                    <div class="card-header"><p class="eyebrow">"Caption Editor"</p></div>
                    <CaptionControls is_generating progress on_upload on_generate on_export />
                    <div class="caption-scroll" node_ref=editor_ref>
                        <CaptionEditor store current_time card_refs on_update on_seek />
                    </div>
                </div>
            </section>
        </main>
    }
}
