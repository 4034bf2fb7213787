use caption_core::timecode::format_seconds;
use caption_core::{Caption, CaptionId, CaptionStore};
use leptos::prelude::*;

use crate::app::CardRefs;
use crate::utils::textarea_value;

#[component]
pub fn CaptionEditor(
    store: ReadSignal<CaptionStore>,
    current_time: ReadSignal<f64>,
    card_refs: CardRefs,
    on_update: Callback<(CaptionId, String)>,
    on_seek: Callback<CaptionId>,
) -> impl IntoView {
    // Rows are keyed by revision too, so a replaced list never reuses stale cards.
    let rows = move || {
        store.with(|s| {
            let revision = s.revision();
            s.iter()
                .cloned()
                .map(|caption| (revision, caption))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="caption-list">
            <For
                each=rows
                key=|(revision, caption)| (*revision, caption.id)
                children=move |(_, caption)| {
                    view! { <CaptionCard caption current_time card_refs on_update on_seek /> }
                }
            />
        </div>
    }
}

#[component]
fn CaptionCard(
    caption: Caption,
    current_time: ReadSignal<f64>,
    card_refs: CardRefs,
    on_update: Callback<(CaptionId, String)>,
    on_seek: Callback<CaptionId>,
) -> impl IntoView {
    let id = caption.id;
    let card_ref = NodeRef::<leptos::html::Div>::new();
    card_refs.update_value(|refs| {
        refs.insert(id, card_ref);
    });

    let timing = format!(
        "{}s - {}s",
        format_seconds(caption.start_time),
        format_seconds(caption.end_time)
    );
    let text = caption.text.clone();
    let is_active = move || caption.is_active_at(current_time.get());

    view! {
        <div
            class="caption-card"
            class:active=is_active
            node_ref=card_ref
            on:click=move |_| on_seek.run(id)
        >
            <div class="caption-timing">{timing}</div>
            <div class="caption-body">
                <span class="settings-hint">"Caption Text"</span>
                <textarea
                    class="caption-text"
                    rows=2
                    prop:value=text
                    on:input=move |ev| on_update.run((id, textarea_value(&ev)))
                    on:click=|ev| ev.stop_propagation()
                />
            </div>
        </div>
    }
}
