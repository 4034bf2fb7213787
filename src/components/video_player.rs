use leptos::html;
use leptos::prelude::*;

#[component]
pub fn VideoPlayer(
    src: String,
    video_ref: NodeRef<html::Video>,
    /// Lines currently on screen; replaced wholesale on every tick.
    overlay: Memo<Vec<String>>,
    on_time_update: Callback<f64>,
) -> impl IntoView {
    let handle_time_update = move |_| {
        if let Some(video) = video_ref.get_untracked() {
            on_time_update.run(video.current_time());
        }
    };

    view! {
        <div class="video-frame">
            <video
                node_ref=video_ref
                src=src
                class="video"
                controls=true
                on:timeupdate=handle_time_update
            />
            <div class="caption-container" class:empty=move || overlay.with(|lines| lines.is_empty())>
                {move || {
                    overlay
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, line)| view! { <span>{(i > 0).then(|| view! { <br /> })}{line}</span> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
