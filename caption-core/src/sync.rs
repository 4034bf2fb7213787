//! Maps playback time onto the overlay text and the editor scroll target.

use crate::caption::CaptionId;
use crate::store::CaptionStore;

pub const DEFAULT_SCROLL_MARGIN: f64 = 100.0;

/// What the UI should show for one playback tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncFrame {
    pub time: f64,
    /// Active caption texts in store order. Empty while captions are hidden.
    pub overlay: Vec<String>,
    /// First active caption in store order, if any. `None` leaves the editor where it is.
    pub scroll_target: Option<CaptionId>,
}

impl SyncFrame {
    pub fn overlay_text(&self) -> String {
        self.overlay.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSync {
    show_captions: bool,
    scroll_margin: f64,
}

impl Default for PlaybackSync {
    fn default() -> Self {
        Self::new(true, DEFAULT_SCROLL_MARGIN)
    }
}

impl PlaybackSync {
    pub fn new(show_captions: bool, scroll_margin: f64) -> Self {
        Self {
            show_captions,
            scroll_margin,
        }
    }

    pub fn tick(&self, store: &CaptionStore, time: f64) -> SyncFrame {
        let overlay = if self.show_captions {
            store.active_at(time).into_iter().map(|c| c.text.clone()).collect()
        } else {
            Vec::new()
        };
        let scroll_target = store.first_active(time).map(|c| c.id);
        log::debug!("Sync tick at {time:.3}s -> target {scroll_target:?}");

        SyncFrame {
            time,
            overlay,
            scroll_target,
        }
    }

    /// Scroll offset that puts a card `scroll_margin` below the top of the editor.
    /// Both offsets must be measured from the same ancestor.
    pub fn scroll_top(&self, card_offset: f64, container_offset: f64) -> f64 {
        card_offset - container_offset - self.scroll_margin
    }

    /// Same as [`Self::scroll_top`] from viewport positions, as returned by
    /// `getBoundingClientRect`, plus the container's current `scrollTop`.
    pub fn scroll_top_from_viewport(
        &self,
        card_top: f64,
        container_top: f64,
        scrolled: f64,
    ) -> f64 {
        self.scroll_top(scrolled + card_top, container_top)
    }
}

/// Where playback should jump when a caption card is clicked.
pub fn seek_time(store: &CaptionStore, id: CaptionId) -> Option<f64> {
    store.get(id).map(|c| c.start_time)
}
