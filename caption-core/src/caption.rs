use serde::{Deserialize, Serialize};

/// Stable identifier of a caption within one store generation.
pub type CaptionId = u32;

/// One timed caption. Times are in seconds from the start of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    pub id: CaptionId,
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl Caption {
    pub fn new(id: CaptionId, start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            id,
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// Inclusive on both ends, so adjacent captions share their boundary instant.
    pub fn is_active_at(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}
