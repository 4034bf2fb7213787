use serde::{Deserialize, Serialize};

use crate::sync::DEFAULT_SCROLL_MARGIN;

pub const DEFAULT_VIDEO_SRC: &str =
    "https://cdn.field59.com/DELMARVASPORTS/abb9326c410f2544e39b738006f02524b6dc9d1e_fl9-720p.mp4";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub video_src: String,
    pub scroll_margin: f64,
    pub generate_delay_ms: u32,
    pub generate_steps: u32,
    pub show_captions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            video_src: DEFAULT_VIDEO_SRC.to_string(),
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            generate_delay_ms: 2_000,
            generate_steps: 4,
            show_captions: true,
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Parse settings, falling back to defaults when `raw` is not valid JSON.
pub fn load(raw: &str) -> Settings {
    match Settings::from_json(raw) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to parse settings, using defaults: {e}");
            Settings::default()
        }
    }
}
