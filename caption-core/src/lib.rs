pub mod caption;
pub mod error;
pub mod generate;
pub mod seed;
pub mod settings;
pub mod srt;
pub mod store;
pub mod sync;
pub mod timecode;

pub use caption::{Caption, CaptionId};
pub use error::CaptionError;
pub use settings::Settings;
pub use store::CaptionStore;
