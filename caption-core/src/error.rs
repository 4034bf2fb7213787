use thiserror::Error;

use crate::generate::GenerateError;
use crate::seed::SeedError;
use crate::srt::SrtError;

pub const INVALID_CAPTION_FILE: &str =
    "Invalid caption file format. Please upload a valid SRT file.";

/// Unified caption errors.
#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("SRT: {0}")]
    Srt(#[from] SrtError),

    #[error("Generate: {0}")]
    Generate(#[from] GenerateError),

    #[error("Seed: {0}")]
    Seed(#[from] SeedError),

    #[error("Upload: {0}")]
    Upload(String),
}

impl CaptionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Srt(_) | Self::Upload(_) => INVALID_CAPTION_FILE,
            Self::Generate(GenerateError::Cancelled) => "Caption generation was cancelled.",
            Self::Generate(GenerateError::Backend(_)) => {
                "Caption generation failed. Please try again."
            }
            Self::Seed(_) => "Demo captions could not be loaded.",
        }
    }
}
