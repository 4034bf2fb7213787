use thiserror::Error;

use crate::caption::Caption;

const SEED_JSON: &str = include_str!("../assets/seed_captions.json");

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Seed captions are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Captions for the bundled demo video.
pub fn seed_captions() -> Result<Vec<Caption>, SeedError> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
