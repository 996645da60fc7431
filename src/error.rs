//! Generation errors

use thiserror::Error;

/// Generation result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generation errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("no free position for a {size}-unit shape among {occupied} placed shapes after {attempts} attempts")]
    PlacementExhausted {
        size: u32,
        occupied: usize,
        attempts: u32,
    },

    #[error("no valid split of {pool} objects into boxes of at most {max_per_box} after {attempts} attempts")]
    SplitSelectionExhausted {
        pool: usize,
        max_per_box: u32,
        attempts: u32,
    },

    #[error("no environment distinct from {history} previous ones after {attempts} attempts")]
    GenerationExhausted { attempts: u32, history: usize },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
