use thiserror::Error;

use crate::items::Mode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("{mode:?} has {available} items, the board needs {needed}")]
    NotEnoughItems {
        mode: Mode,
        available: usize,
        needed: usize,
    },

    #[error("music playback failed: {0}")]
    Playback(String),

    #[error("config json: {0}")]
    Json(String),
}
