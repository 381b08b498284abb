//! Game tunables. Everything here has a sensible default; the browser entry
//! point can override fields from JSON when the `serde_json` feature is on.

use crate::error::{Error, Result};
use crate::items::Mode;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct GameConfig {
    /// BCP-47 tag a voice must carry to be preferred over the platform default.
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
    /// Tiles on the board (3x3 by default).
    pub grid_size: usize,
    /// Correct answers in a row that end in a party.
    pub party_streak: u32,
    pub next_round_delay_ms: u32,
    pub wrong_clear_delay_ms: u32,
    pub party_delay_ms: u32,
    pub music_src: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            locale: "ru-RU".to_string(),
            rate: 0.9,
            pitch: 1.2,
            grid_size: 9,
            party_streak: 2,
            next_round_delay_ms: 500,
            wrong_clear_delay_ms: 500,
            party_delay_ms: 700,
            music_src: "music.mp3".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            return Err(Error::InvalidConfig("locale must not be empty".into()));
        }
        if !(0.1..=10.0).contains(&self.rate) {
            return Err(Error::InvalidConfig(format!(
                "rate {} outside 0.1..=10",
                self.rate
            )));
        }
        if !(0.0..=2.0).contains(&self.pitch) {
            return Err(Error::InvalidConfig(format!(
                "pitch {} outside 0..=2",
                self.pitch
            )));
        }
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid_size must be at least 1".into()));
        }
        for mode in Mode::ALL {
            let available = mode.source().len();
            if available < self.grid_size {
                return Err(Error::NotEnoughItems {
                    mode,
                    available,
                    needed: self.grid_size,
                });
            }
        }
        if self.party_streak == 0 {
            return Err(Error::InvalidConfig("party_streak must be at least 1".into()));
        }
        Ok(())
    }

    /// Parses a (possibly partial) JSON object and validates the result.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|err| Error::Json(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
