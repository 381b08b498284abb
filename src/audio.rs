use tracing::{debug, warn};

use crate::error::Result;

/// The single looping party track.
pub trait MusicPlayer {
    fn play(&mut self) -> Result<()>;
    /// Pause and rewind to the start.
    fn stop(&mut self);
}

/// Owns the music handle and remembers whether it was started.
pub struct PartyMusic<M> {
    player: M,
    playing: bool,
}

impl<M: MusicPlayer> PartyMusic<M> {
    pub fn new(player: M) -> Self {
        Self {
            player,
            playing: false,
        }
    }

    /// Starts playback; a refusal (autoplay policy etc.) is logged and ignored.
    pub fn start(&mut self) {
        match self.player.play() {
            Ok(()) => {
                debug!("party music started");
                self.playing = true;
            }
            Err(err) => warn!(%err, "party music did not start"),
        }
    }

    pub fn stop(&mut self) {
        if self.playing {
            debug!("party music stopped");
        }
        self.player.stop();
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn player(&self) -> &M {
        &self.player
    }
}
