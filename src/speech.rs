//! Speech output. The platform side is the [`SpeechEngine`] trait; the game
//! only talks to it through an [`Announcer`], which keeps at most one
//! utterance alive and tags each one with an [`UtteranceId`] so completions
//! can be matched to the request that caused them.

use tracing::debug;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtteranceId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub text: String,
    pub lang: String,
    /// `None` leaves voice choice to the platform.
    pub voice: Option<Voice>,
    pub rate: f32,
    pub pitch: f32,
}

pub trait SpeechEngine {
    /// Drops everything queued or playing.
    fn cancel(&mut self);
    /// Currently known voices; may be empty until the platform has loaded them.
    fn voices(&self) -> Vec<Voice>;
    /// Queues `utterance`. The owner is told about completion with `utterance.id`.
    fn speak(&mut self, utterance: Utterance);
}

pub struct Announcer<S> {
    engine: S,
    locale: String,
    rate: f32,
    pitch: f32,
    next_id: u64,
}

impl<S: SpeechEngine> Announcer<S> {
    pub fn new(engine: S, config: &GameConfig) -> Self {
        Self {
            engine,
            locale: config.locale.clone(),
            rate: config.rate,
            pitch: config.pitch,
            next_id: 0,
        }
    }

    /// Cancels whatever is being said and starts `text`.
    pub fn announce(&mut self, text: &str) -> UtteranceId {
        self.engine.cancel();
        self.next_id += 1;
        let id = UtteranceId(self.next_id);
        let voice = self
            .engine
            .voices()
            .into_iter()
            .find(|v| v.lang == self.locale);
        debug!(id = id.0, text, voice = ?voice.as_ref().map(|v| &v.name), "announce");
        self.engine.speak(Utterance {
            id,
            text: text.to_string(),
            lang: self.locale.clone(),
            voice,
            rate: self.rate,
            pitch: self.pitch,
        });
        id
    }

    pub fn cancel(&mut self) {
        self.engine.cancel();
    }

    pub fn voices_available(&self) -> bool {
        !self.engine.voices().is_empty()
    }

    pub fn engine(&self) -> &S {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut S {
        &mut self.engine
    }
}
