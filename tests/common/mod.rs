// Recording stand-ins for the browser speech, music and timer handles.
#![allow(dead_code)]

use naidi::error::{Error, Result};
use naidi::speech::{SpeechEngine, Utterance, UtteranceId, Voice};
use naidi::timer::{TimerId, Timers};
use naidi::{GameConfig, Item, Session, audio::MusicPlayer};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
pub struct FakeSpeech {
    pub voices: Vec<Voice>,
    pub spoken: Vec<Utterance>,
    pub cancels: usize,
}

impl FakeSpeech {
    pub fn with_russian_voice() -> Self {
        Self {
            voices: vec![Voice {
                name: "Milena".into(),
                lang: "ru-RU".into(),
            }],
            ..Default::default()
        }
    }
}

impl SpeechEngine for FakeSpeech {
    fn cancel(&mut self) {
        self.cancels += 1;
    }
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }
    fn speak(&mut self, utterance: Utterance) {
        self.spoken.push(utterance);
    }
}

#[derive(Default)]
pub struct FakeMusic {
    pub refuse: bool,
    pub playing: bool,
    pub plays: usize,
    pub stops: usize,
}

impl MusicPlayer for FakeMusic {
    fn play(&mut self) -> Result<()> {
        if self.refuse {
            return Err(Error::Playback("NotAllowedError".into()));
        }
        self.plays += 1;
        self.playing = true;
        Ok(())
    }
    fn stop(&mut self) {
        self.stops += 1;
        self.playing = false;
    }
}

#[derive(Default)]
pub struct FakeTimers {
    pub scheduled: Vec<(TimerId, u32)>,
    pub cancelled: Vec<TimerId>,
}

impl Timers for FakeTimers {
    fn schedule(&mut self, id: TimerId, delay_ms: u32) {
        self.scheduled.push((id, delay_ms));
    }
    fn cancel(&mut self, id: TimerId) {
        self.cancelled.push(id);
    }
}

pub type TestSession = Session<FakeSpeech, FakeMusic, FakeTimers>;

pub fn session(seed: u64) -> TestSession {
    session_with(seed, GameConfig::default(), FakeSpeech::with_russian_voice(), FakeMusic::default())
}

pub fn session_with(seed: u64, config: GameConfig, speech: FakeSpeech, music: FakeMusic) -> TestSession {
    Session::with_rng(
        config,
        speech,
        music,
        FakeTimers::default(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

pub fn last_text(s: &TestSession) -> String {
    s.speech().spoken.last().unwrap().text.clone()
}

pub fn last_utterance(s: &TestSession) -> UtteranceId {
    s.speech().spoken.last().unwrap().id
}

pub fn last_timer(s: &TestSession) -> (TimerId, u32) {
    *s.timers().scheduled.last().unwrap()
}

/// Reports the most recent utterance as finished.
pub fn finish_speech(s: &mut TestSession) {
    let id = last_utterance(s);
    s.speech_ended(id);
}

/// Fires the most recently scheduled timer and returns its delay.
pub fn fire_last_timer(s: &mut TestSession) -> u32 {
    let (id, delay) = last_timer(s);
    s.timer_fired(id);
    delay
}

pub fn target(s: &TestSession) -> Item {
    s.round().unwrap().target()
}

pub fn non_target(s: &TestSession) -> Item {
    let round = s.round().unwrap();
    *round.items().iter().find(|&&i| i != round.target()).unwrap()
}
