//! Session / menu controller.
//!
//! Owns the top-level screen, the streak and the party flag, and drives the
//! round through its spoken feedback. Every wait (end of an utterance, a
//! delay) is a [`Pending`] step keyed by the id the platform will report
//! back; completions for any other id are stale and dropped, so a cancelled
//! or superseded step can never touch the current state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, error, info};

use crate::audio::{MusicPlayer, PartyMusic};
use crate::config::GameConfig;
use crate::error::Result;
use crate::items::{Item, Mode};
use crate::round::{Round, RoundState, Tap};
use crate::speech::{Announcer, SpeechEngine, UtteranceId};
use crate::timer::{TimerId, Timers};
use crate::view::{Heading, Highlight, TileView, View};

pub const POSITIVE_FEEDBACK: &[&str] = &[
    "Молодец!",
    "Отлично!",
    "Правильно!",
    "Умница!",
    "Так держать!",
    "Великолепно!",
    "Супер!",
];

pub const TRY_AGAIN: &str = "Попробуй ещё";

pub const PARTY_PHRASE: &str = "Ура! Время праздника!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing(Mode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    /// Praise is being spoken after a correct tap.
    Praise(UtteranceId),
    /// Closing phrase before the party.
    Closing(UtteranceId),
    NextRound(TimerId),
    Party(TimerId),
}

pub struct Session<S, M, T> {
    config: GameConfig,
    announcer: Announcer<S>,
    music: PartyMusic<M>,
    timers: T,
    rng: StdRng,
    screen: Screen,
    round: Option<Round>,
    streak: u32,
    party: bool,
    voices_ready: bool,
    pending: Option<Pending>,
    wrong_clear: Option<TimerId>,
    next_timer: u64,
}

impl<S: SpeechEngine, M: MusicPlayer, T: Timers> Session<S, M, T> {
    pub fn new(config: GameConfig, speech: S, music: M, timers: T) -> Result<Self> {
        Self::with_rng(config, speech, music, timers, StdRng::from_entropy())
    }

    pub fn with_rng(
        config: GameConfig,
        speech: S,
        music: M,
        timers: T,
        rng: StdRng,
    ) -> Result<Self> {
        config.validate()?;
        let announcer = Announcer::new(speech, &config);
        // Voices may already be loaded, in which case no change notification comes.
        let voices_ready = announcer.voices_available();
        Ok(Self {
            config,
            announcer,
            music: PartyMusic::new(music),
            timers,
            rng,
            screen: Screen::Menu,
            round: None,
            streak: 0,
            party: false,
            voices_ready,
            pending: None,
            wrong_clear: None,
            next_timer: 0,
        })
    }

    pub fn select_mode(&mut self, mode: Mode) {
        if self.screen != Screen::Menu {
            debug!(?mode, screen = ?self.screen, "mode selection outside the menu ignored");
            return;
        }
        info!(?mode, "mode selected");
        self.screen = Screen::Playing(mode);
        self.streak = 0;
        if self.voices_ready {
            self.start_round();
        } else {
            debug!("voices not loaded, first round deferred");
        }
    }

    /// Platform notification that the voice list changed (usually: finished loading).
    pub fn voices_changed(&mut self) {
        let first = !self.voices_ready;
        self.voices_ready = true;
        if first && !self.party && self.round.is_none() && matches!(self.screen, Screen::Playing(_)) {
            self.start_round();
        }
    }

    pub fn tap(&mut self, item: Item) -> Tap {
        if self.party {
            return Tap::Ignored;
        }
        let Some(round) = self.round.as_mut() else {
            return Tap::Ignored;
        };
        let outcome = round.tap(item);
        match outcome {
            Tap::Correct => {
                self.cancel_wrong_clear();
                self.streak += 1;
                debug!(%item, streak = self.streak, "correct");
                let phrase = POSITIVE_FEEDBACK
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or("Молодец!");
                let id = self.announcer.announce(phrase);
                self.pending = Some(Pending::Praise(id));
            }
            Tap::Wrong => {
                debug!(%item, "wrong");
                self.announcer.announce(TRY_AGAIN);
                self.cancel_wrong_clear();
                let delay = self.config.wrong_clear_delay_ms;
                self.wrong_clear = Some(self.schedule(delay));
            }
            Tap::Ignored => {}
        }
        outcome
    }

    /// Says the current prompt again. Returns whether anything was said.
    pub fn repeat_prompt(&mut self) -> bool {
        if self.party {
            return false;
        }
        match &self.round {
            Some(round) if round.state() != RoundState::CorrectFeedback => {
                let prompt = round.prompt();
                self.announcer.announce(&prompt);
                true
            }
            _ => false,
        }
    }

    pub fn exit_to_menu(&mut self) {
        info!(streak = self.streak, "back to menu");
        self.announcer.cancel();
        self.cancel_wrong_clear();
        match self.pending.take() {
            Some(Pending::NextRound(id)) | Some(Pending::Party(id)) => self.timers.cancel(id),
            _ => {}
        }
        if self.party || self.music.is_playing() {
            self.music.stop();
        }
        self.party = false;
        self.streak = 0;
        self.round = None;
        self.screen = Screen::Menu;
    }

    pub fn end_party(&mut self) {
        if !self.party {
            return;
        }
        self.party = false;
        self.music.stop();
        self.exit_to_menu();
    }

    /// Platform report that utterance `id` finished.
    pub fn speech_ended(&mut self, id: UtteranceId) {
        match self.pending {
            Some(Pending::Praise(p)) if p == id => {
                if self.streak >= self.config.party_streak {
                    let closing = self.announcer.announce(PARTY_PHRASE);
                    self.pending = Some(Pending::Closing(closing));
                } else {
                    let delay = self.config.next_round_delay_ms;
                    let t = self.schedule(delay);
                    self.pending = Some(Pending::NextRound(t));
                }
            }
            Some(Pending::Closing(p)) if p == id => {
                let delay = self.config.party_delay_ms;
                let t = self.schedule(delay);
                self.pending = Some(Pending::Party(t));
            }
            _ => debug!(id = id.0, "stale speech completion"),
        }
    }

    /// Platform report that timer `id` fired.
    pub fn timer_fired(&mut self, id: TimerId) {
        if self.wrong_clear == Some(id) {
            self.wrong_clear = None;
            if let Some(round) = self.round.as_mut() {
                round.clear_wrong();
            }
            return;
        }
        match self.pending {
            Some(Pending::NextRound(t)) if t == id => {
                self.pending = None;
                self.start_round();
            }
            Some(Pending::Party(t)) if t == id => {
                self.pending = None;
                self.start_party();
            }
            _ => debug!(id = id.0, "stale timer"),
        }
    }

    pub fn view(&self) -> View {
        let Screen::Playing(mode) = self.screen else {
            return View::Menu;
        };
        if self.party {
            return View::Party;
        }
        let Some(round) = &self.round else {
            return View::Playing {
                mode,
                heading: Heading::Waiting,
                tiles: Vec::new(),
            };
        };
        let heading = if round.correct().is_some() {
            Heading::Praise
        } else {
            Heading::Find {
                mode,
                target: round.target(),
            }
        };
        let tiles = round
            .items()
            .iter()
            .map(|&item| TileView {
                item,
                highlight: if round.correct() == Some(item) {
                    Highlight::Correct
                } else if round.wrong() == Some(item) {
                    Highlight::Wrong
                } else {
                    Highlight::None
                },
            })
            .collect();
        View::Playing {
            mode,
            heading,
            tiles,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn is_party(&self) -> bool {
        self.party
    }

    pub fn voices_ready(&self) -> bool {
        self.voices_ready
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn speech(&self) -> &S {
        self.announcer.engine()
    }

    pub fn speech_mut(&mut self) -> &mut S {
        self.announcer.engine_mut()
    }

    pub fn music(&self) -> &M {
        self.music.player()
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    fn start_round(&mut self) {
        let Screen::Playing(mode) = self.screen else {
            return;
        };
        self.cancel_wrong_clear();
        self.pending = None;
        match Round::deal(mode, self.config.grid_size, &mut self.rng) {
            Ok(round) => {
                debug!(?mode, target = %round.target(), "new round");
                self.announcer.announce(&round.prompt());
                self.round = Some(round);
            }
            Err(err) => {
                error!(%err, "could not deal a round");
                self.exit_to_menu();
            }
        }
    }

    fn start_party(&mut self) {
        info!("party");
        self.party = true;
        self.streak = 0;
        if let Some(round) = self.round.as_mut() {
            round.clear_correct();
        }
        self.music.start();
    }

    fn schedule(&mut self, delay_ms: u32) -> TimerId {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.timers.schedule(id, delay_ms);
        id
    }

    fn cancel_wrong_clear(&mut self) {
        if let Some(id) = self.wrong_clear.take() {
            self.timers.cancel(id);
        }
    }
}
