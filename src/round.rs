//! One "find the item" round: the dealt board, its target, and the
//! correct / wrong highlight. Sequencing (speech, delays) lives in the session.

use rand::Rng;

use crate::error::{Error, Result};
use crate::items::{self, Item, Mode};
use crate::shuffle::shuffle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    AwaitingAnswer,
    CorrectFeedback,
    WrongFeedback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tap {
    Correct,
    Wrong,
    Ignored,
}

#[derive(Clone, Debug)]
pub struct Round {
    mode: Mode,
    items: Vec<Item>,
    target: Item,
    correct: Option<Item>,
    wrong: Option<Item>,
}

impl Round {
    pub fn deal<R: Rng + ?Sized>(mode: Mode, grid_size: usize, rng: &mut R) -> Result<Round> {
        Self::deal_from(mode, &mode.source(), grid_size, rng)
    }

    /// Deals from an explicit source; fails rather than running a short board.
    pub fn deal_from<R: Rng + ?Sized>(
        mode: Mode,
        source: &[Item],
        grid_size: usize,
        rng: &mut R,
    ) -> Result<Round> {
        if grid_size == 0 || source.len() < grid_size {
            return Err(Error::NotEnoughItems {
                mode,
                available: source.len(),
                needed: grid_size.max(1),
            });
        }
        let mut items = shuffle(source, rng);
        items.truncate(grid_size);
        let target = items[rng.gen_range(0..items.len())];
        Ok(Round {
            mode,
            items,
            target,
            correct: None,
            wrong: None,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn target(&self) -> Item {
        self.target
    }

    pub fn correct(&self) -> Option<Item> {
        self.correct
    }

    pub fn wrong(&self) -> Option<Item> {
        self.wrong
    }

    pub fn state(&self) -> RoundState {
        match (self.correct, self.wrong) {
            (Some(_), _) => RoundState::CorrectFeedback,
            (None, Some(_)) => RoundState::WrongFeedback,
            (None, None) => RoundState::AwaitingAnswer,
        }
    }

    pub fn prompt(&self) -> String {
        items::prompt(self.mode, self.target)
    }

    pub fn tap(&mut self, item: Item) -> Tap {
        if self.correct.is_some() || !self.items.contains(&item) {
            return Tap::Ignored;
        }
        if item == self.target {
            self.wrong = None;
            self.correct = Some(item);
            Tap::Correct
        } else {
            self.wrong = Some(item);
            Tap::Wrong
        }
    }

    pub fn clear_wrong(&mut self) {
        self.wrong = None;
    }

    pub fn clear_correct(&mut self) {
        self.correct = None;
    }
}
