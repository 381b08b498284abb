//! Render snapshot handed to the presentation layer after every event.

use crate::items::{Item, Mode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    None,
    Correct,
    Wrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileView {
    pub item: Item,
    pub highlight: Highlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    /// Mode chosen but voices not loaded yet, so no round has been dealt.
    Waiting,
    Find { mode: Mode, target: Item },
    Praise,
}

impl Heading {
    pub fn text(&self) -> String {
        match self {
            Heading::Waiting => "Приготовься...".to_string(),
            Heading::Find { mode, target } => format!("Найди {}: {}", mode.prompt_word(), target),
            Heading::Praise => "Молодец!".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Menu,
    Playing {
        mode: Mode,
        heading: Heading,
        tiles: Vec<TileView>,
    },
    Party,
}
