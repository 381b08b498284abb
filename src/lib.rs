//! Naidi core crate.
//!
//! A child hears "Найди цифру 5" (or a letter) and taps it on a shuffled 3x3
//! board. Two correct answers in a row end in a party screen with music.
//! The game logic ([`session`], [`round`]) is platform independent and talks
//! to speech, music and timers through traits; [`web`] supplies the browser
//! implementations and the DOM front end behind `start_game()`.

use wasm_bindgen::prelude::*;

pub mod audio;
pub mod config;
pub mod error;
pub mod items;
pub mod logging;
pub mod round;
pub mod session;
pub mod shuffle;
pub mod speech;
pub mod timer;
pub mod view;
mod web;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use items::{Item, Mode};
pub use round::{Round, RoundState, Tap};
pub use session::{Screen, Session};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// Item datasets
// -----------------------------------------------------------------------------

pub const NUMBERS: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Russian alphabet without Ё, Ъ, Ы and Ь (29 letters).
pub const LETTERS: &[char] = &[
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Э', 'Ю', 'Я',
];

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> std::result::Result<(), JsValue> {
    web::start(GameConfig::default())
}

/// Starts the game with fields overridden from a JSON object.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> std::result::Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    web::start(config)
}
