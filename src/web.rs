//! Browser adapter: `web-sys` implementations of the platform traits, DOM
//! rendering of [`View`], and the listeners that feed clicks, speech ends,
//! timers and voice-list changes into the session.
//!
//! The session lives in a thread-local; every callback borrows it, applies a
//! single event and re-renders the whole root element.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlAudioElement, SpeechSynthesis, SpeechSynthesisUtterance,
    SpeechSynthesisVoice, window,
};

use crate::audio::MusicPlayer;
use crate::config::GameConfig;
use crate::error::Error;
use crate::items::{Item, Mode};
use crate::session::Session;
use crate::speech::{SpeechEngine, Utterance, Voice};
use crate::timer::{TimerId, Timers};
use crate::view::{Highlight, TileView, View};

const ROOT_ID: &str = "naidi-root";
const STYLE_ID: &str = "naidi-style";

const TILE_COLORS: [&str; 9] = [
    "#f87171", "#60a5fa", "#4ade80", "#facc15", "#c084fc", "#f472b6", "#818cf8", "#2dd4bf",
    "#fb923c",
];

const KEYFRAMES: &str = "\
@keyframes naidi-shake { 0%,100% { transform: translateX(0); } 20%,60% { transform: translateX(-5px); } 40%,80% { transform: translateX(5px); } }
@keyframes naidi-tada { 0%,100% { transform: scale(1); } 30%,70% { transform: scale(1.1) rotate(3deg); } 50% { transform: scale(1.1) rotate(-3deg); } }";

type WebSession = Session<WebSpeech, WebMusic, WebTimers>;

thread_local! {
    static SESSION: RefCell<Option<WebSession>> = const { RefCell::new(None) };
}

/// Applies `f` to the live session and re-renders. A callback that arrives
/// while the session is already borrowed (e.g. an `end` event fired
/// synchronously by `speechSynthesis.cancel()`) is dropped.
fn with_session(f: impl FnOnce(&mut WebSession)) {
    SESSION.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            debug!("re-entrant browser callback dropped");
            return;
        };
        if let Some(session) = slot.as_mut() {
            f(session);
            if let Err(err) = render(&session.view()) {
                warn!(?err, "render failed");
            }
        }
    });
}

// --- Platform handles -------------------------------------------------------

pub struct WebSpeech {
    synth: SpeechSynthesis,
    // Held so the browser does not collect the utterance before `end` fires.
    current: Option<SpeechSynthesisUtterance>,
}

impl WebSpeech {
    fn new(synth: SpeechSynthesis) -> Self {
        Self {
            synth,
            current: None,
        }
    }

    fn platform_voices(&self) -> Vec<SpeechSynthesisVoice> {
        let voices: js_sys::Array = self.synth.get_voices();
        voices
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect()
    }
}

impl SpeechEngine for WebSpeech {
    fn cancel(&mut self) {
        self.synth.cancel();
        self.current = None;
    }

    fn voices(&self) -> Vec<Voice> {
        self.platform_voices()
            .into_iter()
            .map(|v| Voice {
                name: v.name(),
                lang: v.lang(),
            })
            .collect()
    }

    fn speak(&mut self, utterance: Utterance) {
        let utt = match SpeechSynthesisUtterance::new_with_text(&utterance.text) {
            Ok(u) => u,
            Err(err) => {
                warn!(?err, "could not create utterance");
                return;
            }
        };
        utt.set_lang(&utterance.lang);
        utt.set_rate(utterance.rate);
        utt.set_pitch(utterance.pitch);
        if let Some(wanted) = &utterance.voice {
            let voice = self
                .platform_voices()
                .into_iter()
                .find(|v| v.name() == wanted.name);
            utt.set_voice(voice.as_ref());
        }
        let id = utterance.id;
        let on_end = Closure::once_into_js(move || with_session(|s| s.speech_ended(id)));
        utt.set_onend(Some(on_end.unchecked_ref()));
        self.synth.speak(&utt);
        self.current = Some(utt);
    }
}

pub struct WebMusic {
    audio: HtmlAudioElement,
}

impl MusicPlayer for WebMusic {
    fn play(&mut self) -> crate::Result<()> {
        let promise = self
            .audio
            .play()
            .map_err(|err| Error::Playback(format!("{err:?}")))?;
        // Autoplay refusals surface as a rejected promise, not an error here.
        let on_reject = Closure::wrap(Box::new(move |err: JsValue| {
            warn!(?err, "party music rejected by the browser");
        }) as Box<dyn FnMut(JsValue)>);
        let _ = promise.catch(&on_reject);
        on_reject.forget();
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(err) = self.audio.pause() {
            warn!(?err, "pause failed");
        }
        self.audio.set_current_time(0.0);
    }
}

#[derive(Default)]
pub struct WebTimers {
    handles: Rc<RefCell<HashMap<TimerId, i32>>>,
}

impl Timers for WebTimers {
    fn schedule(&mut self, id: TimerId, delay_ms: u32) {
        let Some(win) = window() else {
            return;
        };
        let handles = Rc::clone(&self.handles);
        let fire = Closure::once_into_js(move || {
            handles.borrow_mut().remove(&id);
            with_session(|s| s.timer_fired(id));
        });
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), delay)
        {
            Ok(handle) => {
                self.handles.borrow_mut().insert(id, handle);
            }
            Err(err) => warn!(?err, "setTimeout failed"),
        }
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.handles.borrow_mut().remove(&id) {
            if let Some(win) = window() {
                win.clear_timeout_with_handle(handle);
            }
        }
    }
}

// --- Input ------------------------------------------------------------------

/// What a clicked `[data-action]` element asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Select(Mode),
    Tap(Item),
    Repeat,
    Menu,
    EndParty,
}

impl Action {
    fn parse(action: &str, value: Option<&str>) -> Option<Action> {
        match action {
            "select" => value.and_then(Mode::from_key).map(Action::Select),
            "tap" => value.and_then(|v| v.parse().ok()).map(Action::Tap),
            "repeat" => Some(Action::Repeat),
            "menu" => Some(Action::Menu),
            "end-party" => Some(Action::EndParty),
            _ => None,
        }
    }

    fn apply(self, session: &mut WebSession) {
        match self {
            Action::Select(mode) => session.select_mode(mode),
            Action::Tap(item) => {
                session.tap(item);
            }
            Action::Repeat => {
                session.repeat_prompt();
            }
            Action::Menu => session.exit_to_menu(),
            Action::EndParty => session.end_party(),
        }
    }
}

// --- Rendering --------------------------------------------------------------

fn render(view: &View) -> Result<(), JsValue> {
    let doc = document()?;
    let root = doc
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| JsValue::from_str("no root element"))?;
    let html = match view {
        View::Menu => menu_html(),
        View::Playing { heading, tiles, .. } => board_html(&heading.text(), tiles),
        View::Party => party_html(),
    };
    root.set_inner_html(&html);
    Ok(())
}

fn menu_html() -> String {
    let mut html = String::from(
        "<h1 style='font-size:32px;font-weight:900;color:#334155;margin:0 0 24px;'>Во что играем?</h1>",
    );
    for (i, mode) in Mode::ALL.iter().enumerate() {
        let sample = match mode {
            Mode::Numbers => "123",
            Mode::Letters => "АБВ",
        };
        html.push_str(&format!(
            "<button data-action='select' data-value='{}' style='{}background:{};width:100%;margin-bottom:16px;padding:20px;font-size:28px;'>{} {}</button>",
            mode.key(),
            BUTTON_STYLE,
            TILE_COLORS[i * 3],
            mode.label(),
            sample
        ));
    }
    html
}

fn board_html(heading: &str, tiles: &[TileView]) -> String {
    let mut html = format!(
        "<h1 style='font-size:28px;font-weight:900;color:#334155;background:rgba(255,255,255,0.5);border-radius:16px;padding:16px;margin:0 0 24px;'>{heading}</h1>"
    );
    html.push_str("<div style='display:grid;grid-template-columns:repeat(3,1fr);gap:12px;'>");
    for (i, tile) in tiles.iter().enumerate() {
        let (background, animation) = match tile.highlight {
            Highlight::None => (TILE_COLORS[i % TILE_COLORS.len()], "none"),
            Highlight::Correct => ("#22c55e", "naidi-tada 1s"),
            Highlight::Wrong => ("#ef4444", "naidi-shake 0.5s"),
        };
        html.push_str(&format!(
            "<button data-action='tap' data-value='{item}' style='{BUTTON_STYLE}background:{background};animation:{animation};aspect-ratio:1;font-size:56px;'>{item}</button>",
            item = tile.item,
        ));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        "<div style='display:flex;justify-content:center;gap:12px;margin-top:24px;'>\
         <button data-action='repeat' style='{BUTTON_STYLE}background:#6366f1;padding:12px 24px;font-size:20px;'>Повтори</button>\
         <button data-action='menu' style='{BUTTON_STYLE}background:#64748b;padding:12px 24px;font-size:20px;'>Меню</button>\
         </div>"
    ));
    html
}

fn party_html() -> String {
    format!(
        "<h1 style='font-size:48px;font-weight:900;color:#db2777;margin:0 0 32px;animation:naidi-tada 1s infinite;'>🎉 Ура! 🎉</h1>\
         <button data-action='end-party' style='{BUTTON_STYLE}background:#f472b6;padding:16px 32px;font-size:24px;'>В меню</button>"
    )
}

const BUTTON_STYLE: &str = "border:none;border-radius:16px;color:#fff;font-weight:900;box-shadow:0 4px 12px rgba(0,0,0,0.2);text-shadow:2px 2px 4px rgba(0,0,0,0.2);cursor:pointer;";

// --- Startup ----------------------------------------------------------------

fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Creates the root container on first start. Returns it plus whether it was new.
fn ensure_root(doc: &Document) -> Result<(Element, bool), JsValue> {
    if let Some(el) = doc.get_element_by_id(ROOT_ID) {
        return Ok((el, false));
    }
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    if doc.get_element_by_id(STYLE_ID).is_none() {
        let style = doc.create_element("style")?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(KEYFRAMES));
        body.append_child(&style)?;
    }
    let root = doc.create_element("div")?;
    root.set_id(ROOT_ID);
    root.set_attribute("style", "max-width:420px;margin:0 auto;padding:16px;text-align:center;font-family:sans-serif;user-select:none;touch-action:manipulation;").ok();
    body.append_child(&root)?;
    Ok((root, true))
}

pub fn start(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let synth = win.speech_synthesis()?;
    let audio = HtmlAudioElement::new_with_src(&config.music_src)?;
    audio.set_loop(true);

    let session = Session::new(
        config,
        WebSpeech::new(synth.clone()),
        WebMusic { audio },
        WebTimers::default(),
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))?;

    // A restart replaces the session; the old one's speech must not linger.
    synth.cancel();
    SESSION.with(|cell| cell.replace(Some(session)));

    let (root, created) = ensure_root(&doc)?;
    if created {
        // Click delegation: every control carries data-action (and data-value).
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            let Some(target) = evt.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(control)) = target.closest("[data-action]") else {
                return;
            };
            let action = control.get_attribute("data-action").unwrap_or_default();
            let value = control.get_attribute("data-value");
            match Action::parse(&action, value.as_deref()) {
                Some(action) => with_session(|s| action.apply(s)),
                None => debug!(%action, ?value, "unknown control"),
            }
        }) as Box<dyn FnMut(_)>);
        root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        let closure = Closure::wrap(Box::new(move || {
            with_session(|s| s.voices_changed());
        }) as Box<dyn FnMut()>);
        synth.add_event_listener_with_callback("voiceschanged", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    with_session(|_| {});
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_parse_from_data_attributes() {
        assert_eq!(
            Action::parse("select", Some("letters")),
            Some(Action::Select(Mode::Letters))
        );
        assert_eq!(
            Action::parse("tap", Some("7")),
            Some(Action::Tap(Item::Numeric(7)))
        );
        assert_eq!(
            Action::parse("tap", Some("Ж")),
            Some(Action::Tap(Item::Alpha('Ж')))
        );
        assert_eq!(Action::parse("repeat", None), Some(Action::Repeat));
        assert_eq!(Action::parse("end-party", None), Some(Action::EndParty));
        assert_eq!(Action::parse("select", Some("shapes")), None);
        assert_eq!(Action::parse("tap", None), None);
        assert_eq!(Action::parse("dance", None), None);
    }

    #[test]
    fn board_markup_carries_tile_glyphs_and_highlights() {
        let tiles = [
            TileView {
                item: Item::Alpha('К'),
                highlight: Highlight::Correct,
            },
            TileView {
                item: Item::Alpha('М'),
                highlight: Highlight::Wrong,
            },
        ];
        let html = board_html("Молодец!", &tiles);
        assert!(html.contains("data-value='К'"));
        assert!(html.contains("naidi-tada"));
        assert!(html.contains("naidi-shake"));
        assert!(html.contains("data-action='repeat'"));
        assert!(html.contains("data-action='menu'"));
    }

    #[test]
    fn menu_offers_every_mode() {
        let html = menu_html();
        for mode in Mode::ALL {
            assert!(html.contains(&format!("data-value='{}'", mode.key())));
        }
    }
}
