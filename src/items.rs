//! Board items and the two modes that supply them.
//!
//! An [`Item`] is what sits on a tile: a digit in numbers mode or a letter in
//! letters mode. The written glyph is what the child sees; [`Item::spoken`] is
//! what the speech engine is asked to say, which differs for most consonants
//! ("Б" is spoken as "Бэ").

use std::fmt;
use std::str::FromStr;

use crate::{LETTERS, NUMBERS};

/// Spoken letter names for glyphs whose bare form does not read well.
/// Vowels and anything missing here are spoken as written.
pub const PRONUNCIATION: &[(char, &str)] = &[
    ('Б', "Бэ"), ('В', "Вэ"), ('Г', "Гэ"), ('Д', "Дэ"), ('Ж', "Жэ"), ('З', "Зэ"),
    ('Й', "И краткое"), ('К', "Ка"), ('Л', "Эль"), ('М', "Эм"), ('Н', "Эн"), ('П', "Пэ"),
    ('Р', "Эр"), ('С', "Эс"), ('Т', "Тэ"), ('Ф', "Эф"), ('Х', "Ха"), ('Ц', "Цэ"),
    ('Ч', "Чэ"), ('Ш', "Ша"), ('Щ', "Ща"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    Numeric(u8),
    Alpha(char),
}

impl Item {
    /// Text handed to the speech engine for this item.
    pub fn spoken(&self) -> String {
        match *self {
            Item::Numeric(n) => n.to_string(),
            Item::Alpha(c) => PRONUNCIATION
                .iter()
                .find(|(glyph, _)| *glyph == c)
                .map(|(_, name)| (*name).to_string())
                .unwrap_or_else(|| c.to_string()),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Numeric(n) => write!(f, "{n}"),
            Item::Alpha(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseItemError(pub String);

impl fmt::Display for ParseItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a board item: {:?}", self.0)
    }
}

impl std::error::Error for ParseItemError {}

/// Parses a glyph back into an item (the DOM stores tiles as their glyph).
impl FromStr for Item {
    type Err = ParseItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => {
                Ok(Item::Numeric(c as u8 - b'0'))
            }
            (Some(c), None) if c.is_alphabetic() => Ok(Item::Alpha(c)),
            _ => Err(ParseItemError(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Numbers,
    Letters,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Numbers, Mode::Letters];

    /// Full source set for this mode, in canonical order.
    pub fn source(&self) -> Vec<Item> {
        match self {
            Mode::Numbers => NUMBERS.iter().map(|&n| Item::Numeric(n)).collect(),
            Mode::Letters => LETTERS.iter().map(|&c| Item::Alpha(c)).collect(),
        }
    }

    /// Accusative noun used in "Найди ..." prompts.
    pub fn prompt_word(&self) -> &'static str {
        match self {
            Mode::Numbers => "цифру",
            Mode::Letters => "букву",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Numbers => "Цифры",
            Mode::Letters => "Буквы",
        }
    }

    /// Stable identifier used in DOM attributes.
    pub fn key(&self) -> &'static str {
        match self {
            Mode::Numbers => "numbers",
            Mode::Letters => "letters",
        }
    }

    pub fn from_key(key: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|m| m.key() == key)
    }
}

/// "Найди <word> <spoken item>".
pub fn prompt(mode: Mode, target: Item) -> String {
    format!("Найди {} {}", mode.prompt_word(), target.spoken())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_spoken_literally() {
        assert_eq!(Item::Numeric(7).spoken(), "7");
    }

    #[test]
    fn letter_overrides_apply() {
        assert_eq!(Item::Alpha('К').spoken(), "Ка");
        assert_eq!(Item::Alpha('А').spoken(), "А");
    }

    #[test]
    fn prompt_uses_mode_word() {
        assert_eq!(prompt(Mode::Numbers, Item::Numeric(3)), "Найди цифру 3");
        assert_eq!(prompt(Mode::Letters, Item::Alpha('Л')), "Найди букву Эль");
    }

    #[test]
    fn glyph_parses_back() {
        for mode in Mode::ALL {
            for item in mode.source() {
                assert_eq!(item.to_string().parse::<Item>(), Ok(item));
            }
        }
        assert!("12".parse::<Item>().is_err());
        assert!("".parse::<Item>().is_err());
    }

    #[test]
    fn every_override_is_a_board_letter() {
        for (glyph, _) in PRONUNCIATION {
            assert!(LETTERS.contains(glyph), "override for unknown letter {glyph}");
        }
    }

    #[test]
    fn mode_keys_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_key(mode.key()), Some(mode));
        }
        assert_eq!(Mode::from_key("colours"), None);
    }
}
