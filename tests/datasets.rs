// Additional integration tests for dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use naidi::items::PRONUNCIATION;
use naidi::{Item, LETTERS, Mode, NUMBERS};

#[test]
fn numbers_are_one_through_nine() {
    assert_eq!(NUMBERS, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn letters_are_unique_uppercase_cyrillic() {
    assert_eq!(LETTERS.len(), 29);
    let mut seen = HashSet::new();
    for c in LETTERS {
        assert!(seen.insert(*c), "duplicate letter '{}' in LETTERS", c);
        assert!(c.is_uppercase(), "letter '{}' is not uppercase", c);
        assert!(('А'..='Я').contains(c), "letter '{}' is not Cyrillic", c);
    }
    for excluded in ['Ъ', 'Ы', 'Ь', 'Ё'] {
        assert!(!LETTERS.contains(&excluded), "'{}' should not be on the board", excluded);
    }
}

#[test]
fn pronunciation_table_has_no_duplicates() {
    let mut seen = HashSet::new();
    for (glyph, spoken) in PRONUNCIATION {
        assert!(seen.insert(*glyph), "duplicate override for '{}'", glyph);
        assert!(!spoken.trim().is_empty(), "empty spoken form for '{}'", glyph);
        assert_ne!(spoken, &glyph.to_string(), "override for '{}' is a no-op", glyph);
    }
}

#[test]
fn every_mode_fills_the_default_board() {
    for mode in Mode::ALL {
        assert!(mode.source().len() >= 9, "{:?} cannot fill a 3x3 board", mode);
    }
    assert!(Mode::Numbers.source().iter().all(|i| matches!(i, Item::Numeric(_))));
    assert!(Mode::Letters.source().iter().all(|i| matches!(i, Item::Alpha(_))));
}
