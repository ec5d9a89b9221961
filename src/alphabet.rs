//! Fixed letter tables: Latin A–Z to the symbols of each magickal script.
//!
//! Every table is total over A–Z. Some scripts reuse a symbol for several
//! letters (Arabic M/X, Egyptian C/K, ...) and one Egyptian entry spans two
//! glyphs; both are part of the data, not errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A script the intent can be transliterated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Hebrew,
    Arabic,
    Latin,
    Egyptian,
}

static HEBREW: [&str; 26] = [
    "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט", "י", "כ", "ל", "מ", //
    "נ", "ס", "ע", "פ", "צ", "ק", "ר", "ש", "ת", "ך", "ם", "ן", "ף",
];

static ARABIC: [&str; 26] = [
    "أ", "ب", "ج", "د", "ه", "و", "ز", "ح", "ط", "ي", "ك", "ل", "م", //
    "ن", "س", "ع", "ف", "ص", "ق", "ر", "ش", "ت", "خ", "م", "ن", "ظ",
];

static LATIN: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", //
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

// Simplified phonetic values.
static EGYPTIAN: [&str; 26] = [
    "\u{1313F}", // A
    "\u{130C0}", // B
    "\u{133A1}", // C
    "\u{130A7}", // D
    "\u{131CB}", // E
    "\u{13191}", // F
    "\u{133BC}", // G
    "\u{13254}", // H
    "\u{131CB}", // I
    "\u{13193}", // J
    "\u{133A1}", // K
    "\u{130ED}", // L
    "\u{13153}", // M
    "\u{13216}", // N
    "\u{13371}", // O
    "\u{132AA}", // P
    "\u{1320E}", // Q
    "\u{1308B}", // R
    "\u{132F4}", // S
    "\u{133CF}", // T
    "\u{133F2}", // U
    "\u{13191}", // V
    "\u{133F2}", // W
    "\u{133A1}\u{132F4}", // X
    "\u{131CB}", // Y
    "\u{13283}", // Z
];

impl Script {
    /// All scripts, in the order the legend lists them.
    pub const ALL: [Script; 4] = [Script::Hebrew, Script::Arabic, Script::Latin, Script::Egyptian];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Script::Hebrew => "Hebrew",
            Script::Arabic => "Arabic",
            Script::Latin => "Latin",
            Script::Egyptian => "Egyptian",
        }
    }

    /// The full A–Z table for this script.
    pub fn table(self) -> &'static [&'static str; 26] {
        match self {
            Script::Hebrew => &HEBREW,
            Script::Arabic => &ARABIC,
            Script::Latin => &LATIN,
            Script::Egyptian => &EGYPTIAN,
        }
    }

    /// Look up the symbol for an uppercase Latin letter.
    ///
    /// Returns `None` for anything outside `A..=Z`.
    pub fn lookup(self, letter: char) -> Option<&'static str> {
        letter_index(letter).map(|i| self.table()[i])
    }

    /// Whether the script is written right to left.
    pub fn is_right_to_left(self) -> bool {
        matches!(self, Script::Hebrew | Script::Arabic)
    }
}

/// Zero-based position of an uppercase Latin letter in the alphabet.
pub fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::ALL
            .into_iter()
            .find(|script| script.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownScript {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_script_maps_every_letter() {
        for script in Script::ALL {
            for letter in 'A'..='Z' {
                let symbol = script.lookup(letter);
                assert!(
                    symbol.is_some_and(|s| !s.is_empty()),
                    "{script} has no symbol for {letter}"
                );
            }
        }
    }

    #[test]
    fn lookup_rejects_non_uppercase() {
        assert_eq!(Script::Latin.lookup('a'), None);
        assert_eq!(Script::Hebrew.lookup('1'), None);
        assert_eq!(Script::Arabic.lookup('É'), None);
    }

    #[test]
    fn latin_is_identity() {
        for letter in 'A'..='Z' {
            assert_eq!(Script::Latin.lookup(letter), Some(letter.to_string().as_str()));
        }
    }

    #[test]
    fn duplicates_are_accepted() {
        assert_eq!(Script::Arabic.lookup('M'), Script::Arabic.lookup('X'));
        assert_eq!(Script::Egyptian.lookup('C'), Script::Egyptian.lookup('K'));
    }

    #[test]
    fn egyptian_x_spans_two_glyphs() {
        let x = Script::Egyptian.lookup('X').unwrap();
        assert_eq!(x.chars().count(), 2);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("hebrew".parse::<Script>().unwrap(), Script::Hebrew);
        assert_eq!(" EGYPTIAN ".parse::<Script>().unwrap(), Script::Egyptian);
        assert!(matches!(
            "Klingon".parse::<Script>(),
            Err(InputError::UnknownScript { .. })
        ));
    }

    #[test]
    fn right_to_left_scripts() {
        assert!(Script::Hebrew.is_right_to_left());
        assert!(Script::Arabic.is_right_to_left());
        assert!(!Script::Latin.is_right_to_left());
        assert!(!Script::Egyptian.is_right_to_left());
    }
}
