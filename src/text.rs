//! Intent text reduction: letter extraction and mantra condensation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// The uppercase Latin letters of an intent, in their original order.
///
/// Only `A..=Z` survive normalization, so every letter has an entry in
/// every [`Script`](crate::alphabet::Script) table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Normalize raw intent text.
    ///
    /// Keeps alphabetic Latin characters, uppercased; digits, punctuation,
    /// whitespace, and other scripts are dropped. With `fold_diacritics`,
    /// the text is NFD-decomposed first so accented Latin letters keep
    /// their base letter ("José" becomes "JOSE" instead of "JOS").
    pub fn new(raw: &str, fold_diacritics: bool) -> Self {
        let letters: String = if fold_diacritics {
            raw.nfd().filter(char::is_ascii_alphabetic).collect()
        } else {
            raw.chars().filter(char::is_ascii_alphabetic).collect()
        };
        Self(letters.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the Graphic Mantra method reduces the intent before overlaying it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MantraMode {
    /// Drop vowels, then keep only the first occurrence of each letter.
    #[default]
    Condensed,
    /// Use the normalized intent unchanged.
    Raw,
}

/// Reduce normalized text to the letters of a graphic mantra.
pub fn condense(text: &NormalizedText, mode: MantraMode) -> NormalizedText {
    match mode {
        MantraMode::Raw => text.clone(),
        MantraMode::Condensed => {
            let mut seen = HashSet::new();
            let letters = text
                .letters()
                .filter(|c| !VOWELS.contains(c))
                .filter(|c| seen.insert(*c))
                .collect();
            NormalizedText(letters)
        }
    }
}
