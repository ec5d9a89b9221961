//! Sequence encoding: normalized letters to ring symbols and wheel indices.

use serde::{Deserialize, Serialize};

use crate::alphabet::{self, Script};
use crate::text::NormalizedText;

/// Number of positions on the base wheel; every numeric value is below it.
pub const WHEEL_POSITIONS: u8 = 9;

/// One small integer in `0..9` per mapped letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericSequence(Vec<u8>);

impl NumericSequence {
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for NumericSequence {
    fn from(values: Vec<u8>) -> Self {
        Self(values)
    }
}

/// Output of [`encode`]: the ring string and the path sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoded {
    /// Concatenated script symbols, one entry per mapped letter.
    pub symbols: String,
    /// `(letter - 'A') mod 9` per mapped letter.
    pub sequence: NumericSequence,
}

/// Encode normalized text against a script.
///
/// Letters without a table entry are skipped in both outputs rather than
/// echoed or counted as zero, so they never add degenerate points to a path.
pub fn encode(text: &NormalizedText, script: Script) -> Encoded {
    let mut symbols = String::new();
    let mut values = Vec::with_capacity(text.len());

    for letter in text.letters() {
        let (Some(symbol), Some(index)) = (script.lookup(letter), alphabet::letter_index(letter))
        else {
            tracing::debug!(%letter, %script, "skipping unmapped letter");
            continue;
        };
        symbols.push_str(symbol);
        values.push((index % WHEEL_POSITIONS as usize) as u8);
    }

    Encoded {
        symbols,
        sequence: NumericSequence(values),
    }
}

/// Map every letter to its script symbol, without a numeric sequence.
pub fn transliterate(text: &NormalizedText, script: Script) -> String {
    text.letters().filter_map(|letter| script.lookup(letter)).collect()
}
