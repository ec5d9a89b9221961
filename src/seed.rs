//! Stable numeric seeds derived from raw intent text.
//!
//! The seed is the SHA-256 digest of the UTF-8 bytes, read as a big-endian
//! integer and reduced modulo 10^8. It only drives the chaos-mode wheel
//! permutation; it is not a secret.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const SEED_MODULUS: u64 = 100_000_000;

/// A reproducible seed in `0..10^8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Derive the seed for an unprocessed intent.
    ///
    /// Uses the raw string, before normalization, so "my desire" and
    /// "MY DESIRE" seed differently.
    pub fn from_intent(raw: &str) -> Self {
        let digest = Sha256::digest(raw.as_bytes());
        // Horner reduction keeps the full 256-bit value exact.
        let value = digest
            .iter()
            .fold(0u64, |acc, &byte| (acc * 256 + u64::from(byte)) % SEED_MODULUS);
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(Seed::from_intent("ABRAXAS").get(), 49_296_456);
        assert_eq!(Seed::from_intent("MY DESIRE").get(), 18_666_258);
    }

    #[test]
    fn empty_intent_has_a_stable_seed() {
        assert_eq!(Seed::from_intent("").get(), 65_086_549);
        assert_eq!(Seed::from_intent(""), Seed::from_intent(""));
    }

    #[test]
    fn seed_uses_raw_text() {
        assert_eq!(Seed::from_intent("abraxas").get(), 54_237_517);
        assert_ne!(Seed::from_intent("abraxas"), Seed::from_intent("ABRAXAS"));
    }

    #[test]
    fn one_character_changes_the_seed() {
        assert_eq!(Seed::from_intent("MY DESIDE").get(), 75_547_130);
        assert_ne!(Seed::from_intent("MY DESIRE"), Seed::from_intent("MY DESIDE"));
    }

    #[test]
    fn seeds_stay_in_range() {
        for intent in ["", "a", "Ω", "a much longer intent with spaces and digits 0123"] {
            assert!(Seed::from_intent(intent).get() < SEED_MODULUS);
        }
    }
}
