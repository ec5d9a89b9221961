// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # sigil-forge
//!
//! Deterministic sigil generation. An intent (a name, a desire, any text) is
//! reduced to its letters, transliterated into a magickal script for the
//! outer ring, and turned into an inner figure: either a path traced over a
//! nine-point wheel or a planetary kamea, or a graphic mantra of stacked
//! letters.
//!
//! ## Architecture
//!
//! - **Alphabets** (`alphabet`): fixed A–Z tables for Hebrew, Arabic, Latin, Egyptian
//! - **Text** (`text`): letter normalization and mantra condensation
//! - **Seeding** (`seed`): SHA-256 of the raw intent, reduced mod 10^8
//! - **Encoding** (`encode`): ring symbols plus a `0..9` numeric sequence
//! - **Geometry** (`geometry`): nine-point wheel (optionally seed-permuted) and kameas
//! - **Paths** (`path`): numeric sequence → point path → segments and markers
//! - **Assembly** (`assemble`): the `forge` pipeline producing a primitive list
//!
//! The output is a list of [`primitive::Primitive`] values (circles, line
//! segments, glyph placements). Drawing them is left to the caller.
//!
//! ## Library usage
//!
//! ```
//! use sigil_forge::assemble::{forge, SigilRequest};
//! use sigil_forge::config::SigilConfig;
//!
//! let sigil = forge(&SigilRequest::new("ABC"), &SigilConfig::default()).unwrap();
//! assert_eq!(sigil.ring, "ABC");
//! assert_eq!(sigil.sequence.values(), &[0, 1, 2]);
//! ```

pub mod alphabet;
pub mod assemble;
pub mod config;
pub mod encode;
pub mod error;
pub mod export;
pub mod geometry;
pub mod path;
pub mod primitive;
pub mod render;
pub mod seed;
pub mod text;
