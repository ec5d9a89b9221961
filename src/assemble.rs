//! Sigil assembly: the full pipeline from intent text to primitive list.
//!
//! ```text
//! raw intent ─┬─ normalize ─ encode ─┬─ ring glyphs
//!             │                      └─ Wheel:  point set ─ path
//!             │                         Mantra: condense ─ overlay glyphs
//!             └─ seed (chaos wheel only)
//! ```
//!
//! Every step is a pure function of the request and the config, so the same
//! inputs give identical output on every run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::Script;
use crate::config::SigilConfig;
use crate::encode::{self, NumericSequence};
use crate::error::{InputError, SigilResult};
use crate::geometry::{Point, PointSet, WheelBase};
use crate::path::{self, SigilPath};
use crate::primitive::Primitive;
use crate::seed::Seed;
use crate::text::{self, MantraMode, NormalizedText};

/// How the interior of the seal is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Trace the numeric sequence over a wheel or kamea.
    #[default]
    Wheel,
    /// Stack the (condensed) letters at the centre.
    Mantra,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Wheel => "Wheel Method",
            Method::Mantra => "Graphic Mantra",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let is = |names: &[&str]| names.iter().any(|n| n.eq_ignore_ascii_case(key));
        if is(&["wheel", "Wheel Method"]) {
            Ok(Method::Wheel)
        } else if is(&["mantra", "Graphic Mantra", "graphic-mantra"]) {
            Ok(Method::Mantra)
        } else {
            Err(InputError::UnknownMethod {
                name: s.to_string(),
            })
        }
    }
}

/// Everything the caller chooses for one sigil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigilRequest {
    /// Raw intent, name, or desire.
    pub intent: String,
    pub script: Script,
    pub method: Method,
    /// Ignored for [`Method::Mantra`].
    pub wheel_base: WheelBase,
    /// Permute the nine-point wheel by the intent's seed. Ignored for
    /// [`Method::Mantra`] and for kamea bases.
    pub chaos_mode: bool,
    /// Condense the mantra (drop vowels and repeats). Ignored for
    /// [`Method::Wheel`].
    pub mantra_condense: bool,
}

impl SigilRequest {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Default::default()
        }
    }

    fn mantra_mode(&self) -> MantraMode {
        if self.mantra_condense {
            MantraMode::Condensed
        } else {
            MantraMode::Raw
        }
    }
}

impl Default for SigilRequest {
    fn default() -> Self {
        Self {
            intent: String::new(),
            script: Script::Latin,
            method: Method::Wheel,
            wheel_base: WheelBase::NinePoint,
            chaos_mode: false,
            mantra_condense: true,
        }
    }
}

/// The inside of the seal; exactly one method per sigil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Interior {
    Wheel {
        path: SigilPath,
    },
    Mantra {
        /// Latin letters after condensation (or unchanged in raw mode).
        letters: NormalizedText,
        /// Those letters in the chosen script, one overlay glyph per char.
        symbols: String,
    },
}

/// A forged sigil: intermediate values plus the final primitive list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sigil {
    pub normalized: NormalizedText,
    pub seed: Seed,
    /// Script symbols placed around the ring.
    pub ring: String,
    pub sequence: NumericSequence,
    pub interior: Interior,
    pub primitives: Vec<Primitive>,
}

impl Sigil {
    /// True when the intent had no letters; only the base circles are drawn.
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Promote a blank sigil to [`InputError::EmptyIntent`].
    pub fn into_non_empty(self) -> SigilResult<Self> {
        if self.is_blank() {
            return Err(InputError::EmptyIntent.into());
        }
        Ok(self)
    }

    /// The traced path, if this is a wheel-method sigil.
    pub fn path(&self) -> Option<&SigilPath> {
        match &self.interior {
            Interior::Wheel { path } => Some(path),
            Interior::Mantra { .. } => None,
        }
    }
}

/// Run the whole pipeline for one request.
///
/// An intent without letters is not an error here: the result is a blank
/// sigil holding just the two base circles. Use [`Sigil::into_non_empty`]
/// to reject it.
pub fn forge(request: &SigilRequest, config: &SigilConfig) -> SigilResult<Sigil> {
    config.validate()?;

    let normalized = NormalizedText::new(&request.intent, config.fold_diacritics);
    let seed = Seed::from_intent(&request.intent);
    let encoded = encode::encode(&normalized, request.script);

    tracing::debug!(
        script = %request.script,
        method = %request.method,
        letters = normalized.len(),
        %seed,
        "forging sigil"
    );

    let interior = match request.method {
        Method::Wheel => {
            let chaos = request.chaos_mode.then_some(seed);
            let points = PointSet::build(request.wheel_base, chaos, config);
            Interior::Wheel {
                path: path::build_path(&encoded.sequence, &points),
            }
        }
        Method::Mantra => {
            let letters = text::condense(&normalized, request.mantra_mode());
            let symbols = encode::transliterate(&letters, request.script);
            Interior::Mantra { letters, symbols }
        }
    };

    let mut primitives = base_circles(config);
    primitives.extend(ring_glyphs(&encoded.symbols, config));
    match &interior {
        Interior::Wheel { path } => primitives.extend(path.primitives(config)),
        Interior::Mantra { symbols, .. } => primitives.extend(overlay_glyphs(symbols, config)),
    }

    Ok(Sigil {
        normalized,
        seed,
        ring: encoded.symbols,
        sequence: encoded.sequence,
        interior,
        primitives,
    })
}

/// Outer and inner circle.
fn base_circles(config: &SigilConfig) -> Vec<Primitive> {
    [config.outer_radius, config.inner_radius]
        .into_iter()
        .map(|radius| Primitive::Circle {
            center: Point::ORIGIN,
            radius,
            filled: false,
        })
        .collect()
}

/// One glyph per char of `ring`, evenly spaced counter-clockwise from angle
/// zero on the circle midway between the inner and outer radius.
fn ring_glyphs(ring: &str, config: &SigilConfig) -> Vec<Primitive> {
    let count = ring.chars().count();
    let radius = config.ring_radius();

    ring.chars()
        .enumerate()
        .map(|(i, ch)| {
            let angle = std::f64::consts::TAU * i as f64 / count as f64;
            Primitive::Glyph {
                position: Point::polar(radius, angle),
                rotation: upright_rotation(angle.to_degrees()),
                text: ch.to_string(),
                emphasis_alpha: config.ring_alpha,
                font_size: config.ring_font_size,
            }
        })
        .collect()
}

/// Tangential rotation for a glyph at `angle_deg`, flipped half a turn
/// where it would otherwise read upside down.
pub fn upright_rotation(angle_deg: f64) -> f64 {
    let rotation = angle_deg - 90.0;
    if rotation > 90.0 && rotation < 270.0 {
        rotation - 180.0
    } else {
        rotation
    }
}

/// Mantra glyphs stacked at the origin, translucent so they overlay.
fn overlay_glyphs(symbols: &str, config: &SigilConfig) -> Vec<Primitive> {
    symbols
        .chars()
        .map(|ch| Primitive::Glyph {
            position: Point::ORIGIN,
            rotation: 0.0,
            text: ch.to_string(),
            emphasis_alpha: config.overlay_alpha,
            font_size: config.overlay_font_size,
        })
        .collect()
}
