//! Geometry and appearance settings, passed explicitly through the pipeline.
//!
//! Defaults reproduce the classic seal proportions: a unit outer circle, an
//! inner circle at 0.6, the nine-point wheel at 85% of the inner radius and
//! kamea grids spanning 70% of it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings for one forging run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigilConfig {
    /// Radius of the outer circle.
    pub outer_radius: f64,
    /// Radius of the inner circle; the ring lies between the two.
    pub inner_radius: f64,
    /// Nine-point wheel radius as a fraction of `inner_radius`.
    pub wheel_ratio: f64,
    /// Kamea grid half-width as a fraction of `inner_radius`.
    pub kamea_ratio: f64,
    /// Radius of the open circle marking the start of a path.
    pub start_marker_radius: f64,
    /// Half-length of the tick marking the end of a path.
    pub end_tick_half_length: f64,
    /// Opacity of ring glyphs.
    pub ring_alpha: f64,
    /// Opacity of each stacked mantra glyph.
    pub overlay_alpha: f64,
    /// Font size hint for ring glyphs.
    pub ring_font_size: f64,
    /// Font size hint for mantra glyphs.
    pub overlay_font_size: f64,
    /// Decompose accented Latin letters to their base letter before
    /// normalization instead of dropping them.
    pub fold_diacritics: bool,
}

impl Default for SigilConfig {
    fn default() -> Self {
        Self {
            outer_radius: 1.0,
            inner_radius: 0.6,
            wheel_ratio: 0.85,
            kamea_ratio: 0.7,
            start_marker_radius: 0.035,
            end_tick_half_length: 0.03,
            ring_alpha: 1.0,
            overlay_alpha: 0.5,
            ring_font_size: 24.0,
            overlay_font_size: 150.0,
            fold_diacritics: false,
        }
    }
}

impl SigilConfig {
    /// Load and validate a TOML config file. Omitted keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded sigil config");
        Ok(config)
    }

    /// Check that the proportions describe a drawable seal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { message })
        };

        if !(self.inner_radius > 0.0 && self.outer_radius.is_finite()) {
            return invalid("radii must be positive and finite".into());
        }
        if self.inner_radius >= self.outer_radius {
            return invalid(format!(
                "inner_radius ({}) must be smaller than outer_radius ({})",
                self.inner_radius, self.outer_radius
            ));
        }
        for (name, ratio) in [("wheel_ratio", self.wheel_ratio), ("kamea_ratio", self.kamea_ratio)] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return invalid(format!("{name} ({ratio}) must lie in (0, 1]"));
            }
        }
        for (name, alpha) in [("ring_alpha", self.ring_alpha), ("overlay_alpha", self.overlay_alpha)] {
            if !(0.0..=1.0).contains(&alpha) {
                return invalid(format!("{name} ({alpha}) must lie in [0, 1]"));
            }
        }
        if !(self.start_marker_radius >= 0.0 && self.end_tick_half_length >= 0.0)
            || !self.start_marker_radius.is_finite()
            || !self.end_tick_half_length.is_finite()
        {
            return invalid("marker sizes must be finite and not negative".into());
        }
        for (name, size) in [
            ("ring_font_size", self.ring_font_size),
            ("overlay_font_size", self.overlay_font_size),
        ] {
            if !(size > 0.0 && size.is_finite()) {
                return invalid(format!("{name} ({size}) must be positive and finite"));
            }
        }
        Ok(())
    }

    /// Radius of the circle the ring glyphs are centred on.
    pub fn ring_radius(&self) -> f64 {
        self.inner_radius + (self.outer_radius - self.inner_radius) / 2.0
    }
}
