//! Abstract drawing primitives handed to a renderer.
//!
//! The list is ordered back to front and never modified after assembly.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Circle {
        center: Point,
        radius: f64,
        filled: bool,
    },
    LineSegment {
        p1: Point,
        p2: Point,
    },
    Glyph {
        position: Point,
        /// Degrees, counter-clockwise.
        rotation: f64,
        text: String,
        emphasis_alpha: f64,
        /// Size hint; the renderer picks the actual font.
        font_size: f64,
    },
}

impl Primitive {
    pub fn is_glyph(&self) -> bool {
        matches!(self, Primitive::Glyph { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Primitive::LineSegment { .. })
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Primitive::Circle { .. })
    }
}
