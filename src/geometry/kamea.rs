//! The seven planetary kameas (magic squares of order 3 to 9).
//!
//! Each table holds every integer `1..=n²` exactly once. Rows are listed
//! top to bottom as traditionally written; when laid out as coordinates,
//! row `i` sits at the `i`-th grid line from negative `y` and column `j`
//! at the `j`-th grid line from negative `x`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Point;

/// A planet with a traditional kamea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Saturn,
    Jupiter,
    Mars,
    Sun,
    Venus,
    Mercury,
    Moon,
}

static SATURN: [[u8; 3]; 3] = [
    [4, 9, 2], //
    [3, 5, 7],
    [8, 1, 6],
];

static JUPITER: [[u8; 4]; 4] = [
    [4, 14, 15, 1],
    [9, 7, 6, 12],
    [5, 11, 10, 8],
    [16, 2, 3, 13],
];

static MARS: [[u8; 5]; 5] = [
    [11, 24, 7, 20, 3],
    [4, 12, 25, 8, 16],
    [17, 5, 13, 21, 9],
    [10, 18, 1, 14, 22],
    [23, 6, 19, 2, 15],
];

static SUN: [[u8; 6]; 6] = [
    [6, 32, 3, 34, 35, 1],
    [7, 11, 27, 28, 8, 30],
    [19, 14, 16, 15, 23, 24],
    [18, 20, 22, 21, 17, 13],
    [25, 29, 10, 9, 26, 12],
    [36, 5, 33, 4, 2, 31],
];

static VENUS: [[u8; 7]; 7] = [
    [22, 47, 16, 41, 10, 35, 4],
    [5, 23, 48, 17, 42, 11, 29],
    [30, 6, 24, 49, 18, 36, 12],
    [13, 31, 7, 25, 43, 19, 37],
    [38, 14, 32, 1, 26, 44, 20],
    [21, 39, 8, 33, 2, 27, 45],
    [46, 15, 40, 9, 34, 3, 28],
];

static MERCURY: [[u8; 8]; 8] = [
    [8, 58, 59, 5, 4, 62, 63, 1],
    [49, 15, 14, 52, 53, 11, 10, 56],
    [41, 23, 22, 44, 45, 19, 18, 48],
    [32, 34, 35, 29, 28, 38, 39, 25],
    [40, 26, 27, 37, 36, 30, 31, 33],
    [17, 47, 46, 20, 21, 43, 42, 24],
    [9, 55, 54, 12, 13, 51, 50, 16],
    [64, 2, 3, 61, 60, 6, 7, 57],
];

static MOON: [[u8; 9]; 9] = [
    [37, 78, 29, 70, 21, 62, 13, 54, 5],
    [6, 38, 79, 30, 71, 22, 63, 14, 46],
    [47, 7, 39, 80, 31, 72, 23, 55, 15],
    [16, 48, 8, 40, 81, 32, 64, 24, 56],
    [57, 17, 49, 9, 41, 73, 33, 65, 25],
    [26, 58, 18, 50, 1, 42, 74, 34, 66],
    [67, 27, 59, 10, 51, 2, 43, 75, 35],
    [36, 68, 19, 60, 11, 52, 3, 44, 76],
    [77, 28, 69, 20, 61, 12, 53, 4, 45],
];

impl Planet {
    pub const ALL: [Planet; 7] = [
        Planet::Saturn,
        Planet::Jupiter,
        Planet::Mars,
        Planet::Sun,
        Planet::Venus,
        Planet::Mercury,
        Planet::Moon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Saturn => "Saturn",
            Planet::Jupiter => "Jupiter",
            Planet::Mars => "Mars",
            Planet::Sun => "Sun",
            Planet::Venus => "Venus",
            Planet::Mercury => "Mercury",
            Planet::Moon => "Moon",
        }
    }

    /// This planet's magic square.
    pub fn kamea(self) -> Kamea {
        let (order, cells) = match self {
            Planet::Saturn => (3, SATURN.as_flattened()),
            Planet::Jupiter => (4, JUPITER.as_flattened()),
            Planet::Mars => (5, MARS.as_flattened()),
            Planet::Sun => (6, SUN.as_flattened()),
            Planet::Venus => (7, VENUS.as_flattened()),
            Planet::Mercury => (8, MERCURY.as_flattened()),
            Planet::Moon => (9, MOON.as_flattened()),
        };
        Kamea {
            planet: self,
            order,
            cells,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed view of one static magic square.
#[derive(Debug, Clone, Copy)]
pub struct Kamea {
    pub planet: Planet,
    /// Side length `n`.
    pub order: usize,
    /// Row-major cell values.
    cells: &'static [u8],
}

impl Kamea {
    /// Number of cells, `n²`.
    pub fn cell_count(&self) -> usize {
        self.order * self.order
    }

    pub fn value_at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.order + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &'static [u8]> {
        self.cells.chunks(self.order)
    }

    /// Lay the square out on an evenly spaced grid spanning
    /// `[-half_width, half_width]` on both axes.
    pub fn points(&self, half_width: f64) -> KameaPoints {
        let n = self.order;
        let step = if n > 1 {
            2.0 * half_width / (n - 1) as f64
        } else {
            0.0
        };
        let coord = |k: usize| -half_width + step * k as f64;

        let mut by_value = vec![None; self.cell_count()];
        for row in 0..n {
            for col in 0..n {
                let value = usize::from(self.value_at(row, col));
                if let Some(slot) = value.checked_sub(1).and_then(|i| by_value.get_mut(i)) {
                    *slot = Some(Point::new(coord(col), coord(row)));
                }
            }
        }

        KameaPoints {
            planet: self.planet,
            order: n,
            by_value,
        }
    }
}

/// Kamea cell coordinates indexed by cell value.
#[derive(Debug, Clone, PartialEq)]
pub struct KameaPoints {
    pub planet: Planet,
    pub order: usize,
    by_value: Vec<Option<Point>>,
}

impl KameaPoints {
    /// Coordinate of the cell holding `value` (1-based).
    pub fn resolve(&self, value: u32) -> Result<Point, GeometryError> {
        (value as usize)
            .checked_sub(1)
            .and_then(|i| self.by_value.get(i).copied().flatten())
            .ok_or_else(|| GeometryError::ResolutionGap {
                planet: self.planet.name().to_string(),
                value,
            })
    }

    pub fn cell_count(&self) -> usize {
        self.order * self.order
    }

    /// Map a numeric-sequence value into `1..=n²`.
    pub fn reduce(&self, value: u8) -> u32 {
        u32::from(value) % self.cell_count() as u32 + 1
    }
}
