//! Base geometries a sigil path is drawn on.
//!
//! ## Components
//!
//! - [`wheel`] — nine points evenly spaced on a circle, optionally permuted
//!   by the intent's seed ("chaos mode")
//! - [`kamea`] — the seven planetary magic squares (orders 3 to 9) laid out
//!   as coordinate grids
//!
//! [`PointSet::build`] resolves a [`WheelBase`] into concrete coordinates
//! for one invocation; the path builder only ever looks values up in it.

pub mod kamea;
pub mod wheel;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SigilConfig;
use crate::error::GeometryError;
use crate::seed::Seed;

pub use kamea::{Kamea, KameaPoints, Planet};

/// A point in sigil space; the sigil is centred on the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` along `angle` (radians) from the origin.
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Angle of the vector from `self` to `other`, in radians.
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Offset by `distance` along `angle`.
    pub fn offset(self, distance: f64, angle: f64) -> Self {
        Self {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }
}

/// The grid a wheel-method sigil is traced on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelBase {
    NinePoint,
    Kamea(Planet),
}

impl WheelBase {
    /// All bases, in selector order.
    pub const ALL: [WheelBase; 8] = [
        WheelBase::NinePoint,
        WheelBase::Kamea(Planet::Saturn),
        WheelBase::Kamea(Planet::Jupiter),
        WheelBase::Kamea(Planet::Mars),
        WheelBase::Kamea(Planet::Sun),
        WheelBase::Kamea(Planet::Venus),
        WheelBase::Kamea(Planet::Mercury),
        WheelBase::Kamea(Planet::Moon),
    ];

    pub fn name(self) -> &'static str {
        match self {
            WheelBase::NinePoint => "9-Point Wheel",
            WheelBase::Kamea(planet) => planet.name(),
        }
    }

    /// One-line description for reports.
    pub fn describe(self) -> String {
        match self {
            WheelBase::NinePoint => {
                "The sigil is generated by connecting points on a 9-point wheel.".to_string()
            }
            WheelBase::Kamea(planet) => {
                format!("The sigil is drawn on the Kamea (Magic Square) of {}.", planet.name())
            }
        }
    }
}

impl fmt::Display for WheelBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WheelBase {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let nine_point = ["9-Point Wheel", "NinePoint", "nine-point", "9-point", "9"];
        if nine_point.iter().any(|name| name.eq_ignore_ascii_case(key)) {
            return Ok(WheelBase::NinePoint);
        }
        Planet::ALL
            .into_iter()
            .find(|planet| planet.name().eq_ignore_ascii_case(key))
            .map(WheelBase::Kamea)
            .ok_or_else(|| GeometryError::UnsupportedWheelBase {
                name: s.to_string(),
            })
    }
}

/// Concrete coordinates for one base, resolved once per invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum PointSet {
    /// Nine wheel points; index `i` is the point numeric value `i` lands on.
    Wheel(Vec<Point>),
    /// Kamea cell coordinates keyed by cell value.
    Kamea(KameaPoints),
}

impl PointSet {
    /// Resolve `base` into coordinates.
    ///
    /// `chaos` permutes the nine-point wheel with the given seed; it has no
    /// effect on kamea grids.
    pub fn build(base: WheelBase, chaos: Option<Seed>, config: &SigilConfig) -> Self {
        match base {
            WheelBase::NinePoint => {
                let radius = config.inner_radius * config.wheel_ratio;
                PointSet::Wheel(wheel::wheel_points(radius, chaos))
            }
            WheelBase::Kamea(planet) => {
                let half_width = config.inner_radius * config.kamea_ratio;
                PointSet::Kamea(planet.kamea().points(half_width))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_selector_names() {
        assert_eq!("9-Point Wheel".parse::<WheelBase>().unwrap(), WheelBase::NinePoint);
        assert_eq!("ninepoint".parse::<WheelBase>().unwrap(), WheelBase::NinePoint);
        assert_eq!(
            "mercury".parse::<WheelBase>().unwrap(),
            WheelBase::Kamea(Planet::Mercury)
        );
    }

    #[test]
    fn unknown_base_is_rejected() {
        let err = "Pluto".parse::<WheelBase>().unwrap_err();
        assert!(matches!(err, GeometryError::UnsupportedWheelBase { ref name } if name == "Pluto"));
    }

    #[test]
    fn every_base_round_trips_through_its_name() {
        for base in WheelBase::ALL {
            assert_eq!(base.name().parse::<WheelBase>().unwrap(), base);
        }
    }

    #[test]
    fn nine_point_set_uses_wheel_radius() {
        let config = SigilConfig::default();
        let PointSet::Wheel(points) = PointSet::build(WheelBase::NinePoint, None, &config) else {
            panic!("expected a wheel");
        };
        assert_eq!(points.len(), 9);
        let radius = config.inner_radius * config.wheel_ratio;
        for p in &points {
            assert!(((p.x * p.x + p.y * p.y).sqrt() - radius).abs() < 1e-12);
        }
    }

    #[test]
    fn chaos_is_ignored_for_kameas() {
        let config = SigilConfig::default();
        let base = WheelBase::Kamea(Planet::Sun);
        let plain = PointSet::build(base, None, &config);
        let chaotic = PointSet::build(base, Some(Seed::from_intent("MY DESIRE")), &config);
        assert_eq!(plain, chaotic);
    }

    #[test]
    fn point_helpers() {
        let p = Point::polar(2.0, std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-12 && (p.y - 2.0).abs() < 1e-12);
        assert!((Point::ORIGIN.angle_to(Point::new(1.0, 1.0)) - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        let q = Point::ORIGIN.offset(1.0, 0.0);
        assert_eq!(q, Point::new(1.0, 0.0));
    }
}
