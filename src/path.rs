//! Sigil paths: numeric sequences traced over a resolved point set.

use serde::{Deserialize, Serialize};

use crate::config::SigilConfig;
use crate::encode::NumericSequence;
use crate::geometry::{Point, PointSet};
use crate::primitive::Primitive;

/// Ordered points of the traced figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SigilPath(Vec<Point>);

impl SigilPath {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drawing primitives for the path.
    ///
    /// Consecutive points are joined by segments, except where they
    /// coincide. The first point gets an open circle. With two or more
    /// points, the last gets a tick perpendicular to the final segment.
    pub fn primitives(&self, config: &SigilConfig) -> Vec<Primitive> {
        let Some((&start, _)) = self.0.split_first() else {
            return Vec::new();
        };

        let mut out: Vec<Primitive> = self
            .0
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .map(|pair| Primitive::LineSegment {
                p1: pair[0],
                p2: pair[1],
            })
            .collect();

        out.push(Primitive::Circle {
            center: start,
            radius: config.start_marker_radius,
            filled: false,
        });

        if let [.., before, end] = self.0.as_slice() {
            let perpendicular = before.angle_to(*end) + std::f64::consts::FRAC_PI_2;
            let half = config.end_tick_half_length;
            out.push(Primitive::LineSegment {
                p1: end.offset(half, perpendicular),
                p2: end.offset(-half, perpendicular),
            });
        }

        out
    }
}

/// Trace `sequence` over `points`.
///
/// On the wheel each value indexes a point directly. On a kamea each value
/// is first reduced into `1..=n²`; a value that still fails to resolve is
/// logged and dropped.
pub fn build_path(sequence: &NumericSequence, points: &PointSet) -> SigilPath {
    let traced = match points {
        PointSet::Wheel(wheel) => sequence
            .values()
            .iter()
            .filter_map(|&v| {
                let point = wheel.get(usize::from(v)).copied();
                if point.is_none() {
                    tracing::warn!(value = v, "wheel value out of range, dropping point");
                }
                point
            })
            .collect(),
        PointSet::Kamea(grid) => sequence
            .values()
            .iter()
            .filter_map(|&v| {
                grid.resolve(grid.reduce(v))
                    .inspect_err(|e| tracing::warn!(error = %e, value = v, "dropping point"))
                    .ok()
            })
            .collect(),
    };
    SigilPath(traced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Planet, WheelBase};

    fn seq(values: &[u8]) -> NumericSequence {
        NumericSequence::from(values.to_vec())
    }

    fn config() -> SigilConfig {
        SigilConfig::default()
    }

    #[test]
    fn wheel_values_index_points() {
        let points = PointSet::build(WheelBase::NinePoint, None, &config());
        let PointSet::Wheel(wheel) = &points else {
            panic!("expected a wheel");
        };
        let path = build_path(&seq(&[0, 1, 2]), &points);
        assert_eq!(path.points(), &wheel[..3]);
    }

    #[test]
    fn kamea_values_are_reduced_then_resolved() {
        let points = PointSet::build(WheelBase::Kamea(Planet::Saturn), None, &config());
        let PointSet::Kamea(grid) = &points else {
            panic!("expected a kamea");
        };
        // 0 -> 1, 8 -> 9, 4 -> 5
        let path = build_path(&seq(&[0, 8, 4]), &points);
        let expected: Vec<Point> = [1, 9, 5].iter().map(|&v| grid.resolve(v).unwrap()).collect();
        assert_eq!(path.points(), expected.as_slice());
    }

    #[test]
    fn every_kamea_traces_every_value() {
        let all: Vec<u8> = (0..9).collect();
        for planet in Planet::ALL {
            let points = PointSet::build(WheelBase::Kamea(planet), None, &config());
            assert_eq!(build_path(&seq(&all), &points).len(), 9, "{planet}");
        }
    }

    #[test]
    fn empty_sequence_has_no_primitives() {
        let points = PointSet::build(WheelBase::NinePoint, None, &config());
        let path = build_path(&seq(&[]), &points);
        assert!(path.is_empty());
        assert!(path.primitives(&config()).is_empty());
    }

    #[test]
    fn single_point_gets_only_a_start_marker() {
        let path = SigilPath(vec![Point::new(0.1, 0.2)]);
        let prims = path.primitives(&config());
        assert_eq!(
            prims,
            vec![Primitive::Circle {
                center: Point::new(0.1, 0.2),
                radius: 0.035,
                filled: false,
            }]
        );
    }

    #[test]
    fn repeated_points_skip_zero_length_segments() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let path = SigilPath(vec![a, a, b, b]);
        let prims = path.primitives(&config());
        let segments = prims.iter().filter(|p| p.is_line()).count();
        // one real segment plus the end tick
        assert_eq!(segments, 2);
        assert_eq!(prims[0], Primitive::LineSegment { p1: a, p2: b });
    }

    #[test]
    fn end_tick_is_perpendicular_to_last_segment() {
        let path = SigilPath(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        let prims = path.primitives(&config());
        let Some(Primitive::LineSegment { p1, p2 }) = prims.last() else {
            panic!("expected an end tick");
        };
        // Final segment runs along +x, so the tick is vertical through (1, 0).
        assert!((p1.x - 1.0).abs() < 1e-12 && (p2.x - 1.0).abs() < 1e-12);
        assert!((p1.y - 0.03).abs() < 1e-12);
        assert!((p2.y + 0.03).abs() < 1e-12);
    }

    #[test]
    fn end_tick_on_coincident_last_pair_uses_zero_angle() {
        let p = Point::new(0.5, 0.5);
        let path = SigilPath(vec![p, p]);
        let prims = path.primitives(&config());
        // no segment between identical points, start circle, then the tick
        assert_eq!(prims.len(), 2);
        assert!(prims[0].is_circle());
        assert!(prims[1].is_line());
    }
}
