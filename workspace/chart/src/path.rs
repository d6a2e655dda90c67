//! Smooth path construction: an ordered command list describing one curve,
//! plus its deterministic SVG `d` serialization.

use std::fmt::Write;

/// Fraction of the horizontal step used for cubic control-point offsets.
/// Keeps the transitions smooth without overshooting local extrema.
pub const CONTROL_OFFSET: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// An immutable-after-construction sequence of drawing commands. Owned by a
/// single chart render; identical inputs always serialize identically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeometry {
    commands: Vec<PathCommand>,
}

impl PathGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CurveTo { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    /// Serializes to an SVG path `d` attribute.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for command in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writes into a String are infallible.
            let _ = match command {
                PathCommand::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L {} {}", p.x, p.y),
                PathCommand::CurveTo { c1, c2, to } => {
                    write!(d, "C {} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, to.x, to.y)
                }
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Builds a smooth curve through `points`: the second point is reached with
/// a straight segment, every later point with a cubic whose control points
/// sit [`CONTROL_OFFSET`]·`step_x` inside the segment, flat in y. A single
/// point degenerates to a bare `MoveTo`; no points produce an empty path.
pub fn smooth_path(points: &[Point], step_x: f64) -> PathGeometry {
    let mut path = PathGeometry::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.push(PathCommand::MoveTo(*first));

    for (i, point) in points.iter().enumerate().skip(1) {
        if i == 1 {
            path.push(PathCommand::LineTo(*point));
        } else {
            let prev = points[i - 1];
            let offset = step_x * CONTROL_OFFSET;
            path.push(PathCommand::CurveTo {
                c1: Point::new(prev.x + offset, prev.y),
                c2: Point::new(point.x - offset, point.y),
                to: *point,
            });
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn no_points_is_an_empty_path() {
        let path = smooth_path(&[], 150.0);
        assert!(path.is_empty());
        assert_eq!(path.to_svg(), "");
    }

    #[test]
    fn single_point_is_move_only() {
        let path = smooth_path(&points(&[(20.0, 55.0)]), 300.0);
        assert_eq!(path.commands().len(), 1);
        assert_eq!(path.curve_count(), 0);
        assert_eq!(path.to_svg(), "M 20 55");
    }

    #[test]
    fn two_points_use_a_straight_segment() {
        let path = smooth_path(&points(&[(20.0, 50.0), (170.0, 40.0)]), 150.0);
        assert_eq!(path.line_count(), 1);
        assert_eq!(path.curve_count(), 0);
        assert_eq!(path.to_svg(), "M 20 50 L 170 40");
    }

    #[test]
    fn curve_segments_number_n_minus_two() {
        for n in 2..=7 {
            let pts: Vec<_> = (0..n).map(|i| Point::new(i as f64 * 50.0, 60.0)).collect();
            let path = smooth_path(&pts, 50.0);
            assert_eq!(path.line_count(), 1, "n = {n}");
            assert_eq!(path.curve_count(), n - 2, "n = {n}");
        }
    }

    #[test]
    fn control_points_offset_forty_percent_of_step() {
        let path = smooth_path(&points(&[(20.0, 50.0), (170.0, 40.0), (320.0, 70.0)]), 150.0);
        let PathCommand::CurveTo { c1, c2, to } = &path.commands()[2] else {
            panic!("third command must be a cubic");
        };
        assert_eq!(c1.x, 170.0 + 60.0);
        assert_eq!(c1.y, 40.0);
        assert_eq!(c2.x, 320.0 - 60.0);
        assert_eq!(c2.y, 70.0);
        assert_eq!((to.x, to.y), (320.0, 70.0));
    }

    #[test]
    fn identical_inputs_serialize_identically() {
        let pts = points(&[(20.0, 51.5), (95.0, 43.25), (170.0, 62.0), (245.0, 58.0)]);
        let a = smooth_path(&pts, 75.0).to_svg();
        let b = smooth_path(&pts, 75.0).to_svg();
        assert_eq!(a, b);
    }
}
