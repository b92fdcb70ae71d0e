//! Infinite lines on the plane

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::{Point2, Vector2};

use super::Angle;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Below this magnitude of the cross product of two line directions the lines
/// are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-12;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An infinite line, stored as a point on the line and a unit direction.
///
/// Vertical lines need no special handling as there is no slope stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    point_m: Point2<f64>,
    direction: Vector2<f64>
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Line {
    /// Create a line through a point along the given angle.
    pub fn from_point_and_angle(point_m: Point2<f64>, angle: Angle) -> Self {
        Self {
            point_m,
            direction: angle.to_vector(1.0)
        }
    }

    /// Create a line through two points.
    ///
    /// If the points coincide the line points along the positive X axis.
    pub fn from_points(a: Point2<f64>, b: Point2<f64>) -> Self {
        let diff = b - a;

        let direction = match diff.try_normalize(0.0) {
            Some(d) => d,
            None => Vector2::new(1.0, 0.0)
        };

        Self {
            point_m: a,
            direction
        }
    }

    /// Create a line through a point with the given slope (dy/dx).
    ///
    /// An infinite slope gives a vertical line.
    pub fn from_point_and_slope(point_m: Point2<f64>, slope: f64) -> Self {
        let direction = if slope.is_infinite() {
            Vector2::new(0.0, 1.0)
        }
        else {
            Vector2::new(1.0, slope).normalize()
        };

        Self {
            point_m,
            direction
        }
    }

    pub fn point(&self) -> Point2<f64> {
        self.point_m
    }

    pub fn direction(&self) -> Vector2<f64> {
        self.direction
    }

    /// The slope (dy/dx) of the line, infinite for vertical lines.
    pub fn slope(&self) -> f64 {
        Angle::from_vector(&self.direction).tan()
    }

    /// The line perpendicular to this one passing through the given point.
    pub fn perpendicular_at(&self, point_m: Point2<f64>) -> Self {
        Self {
            point_m,
            direction: Vector2::new(-self.direction[1], self.direction[0])
        }
    }

    /// Point where this line crosses another.
    ///
    /// Returns `None` if the lines are parallel (including coincident).
    pub fn intersection(&self, other: &Line) -> Option<Point2<f64>> {
        let cross = self.direction.perp(&other.direction);

        if cross.abs() < PARALLEL_EPSILON {
            return None
        }

        // Solve p + s*d = q + u*e for s
        let s = (other.point_m - self.point_m).perp(&other.direction) / cross;

        Some(self.point_m + self.direction * s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_intersection() {
        let horiz = Line::from_point_and_angle(Point2::new(0.0, 2.0), Angle::new(0.0));
        let vert = Line::from_points(Point2::new(3.0, -1.0), Point2::new(3.0, 7.0));

        let p = horiz.intersection(&vert).unwrap();
        assert!((p - Point2::new(3.0, 2.0)).norm() < 1e-12);

        // Parallel lines never meet
        let other = Line::from_point_and_slope(Point2::new(0.0, 5.0), 0.0);
        assert!(horiz.intersection(&other).is_none());
    }

    #[test]
    fn test_perpendicular() {
        let line = Line::from_point_and_slope(Point2::new(0.0, 0.0), 1.0);
        let perp = line.perpendicular_at(Point2::new(2.0, 0.0));

        assert!((perp.slope() + 1.0).abs() < 1e-9);

        let p = line.intersection(&perp).unwrap();
        assert!((p - Point2::new(1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_slope() {
        assert!(Line::from_point_and_slope(Point2::origin(), f64::INFINITY).slope().abs() > 1e15);
        assert!((Line::from_points(Point2::origin(), Point2::new(2.0, 1.0)).slope() - 0.5).abs() < 1e-12);
    }
}
