//! Tangent circles used for pure pursuit steering

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Point2;
use serde::Serialize;

use super::{Line, Pose2D};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Tolerance below which a point is considered to lie on the line through a
/// pose along its heading.
pub const COLINEAR_EPSILON: f64 = 2e-9;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A circle on the plane.
///
/// An infinite radius represents a straight line, in which case there is no
/// center.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub radius_m: f64,
    pub center_m: Option<Point2<f64>>
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Which side of a pose's heading a point lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Orientation {
    /// The point lies on the line through the pose along its heading
    Colinear = 0,

    /// The point is to the right of the heading (clockwise turn)
    Right = 1,

    /// The point is to the left of the heading (anticlockwise turn)
    Left = 2
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Circle {
    pub fn new(radius_m: f64, center_m: Point2<f64>) -> Self {
        Self {
            radius_m,
            center_m: Some(center_m)
        }
    }

    /// A circle of infinite radius, i.e. a straight line.
    pub fn straight() -> Self {
        Self {
            radius_m: f64::INFINITY,
            center_m: None
        }
    }

    /// Find the circle tangent to the pose's heading at its position which
    /// also passes through `point_m`.
    ///
    /// If the point lies on the heading line (or on the pose itself) the
    /// circle is straight.
    pub fn from_pose_and_point(pose: &Pose2D, point_m: &Point2<f64>) -> Self {
        // The center lies somewhere on the line perpendicular to the heading
        let heading_line = Line::from_point_and_angle(pose.position_m, pose.heading);
        let radius_line = heading_line.perpendicular_at(pose.position_m);

        let chord = point_m - pose.position_m;
        let chord_dir = match chord.try_normalize(0.0) {
            Some(d) => d,
            None => return Self::straight()
        };

        if pose.forward().perp(&chord_dir).abs() < COLINEAR_EPSILON {
            return Self::straight()
        }

        // And on the perpendicular bisector of the chord
        let midpoint = pose.position_m + chord / 2.0;
        let bisector = Line::from_points(pose.position_m, *point_m).perpendicular_at(midpoint);

        match radius_line.intersection(&bisector) {
            Some(center_m) => Self::new((point_m - center_m).norm(), center_m),
            None => Self::straight()
        }
    }

    /// Which side of the pose's heading `point_m` lies on.
    pub fn orientation_of_pose_and_point(pose: &Pose2D, point_m: &Point2<f64>) -> Orientation {
        let p1 = pose.position_m;
        let p2 = p1 + pose.forward();
        let p3 = point_m;

        let test = (p2[1] - p1[1]) * (p3[0] - p2[0]) - (p2[0] - p1[0]) * (p3[1] - p2[1]);

        if test.abs() < COLINEAR_EPSILON {
            Orientation::Colinear
        }
        else if test > 0.0 {
            Orientation::Right
        }
        else {
            Orientation::Left
        }
    }

    pub fn is_straight(&self) -> bool {
        self.radius_m.is_infinite()
    }
}
