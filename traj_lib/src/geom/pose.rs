//! Planar pose

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Angle;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The position and heading of the robot (or of a point on a curve) on the
/// plane.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// Position in meters
    pub position_m: Point2<f64>,

    /// Heading, anticlockwise from the positive X axis
    pub heading: Angle
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose2D {
    /// Create a new pose from coordinates in meters and a heading in radians.
    pub fn new(x_m: f64, y_m: f64, heading_rad: f64) -> Self {
        Self {
            position_m: Point2::new(x_m, y_m),
            heading: Angle::new(heading_rad)
        }
    }

    pub fn from_point_and_angle(position_m: Point2<f64>, heading: Angle) -> Self {
        Self {
            position_m,
            heading
        }
    }

    pub fn x(&self) -> f64 {
        self.position_m[0]
    }

    pub fn y(&self) -> f64 {
        self.position_m[1]
    }

    /// Euclidian distance between the positions of two poses.
    pub fn distance(&self, other: &Pose2D) -> f64 {
        (other.position_m - self.position_m).norm()
    }

    /// Unit vector pointing along the heading.
    pub fn forward(&self) -> Vector2<f64> {
        self.heading.to_vector(1.0)
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pose() {
        let a = Pose2D::new(1.0, 1.0, std::f64::consts::FRAC_PI_2);
        let b = Pose2D::new(4.0, 5.0, 0.0);

        assert_eq!(a.distance(&b), 5.0);
        assert!(a.forward()[0].abs() < 1e-12);
        assert!((a.forward()[1] - 1.0).abs() < 1e-12);
        assert_eq!(Pose2D::default().heading.radians(), 0.0);
    }
}
