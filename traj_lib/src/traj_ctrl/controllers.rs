//! # Trajectory controllers module
//!
//! This module provides the pure pursuit and Ramsete control laws, including
//! the Ramsete error calculations.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;

// Internal
use crate::{
    geom::{Orientation, Pose2D},
    loco_ctrl::DiffDriveState
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Below this magnitude `sinc(x)` is taken as its limit of 1.
const SINC_EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Intermediate values of a Ramsete calculation, used for monitoring and
/// tuning.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct RamseteDiagnostics {
    /// Along track error in the robot frame
    pub error_x_m: f64,

    /// Cross track error in the robot frame, positive to the left
    pub error_y_m: f64,

    /// Signed heading error from the current to the desired heading
    pub error_heading_rad: f64,

    /// Gain `k`
    pub gain: f64,

    /// Linear velocity from the profile
    pub desired_linear_vel_ms: f64,

    /// Angular velocity from the profile
    pub desired_angular_vel_rads: f64,

    /// Corrected linear velocity
    pub linear_vel_ms: f64,

    /// Corrected angular velocity
    pub angular_vel_rads: f64
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Pure pursuit control law.
///
/// Drives the robot around the tangent circle of radius `radius_m` in the
/// direction given by `orientation`, at the profiled linear velocity.
pub fn pure_pursuit(
    radius_m: f64,
    linear_vel_ms: f64,
    orientation: Orientation,
    track_width_m: f64
) -> DiffDriveState {
    DiffDriveState::from_linear_and_radius(linear_vel_ms, radius_m, orientation, track_width_m)
}

/// Ramsete control law.
///
/// `b > 0` sets how aggressively errors are corrected, `0 < zeta < 1` sets the
/// damping. The desired velocities are those of the profile at the desired
/// pose.
pub fn ramsete(
    pose: &Pose2D,
    desired: &Pose2D,
    desired_linear_vel_ms: f64,
    desired_angular_vel_rads: f64,
    b: f64,
    zeta: f64,
    track_width_m: f64
) -> (DiffDriveState, RamseteDiagnostics) {
    let vd = desired_linear_vel_ms;
    let wd = desired_angular_vel_rads;

    let gain = 2.0 * zeta * (wd * wd + b * vd * vd).sqrt();

    // Position error rotated into the robot frame
    let (sin, cos) = (pose.heading.sin(), pose.heading.cos());
    let dx = desired.x() - pose.x();
    let dy = desired.y() - pose.y();

    let error_x_m = cos * dx + sin * dy;
    let error_y_m = -sin * dx + cos * dy;
    let error_heading_rad = pose.heading.signed_distance_to(&desired.heading);

    let linear_vel_ms = vd * error_heading_rad.cos() + gain * error_x_m;
    let angular_vel_rads = wd
        + gain * error_heading_rad
        + b * vd * sinc(error_heading_rad) * error_y_m;

    let diag = RamseteDiagnostics {
        error_x_m,
        error_y_m,
        error_heading_rad,
        gain,
        desired_linear_vel_ms: vd,
        desired_angular_vel_rads: wd,
        linear_vel_ms,
        angular_vel_rads
    };

    trace!("Ramsete: {:?}", diag);

    (
        DiffDriveState::from_linear_and_angular(linear_vel_ms, angular_vel_rads, track_width_m),
        diag
    )
}

/// `sin(x) / x`, continuous at zero.
pub fn sinc(x: f64) -> f64 {
    if x.abs() < SINC_EPSILON {
        1.0
    }
    else {
        x.sin() / x
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sinc() {
        assert_eq!(sinc(0.0), 1.0);
        assert!((sinc(std::f64::consts::PI)).abs() < 1e-12);
        assert!((sinc(0.5) - 0.5f64.sin() / 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_ramsete_on_target() {
        let pose = Pose2D::new(1.0, 2.0, 0.3);

        let (state, diag) = ramsete(&pose, &pose, 1.5, 0.0, 2.0, 0.7, 0.5);

        assert!(diag.error_x_m.abs() < 1e-12);
        assert!(diag.error_y_m.abs() < 1e-12);
        assert_eq!(diag.error_heading_rad, 0.0);
        assert!((state.linear_vel_ms - 1.5).abs() < 1e-12);
        assert!(state.angular_vel_rads.abs() < 1e-12);
        assert_eq!(state.left_vel_ms, state.right_vel_ms);
    }

    #[test]
    fn test_ramsete_corrections() {
        // Desired pose ahead and to the left, robot pointing along X
        let pose = Pose2D::new(0.0, 0.0, 0.0);
        let desired = Pose2D::new(0.5, 0.2, 0.0);

        let (state, diag) = ramsete(&pose, &desired, 1.0, 0.0, 2.0, 0.7, 0.5);

        assert!((diag.error_x_m - 0.5).abs() < 1e-12);
        assert!((diag.error_y_m - 0.2).abs() < 1e-12);

        // Speeds up to catch the desired pose and turns towards it
        assert!(state.linear_vel_ms > 1.0);
        assert!(state.angular_vel_rads > 0.0);

        // Heading error is signed, desired heading clockwise of the robot turns right
        let desired = Pose2D::new(0.0, 0.0, -0.2);
        let (state, diag) = ramsete(&pose, &desired, 1.0, 0.0, 2.0, 0.7, 0.5);
        assert!((diag.error_heading_rad + 0.2).abs() < 1e-12);
        assert!(state.angular_vel_rads < 0.0);
    }

    #[test]
    fn test_pure_pursuit() {
        let state = pure_pursuit(f64::INFINITY, 1.0, Orientation::Colinear, 0.5);
        assert_eq!(state.angular_vel_rads, 0.0);

        let state = pure_pursuit(2.0, 1.0, Orientation::Right, 0.5);
        assert!((state.angular_vel_rads + 0.5).abs() < 1e-12);
    }
}
