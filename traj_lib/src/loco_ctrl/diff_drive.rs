//! Differential drive kinematics

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;

// Internal
use crate::geom::Orientation;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Angular velocities smaller than this are treated as driving straight.
pub const ANGULAR_EPSILON: f64 = 2e-9;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Drive demands for a differential drive robot.
///
/// Units: meters/second for linear and wheel velocities, radians/second for
/// angular velocity (anticlockwise positive), meters for the turn radius.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct DiffDriveState {
    pub linear_vel_ms: f64,
    pub angular_vel_rads: f64,
    pub left_vel_ms: f64,
    pub right_vel_ms: f64,

    /// Turn radius of the robot center, infinite when driving straight
    pub turn_radius_m: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl DiffDriveState {
    /// Calculate wheel velocities from a linear and angular velocity.
    pub fn from_linear_and_angular(
        linear_vel_ms: f64,
        angular_vel_rads: f64,
        track_width_m: f64
    ) -> Self {
        let state = if angular_vel_rads.abs() < ANGULAR_EPSILON {
            Self {
                linear_vel_ms,
                angular_vel_rads,
                left_vel_ms: linear_vel_ms,
                right_vel_ms: linear_vel_ms,
                turn_radius_m: f64::INFINITY
            }
        }
        else {
            let turn_radius_m = linear_vel_ms / angular_vel_rads;

            Self {
                linear_vel_ms,
                angular_vel_rads,
                left_vel_ms: angular_vel_rads * (turn_radius_m - track_width_m / 2.0),
                right_vel_ms: angular_vel_rads * (turn_radius_m + track_width_m / 2.0),
                turn_radius_m
            }
        };

        trace!(
            "Drive state: v = {:.4} m/s, w = {:.4} rad/s, left = {:.4} m/s, right = {:.4} m/s",
            state.linear_vel_ms,
            state.angular_vel_rads,
            state.left_vel_ms,
            state.right_vel_ms
        );

        state
    }

    /// Calculate wheel velocities to drive around a circle of the given
    /// (unsigned) radius.
    ///
    /// The turn direction comes from `orientation`, turning right gives a
    /// negative angular velocity. An infinite radius drives straight.
    pub fn from_linear_and_radius(
        linear_vel_ms: f64,
        radius_m: f64,
        orientation: Orientation,
        track_width_m: f64
    ) -> Self {
        let mut angular_vel_rads = if radius_m.is_infinite() {
            0.0
        }
        else {
            linear_vel_ms / radius_m
        };

        if orientation == Orientation::Right {
            angular_vel_rads = -angular_vel_rads;
        }

        Self::from_linear_and_angular(linear_vel_ms, angular_vel_rads, track_width_m)
    }

    /// A stationary robot.
    pub fn stop() -> Self {
        Self::from_linear_and_angular(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_linear_and_angular() {
        let straight = DiffDriveState::from_linear_and_angular(2.0, 0.0, 0.5);
        assert_eq!(straight.left_vel_ms, 2.0);
        assert_eq!(straight.right_vel_ms, 2.0);
        assert!(straight.turn_radius_m.is_infinite());

        let turn = DiffDriveState::from_linear_and_angular(2.0, 1.0, 0.5);
        assert!((turn.turn_radius_m - 2.0).abs() < 1e-12);
        assert!((turn.left_vel_ms - 1.75).abs() < 1e-12);
        assert!((turn.right_vel_ms - 2.25).abs() < 1e-12);

        // Tiny angular velocities are straight
        let nearly = DiffDriveState::from_linear_and_angular(1.0, 1e-10, 0.5);
        assert_eq!(nearly.left_vel_ms, nearly.right_vel_ms);
    }

    #[test]
    fn test_from_linear_and_radius() {
        let left = DiffDriveState::from_linear_and_radius(2.0, 2.0, Orientation::Left, 0.5);
        assert!((left.angular_vel_rads - 1.0).abs() < 1e-12);
        assert!(left.right_vel_ms > left.left_vel_ms);

        let right = DiffDriveState::from_linear_and_radius(2.0, 2.0, Orientation::Right, 0.5);
        assert!((right.angular_vel_rads + 1.0).abs() < 1e-12);
        assert!((right.left_vel_ms - 2.25).abs() < 1e-12);
        assert!((right.right_vel_ms - 1.75).abs() < 1e-12);

        let straight = DiffDriveState::from_linear_and_radius(
            2.0, f64::INFINITY, Orientation::Colinear, 0.5
        );
        assert_eq!(straight.angular_vel_rads, 0.0);
        assert_eq!(straight.left_vel_ms, 2.0);

        assert_eq!(DiffDriveState::stop().left_vel_ms, 0.0);
    }
}
