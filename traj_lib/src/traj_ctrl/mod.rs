//! # Trajectory control module
//!
//! Trajectory control keeps the robot on the target curve. Two control laws
//! are available, selected through [`Params::controller`]:
//!
//!  - Pure pursuit steers towards a lookahead point a fixed arc length ahead
//!    of the robot's closest point on the curve, driving around the circle
//!    that is tangent to the robot's heading and passes through that point.
//!  - Ramsete is a nonlinear feedback law which corrects the profiled linear
//!    and angular velocities using the position and heading error between the
//!    robot and the desired pose on the curve.
//!
//! Both produce a [`DiffDriveState`](crate::loco_ctrl::DiffDriveState) for
//! the locomotion layer.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod controllers;
pub mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use controllers::*;
pub use params::{ControllerParams, Params};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Potential errors that can occur while setting up trajectory control.
#[derive(Debug, thiserror::Error)]
pub enum TrajCtrlError {
    #[error("Could not load parameters: {0}")]
    ParamLoadError(util::params::LoadError),

    #[error("Invalid trajectory control parameters: {0}")]
    InvalidParams(String)
}
