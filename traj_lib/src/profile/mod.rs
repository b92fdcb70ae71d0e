//! # Motion profile module
//!
//! The motion profile decides how fast the robot should drive along a curve.
//! Each cycle [`Path::update`] finds the robot's closest point on the curve and
//! then limits the velocity demand by, in order:
//!
//!  1. the maximum acceleration and maximum velocity,
//!  2. previewed curvature limits further along the curve, far enough ahead
//!     that the robot could still stop before reaching them,
//!  3. the maximum angular velocity on the current tracking target,
//!  4. the distance remaining to the end of the curve,
//!
//! before finally making sure the demand never drops faster than the maximum
//! deceleration allows. If the robot has drifted too far from the curve the
//! curve is replanned from the robot's current pose.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod limits;
pub mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::Params;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Potential errors that can occur while setting up a motion profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Could not load parameters: {0}")]
    ParamLoadError(util::params::LoadError),

    #[error("Invalid motion profile constraints: {0}")]
    InvalidParams(String)
}
