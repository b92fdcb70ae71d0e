//! # Locomotion control module
//!
//! Converts a linear and angular velocity demand for the robot body into
//! individual wheel velocities for a differential (skid steer) drive.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod diff_drive;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use diff_drive::*;
