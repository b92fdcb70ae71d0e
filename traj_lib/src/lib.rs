//! # Trajectory library.
//!
//! Spline path generation, velocity profiling and path tracking for a
//! differential drive robot. A caller builds a curve (a single quintic
//! Hermite spline or a group of them), wraps it in a profiled
//! [`profile::Path`] and then calls [`profile::Path::update`] once per control
//! cycle with the current pose, receiving wheel velocity demands back.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Geometric primitives - angles, poses, lines and circles on the plane
pub mod geom;

/// Parametric curves - the curve trait, quintic Hermite splines and spline groups
pub mod curve;

/// Locomotion control module - converts linear and angular demands into wheel demands
pub mod loco_ctrl;

/// Trajectory control module - pure pursuit and Ramsete tracking laws
pub mod traj_ctrl;

/// Motion profile module - plans the velocity along a curve and replans the curve when the robot
/// drifts away from it
pub mod profile;
