//! Utility library for the trajectory software

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod logger;
pub mod maths;
pub mod params;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Environment variable pointing at the root of the software tree. Parameter
/// files are resolved relative to `$TRAJ_SW_ROOT/params`.
pub const SW_ROOT_ENV_VAR: &str = "TRAJ_SW_ROOT";
