//! Motion profile constraints

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::path::Path;

// Internal
use super::ProfileError;
use util::params;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Kinematic constraints of a motion profile.
///
/// All limits must be positive, and the start and end velocities must lie
/// between zero and the maximum velocity. [`Params::validate`] checks this,
/// it is called automatically when loading from a file.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq)]
pub struct Params {
    /// Maximum acceleration
    pub max_accel_mss: f64,

    /// Maximum deceleration, as a positive number
    pub max_decel_mss: f64,

    /// Maximum linear velocity
    pub max_vel_ms: f64,

    /// Maximum angular velocity, `None` for no limit
    #[serde(default)]
    pub max_ang_vel_rads: Option<f64>,

    /// Velocity at the start of the curve
    #[serde(default)]
    pub start_vel_ms: f64,

    /// Velocity to reach at the end of the curve
    #[serde(default)]
    pub end_vel_ms: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {
    /// Constraints with equal acceleration and deceleration, no angular
    /// velocity limit, starting and ending at rest.
    pub fn symmetric(max_accel_mss: f64, max_vel_ms: f64) -> Self {
        Self {
            max_accel_mss,
            max_decel_mss: max_accel_mss,
            max_vel_ms,
            max_ang_vel_rads: None,
            start_vel_ms: 0.0,
            end_vel_ms: 0.0
        }
    }

    /// Load the constraints from a file relative to the software parameters
    /// directory and validate them.
    pub fn load(params_path: &str) -> Result<Self, ProfileError> {
        let p: Self = params::load(params_path).map_err(ProfileError::ParamLoadError)?;
        p.validate()?;
        Ok(p)
    }

    /// Load the constraints from an explicit file path and validate them.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let p: Self = params::load_file(path).map_err(ProfileError::ParamLoadError)?;
        p.validate()?;
        Ok(p)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        let positive = [
            ("max_accel_mss", self.max_accel_mss),
            ("max_decel_mss", self.max_decel_mss),
            ("max_vel_ms", self.max_vel_ms),
            ("max_ang_vel_rads", self.max_ang_vel_rads.unwrap_or(f64::INFINITY))
        ];

        for (name, value) in positive.iter() {
            if !(*value > 0.0) {
                return Err(ProfileError::InvalidParams(format!(
                    "{} must be positive, found {}", name, value
                )))
            }
        }

        for (name, value) in [("start_vel_ms", self.start_vel_ms), ("end_vel_ms", self.end_vel_ms)].iter() {
            if !(*value >= 0.0 && *value <= self.max_vel_ms) {
                return Err(ProfileError::InvalidParams(format!(
                    "{} must be between 0 and max_vel_ms ({}), found {}",
                    name, self.max_vel_ms, value
                )))
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        let p: Params = params::from_str(
            "max_accel_mss = 1.0\nmax_decel_mss = 2.0\nmax_vel_ms = 1.5\n"
        ).unwrap();

        assert_eq!(p.max_ang_vel_rads, None);
        assert_eq!(p.start_vel_ms, 0.0);
        assert!(p.validate().is_ok());

        let p: Params = params::from_str(
            "max_accel_mss = 1.0\nmax_decel_mss = 2.0\nmax_vel_ms = 1.5\nmax_ang_vel_rads = 3.0\nend_vel_ms = 0.5\n"
        ).unwrap();

        assert_eq!(p.max_ang_vel_rads, Some(3.0));
        assert_eq!(p.end_vel_ms, 0.5);
    }

    #[test]
    fn test_load_from_sw_root() {
        // Only test in this crate touching the root variable
        std::env::remove_var(util::SW_ROOT_ENV_VAR);
        assert!(matches!(
            Params::load("profile.toml"),
            Err(ProfileError::ParamLoadError(params::LoadError::SwRootNotSet))
        ));

        std::env::set_var(util::SW_ROOT_ENV_VAR, concat!(env!("CARGO_MANIFEST_DIR"), "/.."));

        let p = Params::load("profile.toml").unwrap();
        assert_eq!(p.max_vel_ms, 1.0);
        assert_eq!(p.max_ang_vel_rads, Some(1.0));

        let ctrl = crate::traj_ctrl::Params::load("traj_ctrl.toml").unwrap();
        assert_eq!(ctrl.newton_steps, 10);
        assert_eq!(
            ctrl.controller,
            crate::traj_ctrl::ControllerParams::PurePursuit { lookahead_m: 0.4 }
        );

        assert!(matches!(
            Params::load("missing.toml"),
            Err(ProfileError::ParamLoadError(params::LoadError::FileLoadError(_)))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Params::symmetric(1.0, 2.0).validate().is_ok());
        assert!(Params::symmetric(0.0, 2.0).validate().is_err());
        assert!(Params::symmetric(1.0, -2.0).validate().is_err());

        let mut p = Params::symmetric(1.0, 2.0);
        p.end_vel_ms = 3.0;
        assert!(matches!(p.validate(), Err(ProfileError::InvalidParams(_))));

        p.end_vel_ms = 0.0;
        p.max_ang_vel_rads = Some(0.0);
        assert!(p.validate().is_err());
    }
}
