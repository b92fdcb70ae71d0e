//! Trajectory control parameters

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::path::Path;

// Internal
use super::TrajCtrlError;
use util::params;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for trajectory control
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Params {

    /// Distance from the end of the curve at which the robot starts its final
    /// approach, subtracted from the remaining distance when limiting the
    /// velocity.
    pub end_threshold_m: f64,

    /// Distance from the curve above which the curve is replanned from the
    /// robot's current pose.
    pub adjust_threshold_m: f64,

    /// Number of seeds used by the closest point search.
    pub newton_steps: usize,

    /// Number of Newton iterations run from each seed.
    pub newton_iterations: usize,

    /// Distance between the left and right wheels
    pub track_width_m: f64,

    /// The control law used to track the curve
    pub controller: ControllerParams
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Selection and tuning of the tracking control law.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControllerParams {
    /// Geometric pure pursuit
    PurePursuit {
        /// Arc length ahead of the closest point to steer towards
        lookahead_m: f64
    },

    /// Ramsete nonlinear feedback
    Ramsete {
        /// Convergence gain, larger values converge faster. Must be positive.
        b: f64,

        /// Damping, must be in (0, 1)
        zeta: f64
    }
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {
    /// Load the parameters from a file relative to the software parameters
    /// directory and validate them.
    pub fn load(params_path: &str) -> Result<Self, TrajCtrlError> {
        let p: Self = params::load(params_path).map_err(TrajCtrlError::ParamLoadError)?;
        p.validate()?;
        Ok(p)
    }

    /// Load the parameters from an explicit file path and validate them.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, TrajCtrlError> {
        let p: Self = params::load_file(path).map_err(TrajCtrlError::ParamLoadError)?;
        p.validate()?;
        Ok(p)
    }

    /// Check that the parameters are usable.
    pub fn validate(&self) -> Result<(), TrajCtrlError> {
        if !(self.end_threshold_m >= 0.0) {
            return Err(TrajCtrlError::InvalidParams(format!(
                "end_threshold_m must not be negative, found {}", self.end_threshold_m
            )))
        }
        if !(self.adjust_threshold_m > 0.0) {
            return Err(TrajCtrlError::InvalidParams(format!(
                "adjust_threshold_m must be positive, found {}", self.adjust_threshold_m
            )))
        }
        if self.newton_steps == 0 {
            return Err(TrajCtrlError::InvalidParams(
                "newton_steps must be at least 1".into()
            ))
        }
        if !(self.track_width_m >= 0.0) {
            return Err(TrajCtrlError::InvalidParams(format!(
                "track_width_m must not be negative, found {}", self.track_width_m
            )))
        }

        match self.controller {
            ControllerParams::PurePursuit { lookahead_m } => {
                if !(lookahead_m > 0.0) {
                    return Err(TrajCtrlError::InvalidParams(format!(
                        "lookahead_m must be positive, found {}", lookahead_m
                    )))
                }
            },
            ControllerParams::Ramsete { b, zeta } => {
                if !(b > 0.0) {
                    return Err(TrajCtrlError::InvalidParams(format!(
                        "Ramsete b must be positive, found {}", b
                    )))
                }
                if !(zeta > 0.0 && zeta < 1.0) {
                    return Err(TrajCtrlError::InvalidParams(format!(
                        "Ramsete zeta must be in (0, 1), found {}", zeta
                    )))
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PURE_PURSUIT: &str = r#"
        end_threshold_m = 0.05
        adjust_threshold_m = 0.3
        newton_steps = 25
        newton_iterations = 5
        track_width_m = 0.6

        [controller]
        type = "pure_pursuit"
        lookahead_m = 0.4
    "#;

    #[test]
    fn test_parse() {
        let p: Params = params::from_str(PURE_PURSUIT).unwrap();
        assert_eq!(p.controller, ControllerParams::PurePursuit { lookahead_m: 0.4 });
        assert_eq!(p.newton_steps, 25);
        assert!(p.validate().is_ok());

        let ramsete = PURE_PURSUIT
            .replace("\"pure_pursuit\"", "\"ramsete\"")
            .replace("lookahead_m = 0.4", "b = 2.0\nzeta = 0.7");
        let p: Params = params::from_str(&ramsete).unwrap();
        assert_eq!(p.controller, ControllerParams::Ramsete { b: 2.0, zeta: 0.7 });
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let mut p: Params = params::from_str(PURE_PURSUIT).unwrap();

        p.controller = ControllerParams::Ramsete { b: 2.0, zeta: 1.5 };
        assert!(matches!(p.validate(), Err(TrajCtrlError::InvalidParams(_))));

        p.controller = ControllerParams::PurePursuit { lookahead_m: 0.0 };
        assert!(matches!(p.validate(), Err(TrajCtrlError::InvalidParams(_))));

        p.controller = ControllerParams::PurePursuit { lookahead_m: 0.4 };
        p.newton_steps = 0;
        assert!(matches!(p.validate(), Err(TrajCtrlError::InvalidParams(_))));
    }
}
