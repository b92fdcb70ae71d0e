//! Generic parameters functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::de::DeserializeOwned;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The software root environment variable (TRAJ_SW_ROOT) is not set")]
    SwRootNotSet,

    #[error("Cannot load the parmeter file: {0}")]
    FileLoadError(std::io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the root directory of the software tree from the environment.
pub fn get_sw_root() -> Result<PathBuf, LoadError> {
    std::env::var_os(crate::SW_ROOT_ENV_VAR)
        .map(PathBuf::from)
        .ok_or(LoadError::SwRootNotSet)
}

/// Load a parameter file
///
/// The file path is relative to the "$TRAJ_SW_ROOT/params" directory
pub fn load<P>(param_file_path: &str) -> Result<P, LoadError>
where
    P: DeserializeOwned
{
    // Get the params dir
    let mut path = get_sw_root()?;
    path.push("params");
    path.push(param_file_path);

    load_file(path)
}

/// Load a parameter file from an explicit path.
pub fn load_file<P, F>(path: F) -> Result<P, LoadError>
where
    P: DeserializeOwned,
    F: AsRef<Path>
{
    // Load the file into a string
    let params_str = match read_to_string(path) {
        Ok(s) => s,
        Err(e) => return Err(LoadError::FileLoadError(e))
    };

    from_str(params_str.as_str())
}

/// Parse parameters from a TOML string.
pub fn from_str<P>(params_str: &str) -> Result<P, LoadError>
where
    P: DeserializeOwned
{
    // Parse the string into the parameter struct
    match toml::from_str(params_str) {
        Ok(p) => Ok(p),
        Err(e) => Err(LoadError::DeserialiseError(e))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct TestParams {
        max_vel_ms: f64,
        steps: usize
    }

    #[test]
    fn test_from_str() {
        let p: TestParams = from_str("max_vel_ms = 1.5\nsteps = 10\n").unwrap();
        assert_eq!(p.max_vel_ms, 1.5);
        assert_eq!(p.steps, 10);

        // Missing fields are a deserialise error
        match from_str::<TestParams>("max_vel_ms = 1.5\n") {
            Err(LoadError::DeserialiseError(_)) => (),
            other => panic!("Unexpected result {:?}", other)
        }
    }

    #[test]
    fn test_load_without_root() {
        std::env::remove_var(crate::SW_ROOT_ENV_VAR);

        match load::<TestParams>("test.toml") {
            Err(LoadError::SwRootNotSet) => (),
            other => panic!("Unexpected result {:?}", other)
        }
    }

    #[test]
    fn test_load_missing_file() {
        match load_file::<TestParams, _>("/definitely/not/a/params.toml") {
            Err(LoadError::FileLoadError(_)) => (),
            other => panic!("Unexpected result {:?}", other)
        }
    }
}
