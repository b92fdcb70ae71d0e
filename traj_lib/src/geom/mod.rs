//! # Geometry module
//!
//! Primitives on the XY plane used to describe curves and robot poses. Points
//! and vectors are plain `nalgebra` types, angles are normalised into
//! [0, 2pi).

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod angle;
mod circle;
mod line;
mod pose;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use angle::*;
pub use circle::*;
pub use line::*;
pub use pose::*;

pub use nalgebra::{Point2, Vector2};
