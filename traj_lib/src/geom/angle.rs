//! Planar angles

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use util::maths::{get_ang_dist_2pi, wrap_2pi};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An angle to the positive X axis, anticlockwise positive.
///
/// The stored value is always in the range [0, 2pi).
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Angle {
    radians: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Angle {
    /// Create a new angle, wrapping the value into [0, 2pi).
    pub fn new(radians: f64) -> Self {
        Self {
            radians: wrap_2pi(radians)
        }
    }

    /// Create an angle pointing along the given vector.
    pub fn from_vector(vector: &Vector2<f64>) -> Self {
        Self::new(vector[1].atan2(vector[0]))
    }

    /// Create an angle from a value in degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees.to_radians())
    }

    /// The angle in radians, in the range [0, 2pi).
    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    /// The tangent of the angle.
    ///
    /// Returns positive or negative infinity (following the sign of the sine)
    /// when the cosine is exactly zero.
    pub fn tan(&self) -> f64 {
        let cos = self.cos();

        if cos == 0.0 {
            f64::INFINITY.copysign(self.sin())
        }
        else {
            self.sin() / cos
        }
    }

    /// Add an offset in radians to this angle, wrapping the result.
    pub fn add(&mut self, radians: f64) {
        self.radians = wrap_2pi(self.radians + radians);
    }

    /// Return the opposite angle (rotated by pi).
    pub fn reversed(&self) -> Self {
        Self::new(self.radians + std::f64::consts::PI)
    }

    /// Return a vector of the given magnitude pointing along this angle.
    pub fn to_vector(&self, magnitude: f64) -> Vector2<f64> {
        Vector2::new(magnitude * self.cos(), magnitude * self.sin())
    }

    /// Unsigned shortest arc between this angle and another, in the range [0, pi].
    pub fn distance(&self, other: &Angle) -> f64 {
        self.signed_distance_to(other).abs()
    }

    /// Signed shortest arc from this angle to another, in the range [-pi, pi].
    ///
    /// Positive values mean `other` lies anticlockwise of `self`.
    pub fn signed_distance_to(&self, other: &Angle) -> f64 {
        get_ang_dist_2pi(self.radians, other.radians)
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Self::new(radians)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.radians
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_normalisation() {
        assert_eq!(Angle::new(0.0).radians(), 0.0);
        assert_eq!(Angle::new(TAU).radians(), 0.0);
        assert!((Angle::new(-FRAC_PI_2).radians() - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!((Angle::new(5.0 * PI).radians() - PI).abs() < 1e-12);

        let mut a = Angle::new(TAU - 0.5);
        a.add(1.0);
        assert!((a.radians() - 0.5).abs() < 1e-12);
        a.add(-1.0);
        assert!((a.radians() - (TAU - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_tan() {
        assert!((Angle::new(PI / 4.0).tan() - 1.0).abs() < 1e-12);
        assert_eq!(Angle::new(0.0).tan(), 0.0);

        // The cosine of the f64 pi/2 is tiny but not exactly zero
        assert!(Angle::new(FRAC_PI_2).tan() > 1e15);
    }

    #[test]
    fn test_vectors() {
        let a = Angle::from_vector(&Vector2::new(0.0, -2.0));
        assert!((a.radians() - 3.0 * FRAC_PI_2).abs() < 1e-12);

        let v = Angle::new(PI).to_vector(3.0);
        assert!((v[0] + 3.0).abs() < 1e-12);
        assert!(v[1].abs() < 1e-12);
    }

    #[test]
    fn test_distance() {
        let a = Angle::new(0.1);
        let b = Angle::new(TAU - 0.1);

        assert!((a.distance(&b) - 0.2).abs() < 1e-12);
        assert!((b.distance(&a) - 0.2).abs() < 1e-12);
        assert!((a.signed_distance_to(&b) + 0.2).abs() < 1e-12);
        assert!((b.signed_distance_to(&a) - 0.2).abs() < 1e-12);

        let c = Angle::new(PI);
        assert!((Angle::new(0.0).distance(&c) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_serde() {
        let a: Angle = serde_json::from_str("-1.0").unwrap();
        assert!((a.radians() - (TAU - 1.0)).abs() < 1e-12);
        assert_eq!(serde_json::to_string(&Angle::new(0.5)).unwrap(), "0.5");
    }
}
