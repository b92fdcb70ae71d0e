//! # Curve module
//!
//! Curves are described by the [`Parametric`] trait, which maps a parameter
//! `t` in [0, 1] onto the plane. Only the point, its derivatives, the cached
//! length and replanning need implementing, everything else (heading,
//! curvature, arc length, closest point and length inversion) is built on top
//! of those.
//!
//! Two curves are provided:
//!
//!  - [`QuinticHermiteSpline`] - a single quintic spline defined by position,
//!    velocity and acceleration at each end.
//!  - [`QuinticHermiteSplineGroup`] - a chain of splines, each taking an equal
//!    share of `t`.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod quadrature;
mod spline;
mod spline_group;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use nalgebra::{Point2, Vector2};
use std::fmt::Debug;

// Internal
use crate::geom::{Angle, Pose2D};
pub use spline::*;
pub use spline_group::*;
use util::maths::clamp;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Quadrature order used for the cached total length of a curve.
pub const LENGTH_ORDER: usize = 17;

/// Quadrature order used for the frequent length queries made while
/// profiling.
pub const PROFILE_ORDER: usize = 11;

/// Number of Newton iterations used to invert arc length into `t`.
pub const T_FROM_LENGTH_ITERATIONS: usize = 5;

/// Number of Newton iterations used when searching for the segment to replan.
pub const REPLAN_SEARCH_ITERATIONS: usize = 5;

/// Second derivatives of the squared distance smaller than this stop the
/// Newton refinement of a seed.
pub const NEWTON_EPSILON: f64 = 1e-12;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Result of a closest point search.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClosestPoint {
    /// Parameter of the closest point, in [0, 1]
    pub t: f64,

    /// Squared distance between the query point and the curve at `t`
    pub distance_sq_m2: f64
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors that can occur while building or modifying curves.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("A spline group must contain at least one spline")]
    EmptyGroup,

    #[error("Spline index {index} is out of range for a group of {len} splines")]
    IndexOutOfRange {
        index: usize,
        len: usize
    }
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A curve on the plane parameterised by `t` in [0, 1].
pub trait Parametric: Debug + Send {
    /// Position of the curve at `t`.
    fn point(&self, t: f64) -> Point2<f64>;

    /// Derivative of the curve with respect to `t`.
    ///
    /// Only first and second derivatives are supported, any other order gives
    /// the zero vector.
    fn derivative(&self, t: f64, order: u32) -> Vector2<f64>;

    /// Cached total arc length of the curve in meters.
    fn length(&self) -> f64;

    /// Build a new curve which starts at `pose` with the given velocity and
    /// acceleration and rejoins this curve.
    ///
    /// `search_steps` is the number of seeds used to find where the new curve
    /// should rejoin, curves which only have one possible rejoin point ignore
    /// it.
    fn new_path(
        &self,
        pose: &Pose2D,
        velocity: Vector2<f64>,
        acceleration: Vector2<f64>,
        search_steps: usize
    ) -> Box<dyn Parametric>;

    /// Heading of the curve (direction of the first derivative) at `t`.
    fn heading(&self, t: f64) -> Angle {
        Angle::from_vector(&self.derivative(t, 1))
    }

    fn pose(&self, t: f64) -> Pose2D {
        Pose2D::from_point_and_angle(self.point(t), self.heading(t))
    }

    /// Signed curvature at `t`, positive when turning anticlockwise.
    fn curvature(&self, t: f64) -> f64 {
        let d1 = self.derivative(t, 1);
        let d2 = self.derivative(t, 2);

        let speed_sq = d1.norm_squared();

        // Stationary point, curvature is undefined
        if speed_sq == 0.0 {
            return 0.0
        }

        (d1[0] * d2[1] - d2[0] * d1[1]) / speed_sq.powf(1.5)
    }

    /// Arc length between `start` and `end` using Gauss-Legendre quadrature of
    /// the given order.
    fn quadrature_length(&self, start: f64, end: f64, order: usize) -> f64 {
        quadrature::integrate(start, end, order, |t| self.derivative(t, 1).norm())
    }

    /// Brute force arc length between `start` and `end`, summing the lengths of
    /// `steps` straight segments.
    fn raw_length(&self, start: f64, end: f64, steps: usize) -> f64 {
        if steps == 0 {
            return 0.0
        }

        let step_size = (end - start) / steps as f64;

        (0..steps)
            .map(|i| {
                let t = start + i as f64 * step_size;
                (self.point(t + step_size) - self.point(t)).norm()
            })
            .sum()
    }

    /// Search for the point on the curve closest to `point_m`.
    ///
    /// Newton's method is run on the squared distance function from `steps + 1`
    /// evenly spaced seeds, with exactly `iterations` iterations per seed. The
    /// seed giving the smallest distance wins.
    fn closest_point_search(
        &self,
        point_m: &Point2<f64>,
        steps: usize,
        iterations: usize
    ) -> ClosestPoint {
        let steps = steps.max(1);

        let mut best = ClosestPoint {
            t: 0.0,
            distance_sq_m2: f64::INFINITY
        };

        for i in 0..=steps {
            let mut t = i as f64 / steps as f64;

            for _ in 0..iterations {
                let (d1, d2) = distance_sq_derivatives(self, t, point_m);

                // Flat distance function, no useful step to take
                if d2.abs() < NEWTON_EPSILON {
                    trace!("Newton refinement stopped at t = {} (D'' = {})", t, d2);
                    break
                }

                let step = d1 / d2;
                if !step.is_finite() {
                    break
                }

                t -= step;
            }

            let distance_sq_m2 = (self.point(t) - point_m).norm_squared();

            if distance_sq_m2 < best.distance_sq_m2 {
                best = ClosestPoint { t, distance_sq_m2 };
            }
        }

        best.t = clamp(best.t, 0.0, 1.0);
        best
    }

    /// Parameter of the point on the curve closest to `point_m`.
    fn closest_point(&self, point_m: &Point2<f64>, steps: usize, iterations: usize) -> f64 {
        self.closest_point_search(point_m, steps, iterations).t
    }

    /// Find the parameter at which the arc length from the start of the curve
    /// equals `length_m`.
    fn t_from_length(&self, length_m: f64) -> f64 {
        let total_m = self.length();

        if total_m <= 0.0 {
            return 0.0
        }

        let mut t = length_m / total_m;

        for _ in 0..T_FROM_LENGTH_ITERATIONS {
            let speed = self.derivative(t, 1).norm();

            if speed > 0.0 {
                t -= (self.quadrature_length(0.0, t, PROFILE_ORDER) - length_m) / speed;
                t = clamp(t, 0.0, 1.0);
            }
        }

        clamp(t, 0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// First and second derivatives of the squared distance between the curve at
/// `t` and a point.
fn distance_sq_derivatives<C>(curve: &C, t: f64, point_m: &Point2<f64>) -> (f64, f64)
where
    C: Parametric + ?Sized
{
    let p = curve.point(t);
    let d1 = curve.derivative(t, 1);
    let d2 = curve.derivative(t, 2);

    let dx = p[0] - point_m[0];
    let dy = p[1] - point_m[1];

    (
        2.0 * (dx * d1[0] + dy * d1[1]),
        2.0 * (d1[0] * d1[0] + dx * d2[0] + d1[1] * d1[1] + dy * d2[1])
    )
}
