//! Quintic Hermite splines

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::{Point2, Vector2};
use serde::Serialize;
use util::maths::poly_val;

use super::{Parametric, LENGTH_ORDER};
use crate::geom::Pose2D;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Position basis functions, highest power first, weighting in order
/// `p0, v0, a0, a1, v1, p1`.
const BASIS: [[f64; 6]; 6] = [
    [-6.0, 15.0, -10.0, 0.0, 0.0, 1.0],
    [-3.0, 8.0, -6.0, 0.0, 1.0, 0.0],
    [-0.5, 1.5, -1.5, 0.5, 0.0, 0.0],
    [0.5, -1.0, 0.5, 0.0, 0.0, 0.0],
    [-3.0, 7.0, -4.0, 0.0, 0.0, 0.0],
    [6.0, -15.0, 10.0, 0.0, 0.0, 0.0]
];

/// First derivative of the basis functions.
const BASIS_D1: [[f64; 5]; 6] = [
    [-30.0, 60.0, -30.0, 0.0, 0.0],
    [-15.0, 32.0, -18.0, 0.0, 1.0],
    [-2.5, 6.0, -4.5, 1.0, 0.0],
    [2.5, -4.0, 1.5, 0.0, 0.0],
    [-15.0, 28.0, -12.0, 0.0, 0.0],
    [30.0, -60.0, 30.0, 0.0, 0.0]
];

/// Second derivative of the basis functions.
const BASIS_D2: [[f64; 4]; 6] = [
    [-120.0, 180.0, -60.0, 0.0],
    [-60.0, 96.0, -36.0, 0.0],
    [-10.0, 18.0, -9.0, 1.0],
    [10.0, -12.0, 3.0, 0.0],
    [-60.0, 84.0, -24.0, 0.0],
    [120.0, -180.0, 60.0, 0.0]
];

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A quintic Hermite spline, defined by the pose, velocity and acceleration at
/// each end.
///
/// The heading of the end poses is only used by the convenience constructors,
/// the shape of the spline comes entirely from the positions, velocities and
/// accelerations.
#[derive(Debug, Clone, Serialize)]
pub struct QuinticHermiteSpline {
    pose0: Pose2D,
    pose1: Pose2D,
    velocity0: Vector2<f64>,
    velocity1: Vector2<f64>,
    acceleration0: Vector2<f64>,
    acceleration1: Vector2<f64>,

    /// Cached arc length, recomputed whenever the boundary conditions change
    length_m: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl QuinticHermiteSpline {
    /// Create a spline from all six boundary conditions.
    pub fn new(
        pose0: Pose2D,
        pose1: Pose2D,
        velocity0: Vector2<f64>,
        velocity1: Vector2<f64>,
        acceleration0: Vector2<f64>,
        acceleration1: Vector2<f64>
    ) -> Self {
        let mut spline = Self {
            pose0,
            pose1,
            velocity0,
            velocity1,
            acceleration0,
            acceleration1,
            length_m: 0.0
        };

        spline.update_length();

        spline
    }

    /// Create a spline from two poses and the velocities at each end, with
    /// zero acceleration.
    pub fn from_poses_and_velocities(
        pose0: Pose2D,
        pose1: Pose2D,
        velocity0: Vector2<f64>,
        velocity1: Vector2<f64>
    ) -> Self {
        Self::new(pose0, pose1, velocity0, velocity1, Vector2::zeros(), Vector2::zeros())
    }

    /// Create a spline between two poses.
    ///
    /// The velocity at each end points along the pose heading with a magnitude
    /// of the distance between the poses.
    pub fn from_poses(pose0: Pose2D, pose1: Pose2D) -> Self {
        let chord_m = pose0.distance(&pose1);

        Self::from_poses_and_velocities(
            pose0,
            pose1,
            pose0.heading.to_vector(chord_m),
            pose1.heading.to_vector(chord_m)
        )
    }

    /// Create a spline between two poses with the given curvature at each end.
    ///
    /// Velocities are as for [`QuinticHermiteSpline::from_poses`], the
    /// accelerations point along each heading with a magnitude of
    /// `curvature * chord^2`.
    pub fn from_poses_and_curvatures(
        pose0: Pose2D,
        pose1: Pose2D,
        curvature0_m: f64,
        curvature1_m: f64
    ) -> Self {
        let chord_m = pose0.distance(&pose1);

        Self::new(
            pose0,
            pose1,
            pose0.heading.to_vector(chord_m),
            pose1.heading.to_vector(chord_m),
            pose0.heading.to_vector(curvature0_m * chord_m * chord_m),
            pose1.heading.to_vector(curvature1_m * chord_m * chord_m)
        )
    }

    pub fn pose0(&self) -> Pose2D {
        self.pose0
    }

    pub fn pose1(&self) -> Pose2D {
        self.pose1
    }

    pub fn velocity0(&self) -> Vector2<f64> {
        self.velocity0
    }

    pub fn velocity1(&self) -> Vector2<f64> {
        self.velocity1
    }

    pub fn acceleration0(&self) -> Vector2<f64> {
        self.acceleration0
    }

    pub fn acceleration1(&self) -> Vector2<f64> {
        self.acceleration1
    }

    pub fn set_pose0(&mut self, pose: Pose2D) {
        self.pose0 = pose;
        self.update_length();
    }

    pub fn set_pose1(&mut self, pose: Pose2D) {
        self.pose1 = pose;
        self.update_length();
    }

    pub fn set_velocity0(&mut self, velocity: Vector2<f64>) {
        self.velocity0 = velocity;
        self.update_length();
    }

    pub fn set_velocity1(&mut self, velocity: Vector2<f64>) {
        self.velocity1 = velocity;
        self.update_length();
    }

    pub fn set_acceleration0(&mut self, acceleration: Vector2<f64>) {
        self.acceleration0 = acceleration;
        self.update_length();
    }

    pub fn set_acceleration1(&mut self, acceleration: Vector2<f64>) {
        self.acceleration1 = acceleration;
        self.update_length();
    }

    /// Build a spline from a new start state to this spline's end.
    pub fn rejoin(
        &self,
        pose: &Pose2D,
        velocity: Vector2<f64>,
        acceleration: Vector2<f64>
    ) -> Self {
        Self::new(
            *pose,
            self.pose1,
            velocity,
            self.velocity1,
            acceleration,
            self.acceleration1
        )
    }

    fn update_length(&mut self) {
        self.length_m = self.quadrature_length(0.0, 1.0, LENGTH_ORDER);
    }

    /// Combine the boundary conditions using the basis function values.
    fn weighted_sum(&self, h: [f64; 6]) -> Vector2<f64> {
        self.pose0.position_m.coords * h[0]
            + self.velocity0 * h[1]
            + self.acceleration0 * h[2]
            + self.acceleration1 * h[3]
            + self.velocity1 * h[4]
            + self.pose1.position_m.coords * h[5]
    }
}

impl Parametric for QuinticHermiteSpline {
    fn point(&self, t: f64) -> Point2<f64> {
        if t < 0.0 {
            return self.pose0.position_m
        }
        if t > 1.0 {
            return self.pose1.position_m
        }

        Point2::from(self.weighted_sum(basis_values(t, &BASIS)))
    }

    fn derivative(&self, t: f64, order: u32) -> Vector2<f64> {
        let h = match order {
            1 => basis_values(t, &BASIS_D1),
            2 => basis_values(t, &BASIS_D2),
            _ => return Vector2::zeros()
        };

        self.weighted_sum(h)
    }

    fn length(&self) -> f64 {
        self.length_m
    }

    fn new_path(
        &self,
        pose: &Pose2D,
        velocity: Vector2<f64>,
        acceleration: Vector2<f64>,
        _search_steps: usize
    ) -> Box<dyn Parametric> {
        Box::new(self.rejoin(pose, velocity, acceleration))
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Evaluate each of the six basis polynomials in `table` at `t`.
fn basis_values<const N: usize>(t: f64, table: &[[f64; N]; 6]) -> [f64; 6] {
    let mut h = [0.0; 6];

    for (hi, coeffs) in h.iter_mut().zip(table.iter()) {
        *hi = poly_val(t, coeffs);
    }

    h
}
