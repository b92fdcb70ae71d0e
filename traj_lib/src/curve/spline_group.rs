//! Groups of quintic Hermite splines joined end to end

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::debug;
use nalgebra::{Point2, Vector2};
use serde::Serialize;
use util::maths::clamp;

use super::{ClosestPoint, CurveError, Parametric, QuinticHermiteSpline, REPLAN_SEARCH_ITERATIONS};
use crate::geom::Pose2D;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A chain of splines forming a single curve.
///
/// Each of the `n` splines owns an equal `1/n` share of the group's parameter,
/// so spline `i` covers `t` in `[i/n, (i+1)/n]`. The group always contains at
/// least one spline.
#[derive(Debug, Clone, Serialize)]
pub struct QuinticHermiteSplineGroup {
    splines: Vec<QuinticHermiteSpline>,

    /// Sum of the lengths of all splines
    length_m: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl QuinticHermiteSplineGroup {
    /// Create a new group containing a single spline.
    pub fn new(initial: QuinticHermiteSpline) -> Self {
        let length_m = initial.length();

        Self {
            splines: vec![initial],
            length_m
        }
    }

    /// Create a group from a list of splines.
    pub fn from_splines(splines: Vec<QuinticHermiteSpline>) -> Result<Self, CurveError> {
        if splines.is_empty() {
            return Err(CurveError::EmptyGroup)
        }

        let mut group = Self {
            splines,
            length_m: 0.0
        };
        group.update_length();

        Ok(group)
    }

    /// Add a spline to the end of the group.
    pub fn add_spline(&mut self, spline: QuinticHermiteSpline) {
        self.splines.push(spline);
        self.update_length();
    }

    /// Insert a spline at the given index, shifting all later splines back.
    pub fn insert_spline(
        &mut self,
        index: usize,
        spline: QuinticHermiteSpline
    ) -> Result<(), CurveError> {
        if index > self.splines.len() {
            return Err(CurveError::IndexOutOfRange {
                index,
                len: self.splines.len()
            })
        }

        self.splines.insert(index, spline);
        self.update_length();

        Ok(())
    }

    /// Remove the spline at the given index.
    ///
    /// The last spline in a group cannot be removed.
    pub fn remove_spline(&mut self, index: usize) -> Result<QuinticHermiteSpline, CurveError> {
        if index >= self.splines.len() {
            return Err(CurveError::IndexOutOfRange {
                index,
                len: self.splines.len()
            })
        }
        if self.splines.len() == 1 {
            return Err(CurveError::EmptyGroup)
        }

        let spline = self.splines.remove(index);
        self.update_length();

        Ok(spline)
    }

    pub fn spline(&self, index: usize) -> Option<&QuinticHermiteSpline> {
        self.splines.get(index)
    }

    pub fn splines(&self) -> &[QuinticHermiteSpline] {
        &self.splines
    }

    pub fn num_splines(&self) -> usize {
        self.splines.len()
    }

    /// Index of the spline owning the group parameter `t`.
    pub fn spline_index(&self, t: f64) -> usize {
        let n = self.splines.len();

        if t < 0.0 {
            0
        }
        else if t >= 1.0 {
            n - 1
        }
        else {
            ((t * n as f64).floor() as usize).min(n - 1)
        }
    }

    /// Convert the group parameter `t` into the parameter of the spline at
    /// `index`.
    ///
    /// Parameters outside of [0, 1] are extrapolated linearly onto the first or
    /// last spline.
    pub fn local_t(&self, t: f64, index: usize) -> f64 {
        let n = self.splines.len() as f64;

        if t < 0.0 {
            t * n
        }
        else if t >= 1.0 {
            1.0 + (t - 1.0) * n
        }
        else {
            (t - index as f64 / n) * n
        }
    }

    /// Index of the spline closest to the given point.
    pub fn segment_index_from_point(&self, point_m: &Point2<f64>, steps: usize) -> usize {
        self.spline_index(self.closest_point(point_m, steps, REPLAN_SEARCH_ITERATIONS))
    }

    fn update_length(&mut self) {
        self.length_m = self.splines.iter().map(|s| s.length()).sum();
    }

    /// Spline owning `t` and the local parameter on it.
    fn locate(&self, t: f64) -> (&QuinticHermiteSpline, f64) {
        let index = self.spline_index(t);
        (&self.splines[index], self.local_t(t, index))
    }

    /// Convert a local parameter on the spline at `index` into a group parameter.
    fn global_t(&self, index: usize, local_t: f64) -> f64 {
        (index as f64 + local_t) / self.splines.len() as f64
    }
}

impl Parametric for QuinticHermiteSplineGroup {
    fn point(&self, t: f64) -> Point2<f64> {
        let (spline, u) = self.locate(t);
        spline.point(u)
    }

    fn derivative(&self, t: f64, order: u32) -> Vector2<f64> {
        let (spline, u) = self.locate(t);
        spline.derivative(u, order)
    }

    fn length(&self) -> f64 {
        self.length_m
    }

    fn quadrature_length(&self, start: f64, end: f64, order: usize) -> f64 {
        if end < start {
            return -self.quadrature_length(end, start, order)
        }

        let start_index = self.spline_index(start);
        let end_index = self.spline_index(end);
        let start_u = self.local_t(start, start_index);
        let end_u = self.local_t(end, end_index);

        if start_index == end_index {
            return self.splines[start_index].quadrature_length(start_u, end_u, order)
        }

        // Partial first and last splines plus the full length of those between
        self.splines[start_index].quadrature_length(start_u, 1.0, order)
            + self.splines[start_index + 1..end_index]
                .iter()
                .map(|s| s.length())
                .sum::<f64>()
            + self.splines[end_index].quadrature_length(0.0, end_u, order)
    }

    fn closest_point_search(
        &self,
        point_m: &Point2<f64>,
        steps: usize,
        iterations: usize
    ) -> ClosestPoint {
        let mut best = ClosestPoint {
            t: 0.0,
            distance_sq_m2: f64::INFINITY
        };

        for (i, spline) in self.splines.iter().enumerate() {
            let local = spline.closest_point_search(point_m, steps, iterations);

            if local.distance_sq_m2 < best.distance_sq_m2 {
                best = ClosestPoint {
                    t: self.global_t(i, local.t),
                    distance_sq_m2: local.distance_sq_m2
                };
            }
        }

        best.t = clamp(best.t, 0.0, 1.0);
        best
    }

    fn t_from_length(&self, length_m: f64) -> f64 {
        let last = self.splines.len() - 1;
        let mut start_m = 0.0;

        for (i, spline) in self.splines.iter().enumerate() {
            if i == last || length_m < start_m + spline.length() {
                return self.global_t(i, spline.t_from_length(length_m - start_m))
            }

            start_m += spline.length();
        }

        1.0
    }

    /// Replan from the given state.
    ///
    /// The spline closest to the pose is replaced by one running from the pose
    /// to that spline's end, splines already passed are dropped and those
    /// still ahead are kept.
    fn new_path(
        &self,
        pose: &Pose2D,
        velocity: Vector2<f64>,
        acceleration: Vector2<f64>,
        search_steps: usize
    ) -> Box<dyn Parametric> {
        let index = self.segment_index_from_point(&pose.position_m, search_steps);

        let mut splines = Vec::with_capacity(self.splines.len() - index);
        splines.push(self.splines[index].rejoin(pose, velocity, acceleration));
        splines.extend(self.splines[index + 1..].iter().cloned());

        debug!(
            "Replanned spline group from segment {} of {}, {} segments remain",
            index,
            self.splines.len(),
            splines.len()
        );

        let mut group = Self {
            splines,
            length_m: 0.0
        };
        group.update_length();

        Box::new(group)
    }
}
