//! Motion profile state

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace};
use nalgebra::Point2;
use serde::Serialize;

// Internal
use super::{limits::*, Params, ProfileError};
use crate::{
    curve::{Parametric, PROFILE_ORDER},
    geom::{Circle, Orientation, Pose2D},
    loco_ctrl::DiffDriveState,
    traj_ctrl::{self, ControllerParams, RamseteDiagnostics}
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A curve together with a motion profile along it.
///
/// The curve may be replaced during [`Path::update`] if the robot strays too
/// far from it, the constraints never change.
#[derive(Debug)]
pub struct Path {
    curve: Box<dyn Parametric>,

    params: Params,

    /// Velocity demanded on the previous cycle
    prev_vel_ms: f64,

    /// Arc length from the start of the curve to the closest point
    dist_traveled_m: f64,

    /// Parameter of the closest point on the curve
    closest_t: f64,

    /// Remaining distance to the end of the curve, less the end threshold
    dist_to_end_m: f64,

    /// Previewed velocity limits further along the curve
    preview: Vec<PreviewEntry>
}

/// A velocity limit at a point further along the curve.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PreviewEntry {
    /// Maximum velocity at the previewed point
    pub max_vel_ms: f64,

    /// Arc length from the start of the curve to the previewed point
    pub dist_m: f64
}

/// The status report containing the monitoring quantities of a single
/// profile cycle.
#[derive(Debug, Default, Copy, Clone, Serialize)]
pub struct StatusReport {
    /// Parameter of the closest point on the curve
    pub closest_t: f64,

    /// Arc length from the start of the curve to the closest point
    pub dist_traveled_m: f64,

    /// Remaining distance used for the end of path limit
    pub dist_to_end_m: f64,

    /// Distance between the robot and the closest point on the curve
    pub cross_track_error_m: f64,

    /// Profiled linear velocity
    pub linear_vel_ms: f64,

    /// Change in profiled velocity over the cycle
    pub accel_mss: f64,

    /// The limit which set the velocity this cycle
    pub limiting_constraint: LimitingConstraint,

    /// Radius of the tracking target (tangent circle for pure pursuit, curve
    /// radius for Ramsete)
    pub target_radius_m: f64,

    /// Pure pursuit lookahead point
    pub lookahead_point_m: Option<Point2<f64>>,

    /// Ramsete intermediate values
    pub ramsete: Option<RamseteDiagnostics>,

    /// True if the curve was replanned this cycle
    pub replanned: bool,

    /// Number of previewed velocity limits still ahead of the robot
    pub num_preview_entries: usize
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Which constraint set the profiled velocity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum LimitingConstraint {
    /// Accelerating at the maximum rate
    Acceleration,

    /// Cruising at the maximum velocity
    MaxVelocity,

    /// Slowing for a tighter section of curve ahead
    Preview,

    /// Limited by the maximum angular velocity on the current target
    AngularVelocity,

    /// Slowing for the end of the curve
    EndOfPath,

    /// Slowing at the maximum deceleration
    Deceleration
}

/// The point the robot is steering towards this cycle.
enum TrackingTarget {
    PurePursuit {
        radius_m: f64,
        orientation: Orientation
    },
    Ramsete {
        desired: Pose2D,
        curvature_m: f64,
        b: f64,
        zeta: f64
    }
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for LimitingConstraint {
    fn default() -> Self {
        LimitingConstraint::Acceleration
    }
}

impl PreviewEntry {
    /// Returns true if this entry limits the velocity at least as much as
    /// `other` everywhere before `other`, and stays in the queue for longer.
    ///
    /// Both limits follow `v^2 = max_vel^2 + 2a(dist - x)`, so comparing the
    /// constant terms is enough.
    fn covers(&self, other: &PreviewEntry, max_decel_mss: f64) -> bool {
        self.dist_m >= other.dist_m
            && self.braking_term(max_decel_mss) <= other.braking_term(max_decel_mss)
    }

    fn braking_term(&self, max_decel_mss: f64) -> f64 {
        self.max_vel_ms * self.max_vel_ms + 2.0 * max_decel_mss * self.dist_m
    }
}

impl TrackingTarget {
    fn radius_m(&self) -> f64 {
        match self {
            TrackingTarget::PurePursuit { radius_m, .. } => *radius_m,
            TrackingTarget::Ramsete { curvature_m, .. } => 1.0 / curvature_m
        }
    }
}

impl Path {
    /// Create a new profiled path along the given curve.
    ///
    /// The constraints are not checked, use [`Path::try_new`] to validate them.
    pub fn new<C>(curve: C, params: Params) -> Self
    where
        C: Parametric + 'static
    {
        Self::from_boxed(Box::new(curve), params)
    }

    /// Create a new profiled path after validating the constraints.
    pub fn try_new<C>(curve: C, params: Params) -> Result<Self, ProfileError>
    where
        C: Parametric + 'static
    {
        params.validate()?;
        Ok(Self::new(curve, params))
    }

    /// Create a new profiled path from an already boxed curve.
    pub fn from_boxed(curve: Box<dyn Parametric>, params: Params) -> Self {
        let dist_to_end_m = curve.length();

        Self {
            curve,
            params,
            prev_vel_ms: params.start_vel_ms,
            dist_traveled_m: 0.0,
            closest_t: 0.0,
            dist_to_end_m,
            preview: Vec::new()
        }
    }

    /// Run one cycle of the profile.
    ///
    /// Returns the wheel demands needed to follow the curve from `pose`, and a
    /// report of the values computed on the way. `dt_s` is the time since the
    /// previous call.
    pub fn update(
        &mut self,
        pose: &Pose2D,
        dt_s: f64,
        params: &traj_ctrl::Params
    ) -> (DiffDriveState, StatusReport) {
        let mut report = StatusReport::default();

        // ---- CLOSEST POINT ----

        self.closest_t = self.curve.closest_point(
            &pose.position_m,
            params.newton_steps,
            params.newton_iterations
        );
        self.dist_traveled_m = self.curve.quadrature_length(0.0, self.closest_t, PROFILE_ORDER);

        let cross_track_error_m = (self.curve.point(self.closest_t) - pose.position_m).norm();

        report.closest_t = self.closest_t;
        report.dist_traveled_m = self.dist_traveled_m;
        report.cross_track_error_m = cross_track_error_m;

        // ---- TRACKING TARGET ----

        let target = match params.controller {
            ControllerParams::PurePursuit { lookahead_m } => {
                let point_m = self.lookahead_point(self.dist_traveled_m, lookahead_m);
                let circle = Circle::from_pose_and_point(pose, &point_m);

                report.lookahead_point_m = Some(point_m);

                TrackingTarget::PurePursuit {
                    radius_m: circle.radius_m,
                    orientation: Circle::orientation_of_pose_and_point(pose, &point_m)
                }
            },
            ControllerParams::Ramsete { b, zeta } => TrackingTarget::Ramsete {
                desired: self.curve.pose(self.closest_t),
                curvature_m: self.curve.curvature(self.closest_t),
                b,
                zeta
            }
        };

        let target_radius_m = target.radius_m();
        report.target_radius_m = target_radius_m;

        // ---- VELOCITY ----

        let prev_vel_ms = self.prev_vel_ms;
        let (vel_ms, limit) = self.profile_velocity(prev_vel_ms, target_radius_m, dt_s, params);

        let accel_mss = if dt_s > 0.0 {
            (vel_ms - prev_vel_ms) / dt_s
        }
        else {
            0.0
        };

        self.prev_vel_ms = vel_ms;

        report.linear_vel_ms = vel_ms;
        report.accel_mss = accel_mss;
        report.limiting_constraint = limit;

        // ---- REPLANNING ----

        if cross_track_error_m > params.adjust_threshold_m {
            self.replan(pose, vel_ms, accel_mss, params.newton_steps);
            report.replanned = true;
        }

        report.dist_to_end_m = self.dist_to_end_m;
        report.num_preview_entries = self.preview.len();

        // ---- COMMAND ----

        let drive = match target {
            TrackingTarget::PurePursuit { radius_m, orientation } => traj_ctrl::pure_pursuit(
                radius_m,
                vel_ms,
                orientation,
                params.track_width_m
            ),
            TrackingTarget::Ramsete { desired, curvature_m, b, zeta } => {
                let (drive, diag) = traj_ctrl::ramsete(
                    pose,
                    &desired,
                    vel_ms,
                    self.angular_velocity_from_curvature(curvature_m, vel_ms),
                    b,
                    zeta,
                    params.track_width_m
                );
                report.ramsete = Some(diag);
                drive
            }
        };

        trace!(
            "Profile: t = {:.4}, travelled = {:.3} m, to end = {:.3} m, v = {:.3} m/s ({:?})",
            report.closest_t,
            report.dist_traveled_m,
            report.dist_to_end_m,
            report.linear_vel_ms,
            report.limiting_constraint
        );

        (drive, report)
    }

    /// Returns true once the robot is within `threshold_m` of the end of the
    /// curve, or there is no distance left to travel.
    pub fn is_finished(&self, pose: &Pose2D, threshold_m: f64) -> bool {
        (self.curve.point(1.0) - pose.position_m).norm() <= threshold_m
            || self.dist_to_end_m <= 0.0
    }

    /// The point `lookahead_m` further along the curve than `dist_traveled_m`.
    ///
    /// Beyond the end of the curve the point continues in a straight line along
    /// the end heading.
    pub fn lookahead_point(&self, dist_traveled_m: f64, lookahead_m: f64) -> Point2<f64> {
        let target_m = dist_traveled_m + lookahead_m;
        let length_m = self.curve.length();

        if target_m > length_m {
            self.curve.point(1.0) + self.curve.heading(1.0).to_vector(target_m - length_m)
        }
        else {
            self.curve.point(self.curve.t_from_length(target_m))
        }
    }

    /// Find the lookahead point for the robot at `pose`, updating the closest
    /// point and distance travelled.
    pub fn lookahead_from_pose(
        &mut self,
        pose: &Pose2D,
        lookahead_m: f64,
        steps: usize,
        iterations: usize
    ) -> Point2<f64> {
        self.closest_t = self.curve.closest_point(&pose.position_m, steps, iterations);
        self.dist_traveled_m = self.curve.quadrature_length(0.0, self.closest_t, PROFILE_ORDER);

        self.lookahead_point(self.dist_traveled_m, lookahead_m)
    }

    /// Distance from the robot to the closest point on the curve, updating the
    /// closest point.
    pub fn distance_from_curve(&mut self, pose: &Pose2D, steps: usize, iterations: usize) -> f64 {
        self.closest_t = self.curve.closest_point(&pose.position_m, steps, iterations);

        (self.curve.point(self.closest_t) - pose.position_m).norm()
    }

    /// Angular velocity needed to follow the curve at `t` with the given linear
    /// velocity.
    pub fn angular_velocity_at(&self, t: f64, linear_vel_ms: f64) -> f64 {
        self.angular_velocity_from_curvature(self.curve.curvature(t), linear_vel_ms)
    }

    /// Radius of curvature of the curve at `t`, infinite on straight sections.
    pub fn radius_at(&self, t: f64) -> f64 {
        1.0 / self.curve.curvature(t)
    }

    /// Maximum velocity allowed by the angular velocity limit at `t`.
    pub fn max_vel_at(&self, t: f64) -> f64 {
        max_vel_from_radius(self.radius_at(t), self.params.max_ang_vel_rads)
    }

    /// Curvature of the curve at the closest point.
    pub fn curvature(&self) -> f64 {
        self.curve.curvature(self.closest_t)
    }

    pub fn curve(&self) -> &dyn Parametric {
        self.curve.as_ref()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn prev_vel_ms(&self) -> f64 {
        self.prev_vel_ms
    }

    pub fn dist_traveled_m(&self) -> f64 {
        self.dist_traveled_m
    }

    pub fn closest_t(&self) -> f64 {
        self.closest_t
    }

    pub fn dist_to_end_m(&self) -> f64 {
        self.dist_to_end_m
    }

    pub fn preview(&self) -> &[PreviewEntry] {
        &self.preview
    }

    /// Apply all velocity limits for this cycle.
    ///
    /// Updates the preview queue and the distance to the end.
    fn profile_velocity(
        &mut self,
        prev_vel_ms: f64,
        target_radius_m: f64,
        dt_s: f64,
        params: &traj_ctrl::Params
    ) -> (f64, LimitingConstraint) {
        let max_decel_mss = self.params.max_decel_mss;
        let mut limit = LimitingConstraint::Acceleration;

        // Acceleration and max velocity
        let mut vel_ms = prev_vel_ms + self.params.max_accel_mss * dt_s;
        if vel_ms > self.params.max_vel_ms {
            vel_ms = self.params.max_vel_ms;
            limit = LimitingConstraint::MaxVelocity;
        }

        // Preview the curvature at the point where the robot could have come to
        // a stop
        let preview_dist_m = self.dist_traveled_m
            + distance_to_slowdown(prev_vel_ms, 0.0, max_decel_mss);
        let entry = PreviewEntry {
            max_vel_ms: self.max_vel_at(self.curve.t_from_length(preview_dist_m)),
            dist_m: preview_dist_m
        };

        // Entries which never bind, or are already covered by one further
        // ahead, would only grow the queue
        if entry.max_vel_ms.is_finite()
            && !self.preview.iter().any(|e| e.covers(&entry, max_decel_mss))
        {
            self.preview.push(entry);
        }

        let dist_traveled_m = self.dist_traveled_m;
        self.preview.retain(|e| e.dist_m > dist_traveled_m);

        let preview_vel_ms = self.preview
            .iter()
            .map(|e| max_vel_from_distance(e.dist_m - dist_traveled_m, e.max_vel_ms, max_decel_mss))
            .fold(f64::INFINITY, f64::min);

        if preview_vel_ms < vel_ms {
            vel_ms = preview_vel_ms;
            limit = LimitingConstraint::Preview;
        }

        // Angular velocity on the current target
        if target_radius_m.is_finite() {
            let target_vel_ms = max_vel_from_radius(target_radius_m, self.params.max_ang_vel_rads);

            if target_vel_ms < vel_ms {
                vel_ms = target_vel_ms;
                limit = LimitingConstraint::AngularVelocity;
            }
        }

        // End of the curve
        self.dist_to_end_m = self.curve.length()
            - dist_traveled_m
            - vel_ms * dt_s
            - params.end_threshold_m;

        let end_vel_ms = max_vel_from_distance(
            self.dist_to_end_m,
            self.params.end_vel_ms,
            max_decel_mss
        );
        if end_vel_ms < vel_ms {
            vel_ms = end_vel_ms;
            limit = LimitingConstraint::EndOfPath;
        }

        // Never slow faster than the maximum deceleration
        let floor_vel_ms = prev_vel_ms - max_decel_mss * dt_s;
        if floor_vel_ms > vel_ms {
            vel_ms = floor_vel_ms;
            limit = LimitingConstraint::Deceleration;
        }

        (vel_ms, limit)
    }

    /// Replace the curve with one starting at the robot's pose.
    fn replan(&mut self, pose: &Pose2D, vel_ms: f64, accel_mss: f64, search_steps: usize) {
        let forward = pose.forward();

        self.curve = self.curve.new_path(pose, forward * vel_ms, forward * accel_mss, search_steps);
        self.dist_to_end_m = self.curve.length();

        // The new curve starts at the robot, so previewed distances are now
        // relative to the current position
        let dist_traveled_m = self.dist_traveled_m;
        for e in self.preview.iter_mut() {
            e.dist_m -= dist_traveled_m;
        }
        self.preview.retain(|e| e.dist_m > 0.0);

        self.dist_traveled_m = 0.0;
        self.closest_t = 0.0;

        debug!(
            "Replanned curve from ({:.3}, {:.3}), new length {:.3} m, {} preview entries kept",
            pose.x(),
            pose.y(),
            self.dist_to_end_m,
            self.preview.len()
        );
    }

    fn angular_velocity_from_curvature(&self, curvature_m: f64, linear_vel_ms: f64) -> f64 {
        linear_vel_ms * curvature_m
    }
}
