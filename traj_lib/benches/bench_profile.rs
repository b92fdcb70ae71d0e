//! # Motion Profile Benchmark

use criterion::{criterion_group, criterion_main, Criterion};

use nalgebra::Point2;
use traj_lib::{
    curve::{Parametric, QuinticHermiteSpline, QuinticHermiteSplineGroup, PROFILE_ORDER},
    geom::Pose2D,
    profile::{self, Path},
    traj_ctrl::{self, ControllerParams}
};

fn profile_benchmark(c: &mut Criterion) {
    // ---- Build a test curve ----

    let group = QuinticHermiteSplineGroup::from_splines(vec![
        QuinticHermiteSpline::from_poses(Pose2D::new(0.0, 0.0, 0.0), Pose2D::new(4.0, 1.0, 0.4)),
        QuinticHermiteSpline::from_poses(Pose2D::new(4.0, 1.0, 0.4), Pose2D::new(8.0, 0.0, -0.4)),
        QuinticHermiteSpline::from_poses(Pose2D::new(8.0, 0.0, -0.4), Pose2D::new(12.0, -2.0, 0.0))
    ])
    .unwrap();

    let ctrl_params = traj_ctrl::Params {
        end_threshold_m: 0.05,
        adjust_threshold_m: 0.5,
        newton_steps: 10,
        newton_iterations: 5,
        track_width_m: 0.5,
        controller: ControllerParams::PurePursuit { lookahead_m: 0.4 }
    };

    let query = Point2::new(5.0, 1.5);

    // ---- Curve queries ----

    c.bench_function("Parametric::closest_point", |b| {
        b.iter(|| group.closest_point(&query, ctrl_params.newton_steps, ctrl_params.newton_iterations))
    });

    c.bench_function("Parametric::quadrature_length", |b| {
        b.iter(|| group.quadrature_length(0.0, 0.7, PROFILE_ORDER))
    });

    c.bench_function("Parametric::t_from_length", |b| b.iter(|| group.t_from_length(6.0)));

    // ---- Full profile cycle ----

    let pose = Pose2D::new(5.0, 1.1, 0.2);

    let mut pure_pursuit = Path::new(group.clone(), profile::Params::symmetric(0.5, 1.0));
    c.bench_function("Path::update::pure_pursuit", |b| {
        b.iter(|| pure_pursuit.update(&pose, 0.1, &ctrl_params))
    });

    let ramsete_params = traj_ctrl::Params {
        controller: ControllerParams::Ramsete { b: 2.0, zeta: 0.7 },
        ..ctrl_params.clone()
    };
    let mut ramsete = Path::new(group, profile::Params::symmetric(0.5, 1.0));
    c.bench_function("Path::update::ramsete", |b| {
        b.iter(|| ramsete.update(&pose, 0.1, &ramsete_params))
    });
}

criterion_group!(benches, profile_benchmark);
criterion_main!(benches);
