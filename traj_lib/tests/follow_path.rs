//! Closed loop tests driving a simulated differential drive robot along a
//! spline group using the parameters shipped in `params/`.

use color_eyre::{eyre::eyre, Result};
use traj_lib::{
    curve::{QuinticHermiteSpline, QuinticHermiteSplineGroup},
    geom::Pose2D,
    loco_ctrl::DiffDriveState,
    profile::{self, Path, StatusReport},
    traj_ctrl::{self, ControllerParams}
};
use util::logger::{logger_init, LevelFilter};

const PROFILE_PARAMS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../params/profile.toml");
const TRAJ_CTRL_PARAMS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../params/traj_ctrl.toml");

const DT_S: f64 = 0.1;
const MAX_CYCLES: usize = 1000;
const FINISH_THRESHOLD_M: f64 = 0.1;

fn build_curve() -> Result<QuinticHermiteSplineGroup> {
    let group = QuinticHermiteSplineGroup::from_splines(vec![
        QuinticHermiteSpline::from_poses(Pose2D::new(0.0, 0.0, 0.0), Pose2D::new(4.0, 1.0, 0.4)),
        QuinticHermiteSpline::from_poses(Pose2D::new(4.0, 1.0, 0.4), Pose2D::new(8.0, 0.0, -0.4))
    ])?;

    Ok(group)
}

fn step(pose: &Pose2D, drive: &DiffDriveState) -> Pose2D {
    let mut next = *pose;
    next.position_m += pose.forward() * drive.linear_vel_ms * DT_S;
    next.heading.add(drive.angular_vel_rads * DT_S);
    next
}

/// Drive the robot from `start` until the path reports it is finished,
/// checking the profile limits on every cycle.
fn follow(start: Pose2D, controller: Option<ControllerParams>) -> Result<(Pose2D, Vec<StatusReport>)> {
    // Tests share one process so only the first call installs the logger
    logger_init(LevelFilter::Info, None).ok();

    let profile_params = profile::Params::load_file(PROFILE_PARAMS)?;
    let mut ctrl_params = traj_ctrl::Params::load_file(TRAJ_CTRL_PARAMS)?;

    if let Some(c) = controller {
        ctrl_params.controller = c;
        ctrl_params.validate()?;
    }

    let mut path = Path::try_new(build_curve()?, profile_params)?;
    let mut pose = start;
    let mut prev_vel_ms = profile_params.start_vel_ms;
    let mut reports = Vec::new();

    let max_dv = profile_params.max_accel_mss.max(profile_params.max_decel_mss) * DT_S + 1e-9;

    for _ in 0..MAX_CYCLES {
        if path.is_finished(&pose, FINISH_THRESHOLD_M) {
            return Ok((pose, reports))
        }

        let (drive, report) = path.update(&pose, DT_S, &ctrl_params);

        if report.linear_vel_ms > profile_params.max_vel_ms + 1e-9 {
            return Err(eyre!("Velocity limit exceeded: {:?}", report))
        }
        if (report.linear_vel_ms - prev_vel_ms).abs() > max_dv {
            return Err(eyre!(
                "Velocity changed by more than the acceleration limit allows: {} -> {}",
                prev_vel_ms,
                report.linear_vel_ms
            ))
        }

        prev_vel_ms = report.linear_vel_ms;
        reports.push(report);
        pose = step(&pose, &drive);
    }

    Err(eyre!("Path not finished after {} cycles, robot at {:?}", MAX_CYCLES, pose))
}

#[test]
fn test_pure_pursuit() -> Result<()> {
    let (pose, reports) = follow(Pose2D::default(), None)?;

    assert!((pose.x() - 8.0).abs() < 0.5);
    assert!(pose.y().abs() < 0.5);
    assert!(reports.iter().all(|r| r.lookahead_point_m.is_some()));
    assert!(reports.iter().all(|r| !r.replanned));

    // Reports are monitoring output, make sure they serialise
    let json = serde_json::to_string(&reports)?;
    assert!(json.contains("limiting_constraint"));

    Ok(())
}

#[test]
fn test_ramsete() -> Result<()> {
    let (pose, reports) = follow(
        Pose2D::default(),
        Some(ControllerParams::Ramsete { b: 2.0, zeta: 0.7 })
    )?;

    assert!((pose.x() - 8.0).abs() < 0.5);
    assert!(reports.iter().all(|r| r.ramsete.is_some()));

    Ok(())
}

#[test]
fn test_replan_from_offset_start() -> Result<()> {
    for controller in [
        None,
        Some(ControllerParams::Ramsete { b: 2.0, zeta: 0.7 })
    ].iter() {
        let (pose, reports) = follow(Pose2D::new(0.0, 0.8, 0.0), *controller)?;

        assert!(reports[0].replanned);
        assert!((pose.x() - 8.0).abs() < 0.5);
    }

    Ok(())
}
