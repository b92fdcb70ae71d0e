//! Velocity limit calculations

/// Maximum velocity from which the robot can still slow to `end_vel_ms` within
/// `distance_m`, from `vf^2 = vi^2 + 2ad`.
///
/// Returns zero if there is no distance left.
pub fn max_vel_from_distance(distance_m: f64, end_vel_ms: f64, max_decel_mss: f64) -> f64 {
    if distance_m > 0.0 {
        (end_vel_ms * end_vel_ms + 2.0 * max_decel_mss * distance_m).sqrt()
    }
    else {
        0.0
    }
}

/// Maximum linear velocity on a turn of the given radius so that the angular
/// velocity stays within `max_ang_vel_rads`.
///
/// There is no limit if the angular velocity is unbounded.
pub fn max_vel_from_radius(radius_m: f64, max_ang_vel_rads: Option<f64>) -> f64 {
    match max_ang_vel_rads {
        Some(w) => (radius_m * w).abs(),
        None => f64::INFINITY
    }
}

/// Distance needed to slow from `vel_ms` to `end_vel_ms` at the maximum
/// deceleration.
pub fn distance_to_slowdown(vel_ms: f64, end_vel_ms: f64, max_decel_mss: f64) -> f64 {
    (vel_ms * vel_ms - end_vel_ms * end_vel_ms) / (2.0 * max_decel_mss)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_max_vel_from_distance() {
        assert_eq!(max_vel_from_distance(0.0, 1.0, 2.0), 0.0);
        assert_eq!(max_vel_from_distance(-1.0, 1.0, 2.0), 0.0);
        assert!((max_vel_from_distance(2.0, 0.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((max_vel_from_distance(1.5, 1.0, 1.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_vel_from_radius() {
        assert!(max_vel_from_radius(2.0, None).is_infinite());
        assert_eq!(max_vel_from_radius(-2.0, Some(1.5)), 3.0);
        assert!(max_vel_from_radius(f64::INFINITY, Some(1.5)).is_infinite());
    }

    #[test]
    fn test_distance_to_slowdown() {
        // Inverse of max_vel_from_distance
        let d = distance_to_slowdown(3.0, 1.0, 2.0);
        assert!((d - 2.0).abs() < 1e-12);
        assert!((max_vel_from_distance(d, 1.0, 2.0) - 3.0).abs() < 1e-12);
    }
}
