//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Apply polynomial coefficients to a value.
///
/// Coefficients are ordered from the highest power down to the constant term.
pub fn poly_val<T>(value: T, coeffs: &[T]) -> T
where
    T: Float
{
    // Horner's method
    coeffs.iter().fold(T::zero(), |acc, &c| acc * value + c)
}

/// Clamp a value into the range `[min, max]`.
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Float
{
    let mut ret = value;

    if ret > max {
        ret = max
    }
    if ret < min {
        ret = min
    }

    ret
}

/// Get the signed angular distance between two angles in the range of [0, 2pi].
///
/// This function will return the shortest signed distance between a and b accounting for wrapping
/// between 0 and 2pi. A positive value means b lies anticlockwise of a.
pub fn get_ang_dist_2pi<T>(a: T, b: T) -> T
where
    T: Float
{
    let tau_t: T = tau();

    let c = rem_euclid(a - b, tau_t);
    let d = rem_euclid(b - a, tau_t);

    if c < d {
        -c
    }
    else {
        d
    }
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()` if `lhs` is much smaller than `rhs.abs()` in
/// magnitude and `lhs < 0.0`.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float
{
    let r = lhs % rhs;
    if r < T::zero() { r + rhs.abs() } else { r }
}

/// Wrap any angle into the range [0, 2pi).
///
/// Unlike `rem_euclid` the upper bound is never returned, so an angle of
/// exactly 0 (or any multiple of 2pi) always maps to 0.
pub fn wrap_2pi<T>(value: T) -> T
where
    T: Float
{
    let tau_t: T = tau();

    let r = rem_euclid(value, tau_t);

    if r >= tau_t {
        T::zero()
    }
    else {
        r
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn tau<T: Float>() -> T {
    T::from(std::f64::consts::TAU).unwrap_or_else(T::max_value)
}

#[cfg(test)]
mod test {
    use super::*;

    const TAU: f64 = std::f64::consts::TAU;

    #[test]
    fn test_get_ang_dist_2pi() {
        assert_eq!(get_ang_dist_2pi(1f64, 2f64), 1f64);
        assert_eq!(get_ang_dist_2pi(2f64, 1f64), -1f64);
        assert_eq!(get_ang_dist_2pi(0f64, TAU), 0f64);
        assert_eq!(get_ang_dist_2pi(TAU, 0f64), 0f64);
        assert_eq!(get_ang_dist_2pi(1f64, TAU), -1f64);
        assert_eq!(get_ang_dist_2pi(0f64, TAU - 1f64), -1f64);
        assert_eq!(get_ang_dist_2pi(TAU - 1f64, 1f64), 2f64);
    }

    #[test]
    fn test_wrap_2pi() {
        assert_eq!(wrap_2pi(0f64), 0f64);
        assert_eq!(wrap_2pi(TAU), 0f64);
        assert!((wrap_2pi(-1f64) - (TAU - 1f64)).abs() < 1e-12);
        assert!((wrap_2pi(TAU + 1f64) - 1f64).abs() < 1e-12);

        // Tiny negative values must not land on 2pi
        let w = wrap_2pi(-1e-20f64);
        assert!(w >= 0.0 && w < TAU);
    }

    #[test]
    fn test_poly_val() {
        // 2x^2 - 3x + 1 at x = 2
        assert_eq!(poly_val(2f64, &[2.0, -3.0, 1.0]), 3.0);
        assert_eq!(poly_val(5f64, &[]), 0.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.5f64, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5f64, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25f64, 0.0, 1.0), 0.25);
    }
}
