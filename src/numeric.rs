//! Numeric conversion helpers used by movement and distance queries.
//!
//! These utilities guard conversions between floating-point and integer
//! domains. Pixel maths stays in `i32`; intermediate products are computed in
//! `f64` and brought back with explicit truncation or flooring.

/// Floor a finite `f64` and clamp it into the `i32` domain.
///
/// Non-finite input yields `0`.
///
/// # Examples
/// ```
/// use vanguard::numeric::floor_to_i32;
/// assert_eq!(floor_to_i32(2.9), 2);
/// assert_eq!(floor_to_i32(-0.5), -1);
/// assert_eq!(floor_to_i32(f64::NAN), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let clamped = value.floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Drop the fractional part of a finite `f64`, clamping into `i32`.
///
/// Rounds toward zero, matching an integer cast. Non-finite input yields `0`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn truncate_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let clamped = value.trunc().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Pixels a unit may travel along one axis during a tick.
///
/// Computes `floor(speed * delta * scale)`. A negative `delta` is not
/// guarded and produces a negative reach.
///
/// # Examples
/// ```
/// use vanguard::numeric::max_axis_delta;
/// assert_eq!(max_axis_delta(5, 100, 0.01), 5);
/// assert_eq!(max_axis_delta(3, 16, 0.01), 0);
/// ```
#[must_use]
pub fn max_axis_delta(speed: i32, delta: i32, scale: f64) -> i32 {
    floor_to_i32(f64::from(speed) * f64::from(delta) * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(7.99, 7)]
    #[case(-7.99, -7)]
    #[case(f64::INFINITY, 0)]
    #[case(1.0e12, i32::MAX)]
    fn truncates_toward_zero(#[case] input: f64, #[case] expected: i32) {
        assert_eq!(truncate_to_i32(input), expected);
    }

    #[rstest]
    #[case(10, 16, 1)]
    #[case(10, 10, 1)]
    #[case(10, 9, 0)]
    #[case(250, 40, 100)]
    fn reach_is_floored(#[case] speed: i32, #[case] delta: i32, #[case] expected: i32) {
        assert_eq!(max_axis_delta(speed, delta, 0.01), expected);
    }
}
