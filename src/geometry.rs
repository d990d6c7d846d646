//! Integer pixel geometry helpers.
//! Axis stepping for unit movement, distances, and view bounds.
use glam::IVec2;

use crate::numeric::truncate_to_i32;

/// Moves `start` toward `target` by at most `max_delta`, never overshooting.
///
/// When `target` is within `max_delta` of `start` the result snaps exactly
/// onto `target`.
///
/// # Examples
/// ```
/// use vanguard::geometry::step_axis;
/// assert_eq!(step_axis(0, 10, 3), 3);
/// assert_eq!(step_axis(10, 0, 3), 7);
/// assert_eq!(step_axis(9, 10, 3), 10);
/// ```
#[must_use]
pub const fn step_axis(start: i32, target: i32, max_delta: i32) -> i32 {
    if start > target.saturating_add(max_delta) {
        start - max_delta
    } else if start < target.saturating_sub(max_delta) {
        start + max_delta
    } else {
        target
    }
}

/// Applies [`step_axis`] to both axes independently.
///
/// Each axis arrives on its own schedule, so diagonal travel is not
/// normalised.
#[must_use]
pub const fn step_towards(start: IVec2, target: IVec2, max_delta: i32) -> IVec2 {
    IVec2::new(
        step_axis(start.x, target.x, max_delta),
        step_axis(start.y, target.y, max_delta),
    )
}

/// Euclidean distance between two points, truncated to a whole pixel.
///
/// # Examples
/// ```
/// use glam::IVec2;
/// use vanguard::geometry::distance;
/// assert_eq!(distance(IVec2::ZERO, IVec2::new(3, 4)), 5);
/// ```
#[must_use]
pub fn distance(from: IVec2, to: IVec2) -> i32 {
    let dx = f64::from(to.x) - f64::from(from.x);
    let dy = f64::from(to.y) - f64::from(from.y);
    truncate_to_i32(dx.hypot(dy))
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    /// Top-left corner.
    pub origin: IVec2,
    /// Width and height.
    pub size: IVec2,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    #[must_use]
    pub const fn new(origin: IVec2, size: IVec2) -> Self {
        Self { origin, size }
    }

    /// Returns whether `point` lies inside the rectangle.
    ///
    /// The top and left edges are inclusive, the bottom and right exclusive.
    ///
    /// # Examples
    /// ```
    /// use glam::IVec2;
    /// use vanguard::geometry::Bounds;
    /// let bounds = Bounds::new(IVec2::new(10, 10), IVec2::new(5, 5));
    /// assert!(bounds.contains(IVec2::new(10, 14)));
    /// assert!(!bounds.contains(IVec2::new(15, 10)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: IVec2) -> bool {
        let end = self.origin + self.size;
        point.x >= self.origin.x && point.y >= self.origin.y && point.x < end.x && point.y < end.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 0, 0)]
    #[case(0, 10, 4, 4)]
    #[case(0, 10, 10, 10)]
    #[case(0, 10, 25, 10)]
    #[case(10, 0, 4, 6)]
    #[case(10, 0, 25, 0)]
    #[case(-5, -5, 3, -5)]
    fn step_axis_clamps_at_target(
        #[case] start: i32,
        #[case] target: i32,
        #[case] max_delta: i32,
        #[case] expected: i32,
    ) {
        assert_eq!(step_axis(start, target, max_delta), expected);
    }

    #[test]
    fn step_axis_never_passes_target() {
        for start in -20..=20 {
            for max_delta in 0..=8 {
                let next = step_axis(start, 0, max_delta);
                assert!(next.abs() <= start.abs(), "{start} moved away to {next}");
                assert!(
                    next.signum() == start.signum() || next == 0,
                    "{start} overshot to {next} with reach {max_delta}"
                );
                if start.abs() <= max_delta {
                    assert_eq!(next, 0);
                }
            }
        }
    }

    #[test]
    fn axes_arrive_independently() {
        let next = step_towards(IVec2::new(0, 0), IVec2::new(2, 10), 5);
        assert_eq!(next, IVec2::new(2, 5));
    }

    #[rstest]
    #[case(IVec2::ZERO, IVec2::new(3, 4), 5)]
    #[case(IVec2::new(3, 4), IVec2::ZERO, 5)]
    #[case(IVec2::ZERO, IVec2::new(1, 1), 1)]
    #[case(IVec2::new(-10, 0), IVec2::new(10, 0), 20)]
    fn distance_is_truncated(#[case] from: IVec2, #[case] to: IVec2, #[case] expected: i32) {
        assert_eq!(distance(from, to), expected);
    }
}
