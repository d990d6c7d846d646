//! Utility helpers for tests.
//!
//! Provides a minimal unit variant with a configurable profile, plus
//! assertions over recorded canvas output.

use glam::IVec2;
use vanguard::canvas::{Canvas, DrawCommand, RecordingCanvas};
use vanguard::render::{Renderable, UnitKind, UnitProfile};
use vanguard::unit::{Unit, UnitId};

/// A unit variant whose profile is chosen by the test.
///
/// Its body is a single rectangle fill, which keeps recorded paint output
/// easy to assert on.
#[derive(Debug, Clone)]
pub struct Marker {
    profile: UnitProfile,
}

impl Marker {
    /// Wraps an explicit profile.
    pub fn new(profile: UnitProfile) -> Self {
        Self { profile }
    }

    /// A player-controlled 10x10 marker.
    ///
    /// # Examples
    /// ```
    /// use test_utils::Marker;
    /// use vanguard::render::UnitKind;
    /// let marker = Marker::ally("Alpha", 10, 100);
    /// assert!(marker.profile().allied);
    /// ```
    pub fn ally(name: &str, move_speed: i32, cooldown_period: i32) -> Self {
        Self::new(UnitProfile::new(
            name,
            true,
            move_speed,
            cooldown_period,
            IVec2::new(10, 10),
        ))
    }

    /// An opposing 10x10 marker.
    pub fn enemy(name: &str, move_speed: i32, cooldown_period: i32) -> Self {
        Self::new(UnitProfile::new(
            name,
            false,
            move_speed,
            cooldown_period,
            IVec2::new(10, 10),
        ))
    }

    /// Places the marker at `(x, y)` as a fresh unit.
    pub fn spawn(self, id: u32, x: i32, y: i32) -> Unit {
        Unit::new(UnitId(id), Box::new(self), IVec2::new(x, y))
    }
}

impl Renderable for Marker {
    fn paint_body(&self, unit: &Unit, canvas: &mut dyn Canvas) {
        canvas.fill_rect(unit.body_bounds());
    }
}

impl UnitKind for Marker {
    fn profile(&self) -> UnitProfile {
        self.profile.clone()
    }
}

/// Steps `unit` until it stops moving, returning the number of ticks taken.
///
/// # Panics
/// Panics if the unit is still moving after `limit` ticks.
pub fn run_until_arrived(unit: &mut Unit, delta: i32, limit: u32) -> u32 {
    for tick in 0..limit {
        if !unit.is_moving() {
            return tick;
        }
        unit.update(delta);
    }
    assert!(!unit.is_moving(), "unit still moving after {limit} ticks");
    limit
}

/// Assert that the recorded text draws are exactly `expected`, in order.
///
/// # Panics
/// Panics with the recorded texts if they differ.
pub fn assert_texts(canvas: &RecordingCanvas, expected: &[&str]) {
    let texts: Vec<&str> = canvas.texts().collect();
    assert_eq!(texts, expected, "unexpected name tags drawn");
}

/// Index of the first recorded command matching `predicate`.
///
/// # Panics
/// Panics if no command matches.
pub fn position_of(canvas: &RecordingCanvas, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
    canvas
        .commands()
        .iter()
        .position(predicate)
        .unwrap_or_else(|| panic!("no matching command in {:?}", canvas.commands()))
}
