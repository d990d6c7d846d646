//! Movement and timing model for a single unit.
//!
//! A [`Unit`] steps toward its target once per tick, one axis at a time,
//! and counts down an action cooldown. Painting is delegated to the unit's
//! [`UnitKind`]; placement on the host canvas is delegated to its
//! [`UnitView`].

use std::fmt;

use glam::IVec2;
use log::{debug, trace};

use crate::canvas::Canvas;
use crate::constants::MOVE_SCALE;
use crate::geometry::{self, Bounds};
use crate::numeric::max_axis_delta;
use crate::render::UnitKind;
use crate::style::StatusStyle;
use crate::view::{SelectionSender, UnitView};

/// Host-assigned handle identifying a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A moving, renderable game actor.
///
/// Identity, speed, cooldown period and geometry come from the variant's
/// [`UnitProfile`](crate::render::UnitProfile) and never change afterwards.
///
/// # Examples
/// ```
/// use glam::IVec2;
/// use vanguard::{archetype::Archetype, Unit, UnitId};
///
/// let mut unit = Unit::new(UnitId(1), Box::new(Archetype::infantry()), IVec2::ZERO);
/// unit.move_to(IVec2::new(10, 0));
/// unit.update(100);
/// assert_eq!(unit.position(), IVec2::new(5, 0));
/// ```
#[derive(Debug)]
pub struct Unit {
    id: UnitId,
    kind: Box<dyn UnitKind>,
    name: String,
    allied: bool,
    position: IVec2,
    target: IVec2,
    move_speed: i32,
    status_offset: i32,
    cooldown: i32,
    cooldown_period: i32,
    size: IVec2,
    view: Option<UnitView>,
}

impl Unit {
    /// Creates a stationary unit at `position` with its cooldown at zero.
    #[must_use]
    pub fn new(id: UnitId, kind: Box<dyn UnitKind>, position: IVec2) -> Self {
        let profile = kind.profile();
        debug!(
            "Creating unit {id} ({}) at {position} with speed {}",
            profile.name, profile.move_speed
        );
        Self {
            id,
            kind,
            name: profile.name,
            allied: profile.allied,
            position,
            target: position,
            move_speed: profile.move_speed,
            status_offset: profile.status_offset,
            cooldown: 0,
            cooldown_period: profile.cooldown_period,
            size: profile.size,
            view: None,
        }
    }

    /// Creates and binds the unit's view.
    ///
    /// Clicks inside the view are sent to `listener`. Attaching again
    /// replaces the previous view.
    pub fn attach_view(&mut self, listener: Option<SelectionSender>) -> &UnitView {
        if self.view.is_some() {
            debug!("Replacing view of unit {}", self.id);
        }
        let view = UnitView::attach(self, listener);
        self.view.insert(view)
    }

    /// Advances the unit by one tick of `delta` milliseconds.
    ///
    /// A cooldown at or below zero is rearmed to the full period; otherwise
    /// it is reduced by `delta` without clamping. The unit then steps toward
    /// its target and its view follows. `delta` must not be negative.
    pub fn update(&mut self, delta: i32) {
        if self.cooldown <= 0 {
            self.cooldown = self.cooldown_period;
        } else {
            self.cooldown -= delta;
        }

        if self.is_moving() {
            self.step(delta);
        }
    }

    fn step(&mut self, delta: i32) {
        let reach = max_axis_delta(self.move_speed, delta, MOVE_SCALE);
        self.position = geometry::step_towards(self.position, self.target, reach);
        if let Some(view) = &mut self.view {
            view.sync_position(self.position, self.status_offset);
        }
        if self.position == self.target {
            debug!("Unit {} ({}) reached {}", self.id, self.name, self.target);
        }
    }

    /// Replaces the destination; any earlier target is discarded.
    pub fn move_to(&mut self, target: IVec2) {
        trace!("Unit {} retargeted from {} to {target}", self.id, self.target);
        self.target = target;
    }

    /// Distance to `other` in whole pixels.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> i32 {
        geometry::distance(self.position, other.position)
    }

    /// Paints the body through the unit's variant.
    pub fn paint_body(&self, canvas: &mut dyn Canvas) {
        self.kind.paint_body(self, canvas);
    }

    /// Paints the status overlay through the unit's variant.
    pub fn paint_status_overlay(&self, canvas: &mut dyn Canvas, style: &StatusStyle) {
        self.kind.paint_status_overlay(self, canvas, style);
    }

    /// Body rectangle in view-local coordinates, below the status strip.
    #[must_use]
    pub const fn body_bounds(&self) -> Bounds {
        Bounds::new(IVec2::new(0, self.status_offset), self.size)
    }

    /// Whether the cooldown has run out.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.cooldown <= 0
    }

    /// Whether the unit has not yet reached its target.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.position != self.target
    }

    /// Host-assigned handle.
    #[must_use]
    pub const fn id(&self) -> UnitId {
        self.id
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the player controls this unit.
    #[must_use]
    pub const fn is_allied(&self) -> bool {
        self.allied
    }

    /// Current position in canvas pixels.
    #[must_use]
    pub const fn position(&self) -> IVec2 {
        self.position
    }

    /// Current destination.
    #[must_use]
    pub const fn target(&self) -> IVec2 {
        self.target
    }

    /// Speed before scaling.
    #[must_use]
    pub const fn move_speed(&self) -> i32 {
        self.move_speed
    }

    /// Remaining cooldown in milliseconds; may be negative after a long tick.
    #[must_use]
    pub const fn cooldown(&self) -> i32 {
        self.cooldown
    }

    /// Cooldown reset value in milliseconds.
    #[must_use]
    pub const fn cooldown_period(&self) -> i32 {
        self.cooldown_period
    }

    /// Body width and height.
    #[must_use]
    pub const fn size(&self) -> IVec2 {
        self.size
    }

    /// Pixels reserved above the body for the status overlay.
    #[must_use]
    pub const fn status_offset(&self) -> i32 {
        self.status_offset
    }

    /// The bound view, once attached.
    #[must_use]
    pub const fn view(&self) -> Option<&UnitView> {
        self.view.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::render::{Renderable, UnitProfile};
    use rstest::{fixture, rstest};

    #[derive(Debug)]
    struct Sentry {
        allied: bool,
    }

    impl Renderable for Sentry {
        fn paint_body(&self, unit: &Unit, canvas: &mut dyn Canvas) {
            canvas.fill_rect(unit.body_bounds());
        }
    }

    impl UnitKind for Sentry {
        fn profile(&self) -> UnitProfile {
            UnitProfile::new("Sentry", self.allied, 10, 50, IVec2::new(8, 12))
        }
    }

    #[fixture]
    fn sentry() -> Unit {
        Unit::new(UnitId(7), Box::new(Sentry { allied: true }), IVec2::new(20, 40))
    }

    #[rstest]
    fn starts_idle_at_spawn(sentry: Unit) {
        assert_eq!(sentry.target(), sentry.position());
        assert_eq!(sentry.cooldown(), 0);
        assert!(sentry.is_ready());
        assert!(!sentry.is_moving());
        assert!(sentry.view().is_none());
    }

    #[rstest]
    fn cooldown_rearms_on_the_tick_after_reaching_zero(mut sentry: Unit) {
        sentry.update(20);
        assert_eq!(sentry.cooldown(), 50);
        sentry.update(20);
        assert_eq!(sentry.cooldown(), 30);
        sentry.update(20);
        assert_eq!(sentry.cooldown(), 10);
        sentry.update(20);
        assert_eq!(sentry.cooldown(), -10);
        assert!(sentry.is_ready());
        sentry.update(20);
        assert_eq!(sentry.cooldown(), 50);
    }

    #[rstest]
    fn update_without_target_leaves_position(mut sentry: Unit) {
        sentry.update(1_000);
        assert_eq!(sentry.position(), IVec2::new(20, 40));
    }

    #[rstest]
    fn view_tracks_position_above_status_strip(mut sentry: Unit) {
        sentry.attach_view(None);
        sentry.move_to(IVec2::new(100, 40));
        sentry.update(100);
        assert_eq!(sentry.position(), IVec2::new(30, 40));
        let view = sentry.view().map(UnitView::location);
        assert_eq!(view, Some(IVec2::new(30, 25)));
    }

    #[rstest]
    fn attaching_again_keeps_the_last_view(mut sentry: Unit) {
        sentry.attach_view(None);
        sentry.move_to(IVec2::new(60, 40));
        sentry.update(400);
        let size = sentry.attach_view(None).size();
        assert_eq!(size, IVec2::new(8, 27));
        assert_eq!(sentry.view().map(UnitView::location), Some(IVec2::new(60, 25)));
    }

    #[rstest]
    fn overlay_draws_name_for_allies(sentry: Unit) {
        let mut canvas = RecordingCanvas::new();
        sentry.paint_status_overlay(&mut canvas, &StatusStyle::default());
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["Sentry"]);
    }

    #[test]
    fn overlay_is_blank_for_opponents() {
        let enemy = Unit::new(UnitId(1), Box::new(Sentry { allied: false }), IVec2::ZERO);
        let mut canvas = RecordingCanvas::new();
        enemy.paint_status_overlay(&mut canvas, &StatusStyle::default());
        assert!(canvas.commands().is_empty());
    }
}
