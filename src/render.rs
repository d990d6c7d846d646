//! Polymorphic painting and per-variant unit parameters.
//!
//! Every unit variant implements [`UnitKind`]: it supplies its fixed
//! [`UnitProfile`] once at construction and paints its own body. The status
//! overlay is shared by all variants through the default
//! [`Renderable::paint_status_overlay`].

use std::fmt;

use glam::IVec2;

use crate::canvas::Canvas;
use crate::constants::DEFAULT_STATUS_OFFSET;
use crate::style::StatusStyle;
use crate::unit::Unit;

/// Painting callbacks invoked by a unit's view on every redraw.
///
/// Coordinates are view-local: `(0, 0)` is the top-left of the status strip
/// and the body starts `status_offset` pixels below it.
pub trait Renderable: fmt::Debug + Send {
    /// Paints the unit's body.
    fn paint_body(&self, unit: &Unit, canvas: &mut dyn Canvas);

    /// Paints the name tag above the body.
    ///
    /// Only allied units get a tag. The label is anchored at the bottom-left
    /// of the status strip.
    fn paint_status_overlay(&self, unit: &Unit, canvas: &mut dyn Canvas, style: &StatusStyle) {
        if !unit.is_allied() {
            return;
        }
        canvas.set_colour(style.label_colour);
        canvas.draw_text(unit.name(), IVec2::new(0, unit.status_offset()), &style.font);
    }
}

/// A concrete unit variant.
pub trait UnitKind: Renderable {
    /// Identity, motion and geometry shared by every unit of this variant.
    fn profile(&self) -> UnitProfile;
}

/// Fixed parameters a variant assigns to each of its units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitProfile {
    /// Display label.
    pub name: String,
    /// Whether the player controls units of this variant.
    pub allied: bool,
    /// Distance units per unit time, scaled by [`crate::MOVE_SCALE`].
    pub move_speed: i32,
    /// Cooldown reset value in milliseconds.
    pub cooldown_period: i32,
    /// Body width and height in pixels.
    pub size: IVec2,
    /// Pixels reserved above the body for the status overlay.
    pub status_offset: i32,
}

impl UnitProfile {
    /// Creates a profile with the default status offset.
    ///
    /// # Examples
    /// ```
    /// use glam::IVec2;
    /// use vanguard::render::UnitProfile;
    ///
    /// let profile = UnitProfile::new("Scout", true, 12, 400, IVec2::new(16, 16));
    /// assert_eq!(profile.status_offset, 15);
    /// ```
    pub fn new(
        name: impl Into<String>,
        allied: bool,
        move_speed: i32,
        cooldown_period: i32,
        size: IVec2,
    ) -> Self {
        Self {
            name: name.into(),
            allied,
            move_speed,
            cooldown_period,
            size,
            status_offset: DEFAULT_STATUS_OFFSET,
        }
    }

    /// Overrides the status strip height.
    #[must_use]
    pub const fn with_status_offset(mut self, status_offset: i32) -> Self {
        self.status_offset = status_offset;
        self
    }
}
