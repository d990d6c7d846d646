//! Data-driven unit variants.
//!
//! An [`Archetype`] describes a unit type as plain data so scenarios can
//! declare new variants without code. It paints its body as a flat shape in
//! its own colour.

use glam::IVec2;
use serde::Deserialize;

use crate::canvas::{Canvas, Colour};
use crate::constants::DEFAULT_STATUS_OFFSET;
use crate::render::{Renderable, UnitKind, UnitProfile};
use crate::unit::Unit;

/// Outline used to paint an archetype's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    /// Filled rectangle covering the body.
    #[default]
    Rect,
    /// Filled ellipse inscribed in the body.
    Ellipse,
}

/// A unit variant described entirely by data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Archetype {
    /// Display label given to every unit of this type.
    pub name: String,
    /// Whether the player controls these units.
    pub allied: bool,
    /// Speed before scaling.
    pub move_speed: i32,
    /// Cooldown between actions in milliseconds.
    pub cooldown_ms: i32,
    /// Body width in pixels.
    pub width: i32,
    /// Body height in pixels.
    pub height: i32,
    /// Pixels reserved above the body for the name tag.
    #[serde(default = "default_status_offset")]
    pub status_offset: i32,
    /// Body outline.
    #[serde(default)]
    pub shape: BodyShape,
    /// Body fill colour.
    pub colour: Colour,
}

const fn default_status_offset() -> i32 {
    DEFAULT_STATUS_OFFSET
}

impl Archetype {
    /// Line infantry: slow, square, player-controlled.
    #[must_use]
    pub fn infantry() -> Self {
        Self {
            name: "Infantry".to_owned(),
            allied: true,
            move_speed: 5,
            cooldown_ms: 800,
            width: 20,
            height: 20,
            status_offset: DEFAULT_STATUS_OFFSET,
            shape: BodyShape::Rect,
            colour: Colour::rgb(40, 90, 200),
        }
    }

    /// Scout: fast and small, player-controlled.
    #[must_use]
    pub fn scout() -> Self {
        Self {
            name: "Scout".to_owned(),
            allied: true,
            move_speed: 9,
            cooldown_ms: 500,
            width: 14,
            height: 14,
            status_offset: DEFAULT_STATUS_OFFSET,
            shape: BodyShape::Ellipse,
            colour: Colour::rgb(60, 170, 90),
        }
    }

    /// Raider: opposing melee unit.
    #[must_use]
    pub fn raider() -> Self {
        Self {
            name: "Raider".to_owned(),
            allied: false,
            move_speed: 6,
            cooldown_ms: 1_000,
            width: 22,
            height: 22,
            status_offset: DEFAULT_STATUS_OFFSET,
            shape: BodyShape::Rect,
            colour: Colour::rgb(190, 40, 40),
        }
    }
}

impl Renderable for Archetype {
    fn paint_body(&self, unit: &Unit, canvas: &mut dyn Canvas) {
        canvas.set_colour(self.colour);
        match self.shape {
            BodyShape::Rect => canvas.fill_rect(unit.body_bounds()),
            BodyShape::Ellipse => canvas.fill_ellipse(unit.body_bounds()),
        }
    }
}

impl UnitKind for Archetype {
    fn profile(&self) -> UnitProfile {
        UnitProfile::new(
            self.name.clone(),
            self.allied,
            self.move_speed,
            self.cooldown_ms,
            IVec2::new(self.width, self.height),
        )
        .with_status_offset(self.status_offset)
    }
}
