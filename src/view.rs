//! Canvas placement and input routing for a single unit.
//!
//! A [`UnitView`] is owned by its unit and refers back to it only by
//! [`UnitId`]. It tracks where the unit sits on the host canvas, forwards
//! clicks to the host controller as selection messages, and paints the unit
//! by calling back into its [`Renderable`](crate::render::Renderable)
//! implementation.

use std::sync::mpsc::Sender;

use glam::IVec2;
use log::debug;

use crate::canvas::{Canvas, Translated};
use crate::constants::{BACKGROUND_LAYER, UNIT_LAYER};
use crate::geometry::Bounds;
use crate::style::StatusStyle;
use crate::unit::{Unit, UnitId};

/// Channel end the host controller receives selections on.
pub type SelectionSender = Sender<UnitId>;

/// Z-order slot on the host canvas. Higher layers paint on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Layer(pub u8);

impl Layer {
    /// Layer holding the stage background.
    pub const BACKGROUND: Self = Self(BACKGROUND_LAYER);
    /// Layer unit views are registered on.
    pub const UNITS: Self = Self(UNIT_LAYER);
}

/// Raw pointer input forwarded by the host canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer moved to a canvas position.
    Moved(IVec2),
    /// Button pressed at a canvas position.
    Pressed(IVec2),
    /// Button pressed and released at a canvas position.
    Clicked(IVec2),
}

impl PointerEvent {
    /// Canvas position the event happened at.
    #[must_use]
    pub const fn position(self) -> IVec2 {
        match self {
            Self::Moved(position) | Self::Pressed(position) | Self::Clicked(position) => position,
        }
    }
}

/// Placement of one unit on the host canvas.
#[derive(Debug)]
pub struct UnitView {
    unit: UnitId,
    bounds: Bounds,
    layer: Layer,
    listener: Option<SelectionSender>,
}

impl UnitView {
    /// Builds a view for `unit`, sized to cover its body and status strip.
    pub(crate) const fn attach(unit: &Unit, listener: Option<SelectionSender>) -> Self {
        let offset = unit.status_offset();
        let size = unit.size();
        Self {
            unit: unit.id(),
            bounds: Bounds::new(
                placement(unit.position(), offset),
                IVec2::new(size.x, size.y + offset),
            ),
            layer: Layer::UNITS,
            listener,
        }
    }

    /// Unit this view is bound to.
    #[must_use]
    pub const fn unit_id(&self) -> UnitId {
        self.unit
    }

    /// Canvas rectangle covered by the view.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Top-left corner on the canvas.
    #[must_use]
    pub const fn location(&self) -> IVec2 {
        self.bounds.origin
    }

    /// Width and height, including the status strip.
    #[must_use]
    pub const fn size(&self) -> IVec2 {
        self.bounds.size
    }

    /// Layer the view is registered on.
    #[must_use]
    pub const fn layer(&self) -> Layer {
        self.layer
    }

    /// Follows the unit to `position`; the size is left untouched.
    pub(crate) const fn sync_position(&mut self, position: IVec2, status_offset: i32) {
        self.bounds.origin = placement(position, status_offset);
    }

    /// Hit-tests a canvas point against the view.
    #[must_use]
    pub fn contains(&self, point: IVec2) -> bool {
        self.bounds.contains(point)
    }

    /// Routes pointer input to the host controller.
    ///
    /// A click inside the view sends this view's unit id to the registered
    /// listener. Returns whether the event was consumed.
    #[must_use]
    pub fn handle_pointer(&self, event: PointerEvent) -> bool {
        let PointerEvent::Clicked(point) = event else {
            return false;
        };
        if !self.contains(point) {
            return false;
        }
        if let Some(listener) = &self.listener {
            if listener.send(self.unit).is_err() {
                debug!("selection listener for unit {} hung up", self.unit);
            }
        }
        true
    }

    /// Paints the bound unit: body first, then its status overlay, then the
    /// canvas's own decoration pass.
    ///
    /// `unit` must be the unit this view belongs to.
    pub fn paint(&self, unit: &Unit, canvas: &mut dyn Canvas, style: &StatusStyle) {
        debug_assert_eq!(unit.id(), self.unit, "view painted with a foreign unit");
        let mut local = Translated::new(canvas, self.bounds.origin);
        unit.paint_body(&mut local);
        unit.paint_status_overlay(&mut local, style);
        local.decorate(Bounds::new(IVec2::ZERO, self.bounds.size));
    }
}

const fn placement(position: IVec2, status_offset: i32) -> IVec2 {
    IVec2::new(position.x, position.y - status_offset)
}
