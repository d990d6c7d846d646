#![cfg_attr(docsrs, feature(doc_cfg))]
//! Unit simulation core for a small tactical strategy game.
//!
//! Units step toward their targets one axis at a time, count down action
//! cooldowns, and paint themselves through a host-supplied [`Canvas`] via
//! their [`UnitView`]. A headless [`Stage`] stands in for the windowing layer.
pub mod archetype;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod logging;
pub mod numeric;
pub mod render;
pub mod stage;
pub mod style;
pub mod unit;
pub mod view;
pub use constants::*;

// Re-export commonly used items
pub use archetype::{Archetype, BodyShape};
pub use canvas::{Canvas, Colour, DrawCommand, RecordingCanvas};
pub use config::{ConfigError, Scenario, Spawn};
pub use geometry::{distance, step_axis, Bounds};
pub use logging::init as init_logging;
pub use render::{Renderable, UnitKind, UnitProfile};
pub use stage::{Stage, StageError};
pub use style::{FontFace, FontSpec, StatusStyle};
pub use unit::{Unit, UnitId};
pub use view::{Layer, PointerEvent, SelectionSender, UnitView};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use vanguard::prelude::*;
    //! ```

    pub use crate::Archetype;
    pub use crate::Canvas;
    pub use crate::PointerEvent;
    pub use crate::Renderable;
    pub use crate::Stage;
    pub use crate::StatusStyle;
    pub use crate::Unit;
    pub use crate::UnitId;
    pub use crate::UnitKind;
    pub use glam::IVec2;
}
