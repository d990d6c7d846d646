//! Drawing surface supplied by the host.
//!
//! The simulation core never owns a window. Hosts implement [`Canvas`] over
//! whatever backend they render with; unit views paint through it in
//! view-local coordinates and [`Translated`] maps those onto the host's
//! canvas space. [`RecordingCanvas`] keeps every command in memory, which
//! is what the headless host and the tests paint onto.

use glam::IVec2;
use serde::Deserialize;

use crate::geometry::Bounds;
use crate::style::FontSpec;

/// RGBA colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[u8; 4]")]
pub struct Colour {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Colour {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque dark grey used for name tags.
    pub const DARK_GREY: Self = Self::rgb(64, 64, 64);
    /// Muted olive, the default stage ground.
    pub const FIELD: Self = Self::rgb(96, 112, 64);

    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }
}

impl From<[u8; 4]> for Colour {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing operations the host canvas must provide.
pub trait Canvas {
    /// Sets the colour used by subsequent fills and text.
    fn set_colour(&mut self, colour: Colour);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, bounds: Bounds);

    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Bounds);

    /// Draws `text` with its bottom-left corner at `baseline`.
    fn draw_text(&mut self, text: &str, baseline: IVec2, font: &FontSpec);

    /// Host decoration pass run after a view has painted its unit.
    ///
    /// Does nothing unless the host overrides it.
    fn decorate(&mut self, bounds: Bounds) {
        let _ = bounds;
    }
}

/// Offsets view-local coordinates onto the wrapped canvas.
pub struct Translated<'a> {
    inner: &'a mut dyn Canvas,
    origin: IVec2,
}

impl<'a> Translated<'a> {
    /// Wraps `inner` so that local `(0, 0)` lands on `origin`.
    pub fn new(inner: &'a mut dyn Canvas, origin: IVec2) -> Self {
        Self { inner, origin }
    }

    const fn shift(&self, bounds: Bounds) -> Bounds {
        Bounds::new(
            IVec2::new(bounds.origin.x + self.origin.x, bounds.origin.y + self.origin.y),
            bounds.size,
        )
    }
}

impl Canvas for Translated<'_> {
    fn set_colour(&mut self, colour: Colour) {
        self.inner.set_colour(colour);
    }

    fn fill_rect(&mut self, bounds: Bounds) {
        let shifted = self.shift(bounds);
        self.inner.fill_rect(shifted);
    }

    fn fill_ellipse(&mut self, bounds: Bounds) {
        let shifted = self.shift(bounds);
        self.inner.fill_ellipse(shifted);
    }

    fn draw_text(&mut self, text: &str, baseline: IVec2, font: &FontSpec) {
        self.inner.draw_text(text, baseline + self.origin, font);
    }

    fn decorate(&mut self, bounds: Bounds) {
        let shifted = self.shift(bounds);
        self.inner.decorate(shifted);
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Colour change.
    SetColour(Colour),
    /// Rectangle fill.
    FillRect(Bounds),
    /// Ellipse fill.
    FillEllipse(Bounds),
    /// Text draw.
    Text {
        /// Drawn string.
        text: String,
        /// Bottom-left anchor.
        baseline: IVec2,
        /// Font used.
        font: FontSpec,
    },
    /// Host decoration pass.
    Decorate(Bounds),
}

/// In-memory canvas that records commands in the order they were issued.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Strings passed to [`Canvas::draw_text`], in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Discards the recording, typically at the start of a frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn set_colour(&mut self, colour: Colour) {
        self.commands.push(DrawCommand::SetColour(colour));
    }

    fn fill_rect(&mut self, bounds: Bounds) {
        self.commands.push(DrawCommand::FillRect(bounds));
    }

    fn fill_ellipse(&mut self, bounds: Bounds) {
        self.commands.push(DrawCommand::FillEllipse(bounds));
    }

    fn draw_text(&mut self, text: &str, baseline: IVec2, font: &FontSpec) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            baseline,
            font: font.clone(),
        });
    }

    fn decorate(&mut self, bounds: Bounds) {
        self.commands.push(DrawCommand::Decorate(bounds));
    }
}
