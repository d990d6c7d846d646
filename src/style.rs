//! Explicit style configuration for unit status overlays.
//!
//! Fonts and label colours are passed to painting code as values rather than
//! read from process-wide defaults.

use serde::Deserialize;

use crate::canvas::Colour;
use crate::constants::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};

/// Weight and slant of a font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    /// Regular weight, upright.
    Plain,
    /// Bold weight, upright.
    #[default]
    Bold,
    /// Regular weight, italic.
    Italic,
}

/// Font request handed to the host canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct FontSpec {
    /// Logical family name resolved by the host.
    pub family: String,
    /// Face within the family.
    #[serde(default)]
    pub face: FontFace,
    /// Point size.
    pub size: u16,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_owned(),
            face: FontFace::Bold,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Style used when painting the status strip above a unit.
///
/// # Examples
/// ```
/// use vanguard::canvas::Colour;
/// use vanguard::style::StatusStyle;
///
/// let style = StatusStyle::default();
/// assert_eq!(style.label_colour, Colour::DARK_GREY);
/// assert_eq!(style.font.size, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusStyle {
    /// Font for name tags.
    #[serde(default)]
    pub font: FontSpec,
    /// Colour for name tags.
    #[serde(default = "default_label_colour")]
    pub label_colour: Colour,
}

const fn default_label_colour() -> Colour {
    Colour::DARK_GREY
}

impl Default for StatusStyle {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            label_colour: default_label_colour(),
        }
    }
}
