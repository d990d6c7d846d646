//! Shared tuning constants for unit movement and presentation.

/// Converts `move_speed * delta` into whole pixels per tick.
pub const MOVE_SCALE: f64 = 0.01;
/// Vertical pixels reserved above a unit for its status overlay.
pub const DEFAULT_STATUS_OFFSET: i32 = 15;
/// Canvas layer index of the background.
pub const BACKGROUND_LAYER: u8 = 0;
/// Canvas layer index that unit views are registered on.
pub const UNIT_LAYER: u8 = 1;
/// Font family used for name tags unless a style overrides it.
pub const DEFAULT_FONT_FAMILY: &str = "Dialog";
/// Point size used for name tags unless a style overrides it.
pub const DEFAULT_FONT_SIZE: u16 = 12;
/// Tick length, in milliseconds, used when a scenario does not set one.
pub const DEFAULT_TICK_MS: i32 = 16;
/// Number of ticks the demo host runs when a scenario does not set one.
pub const DEFAULT_TICKS: u32 = 120;
