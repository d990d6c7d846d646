//! Scenario configuration loaded from JSON.
//!
//! A scenario lists the unit archetypes in play, where units spawn, and
//! optional first orders. When no file is supplied the demo host falls back
//! to [`Scenario::builtin`].
//!
//! ```json
//! {
//!   "tick_ms": 16,
//!   "ticks": 120,
//!   "background": [96, 112, 64, 255],
//!   "archetypes": [
//!     { "name": "Infantry", "allied": true, "move_speed": 5, "cooldown_ms": 800,
//!       "width": 20, "height": 20, "colour": [40, 90, 200, 255] }
//!   ],
//!   "spawns": [ { "archetype": "Infantry", "x": 40, "y": 200, "move_to": [300, 200] } ]
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glam::IVec2;
use hashbrown::HashSet;
use serde::Deserialize;
use thiserror::Error;

use crate::archetype::Archetype;
use crate::canvas::Colour;
use crate::constants::{DEFAULT_TICKS, DEFAULT_TICK_MS};
use crate::style::StatusStyle;

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scenario file could not be read.
    #[error("failed to read scenario {}: {}", .path.display(), .source)]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The scenario text is not valid JSON for a [`Scenario`].
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    /// A spawn refers to an archetype the scenario does not define.
    #[error("spawn {index} names unknown archetype `{name}`")]
    UnknownArchetype {
        /// Position of the spawn in the list.
        index: usize,
        /// Archetype name that failed to resolve.
        name: String,
    },
    /// Two archetypes share a name.
    #[error("archetype `{0}` is defined more than once")]
    DuplicateArchetype(String),
    /// An archetype sets a speed, cooldown or dimension below zero.
    #[error("archetype `{archetype}` has negative {field}: {value}")]
    NegativeArchetypeField {
        /// Archetype carrying the value.
        archetype: String,
        /// Offending field name.
        field: &'static str,
        /// Value found.
        value: i32,
    },
    /// The scenario tick length is below zero.
    #[error("tick_ms must not be negative, got {0}")]
    NegativeTickMs(i32),
}

/// Where a unit starts and where it is first sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spawn {
    /// Name of the archetype to instantiate.
    pub archetype: String,
    /// Initial x position.
    pub x: i32,
    /// Initial y position.
    pub y: i32,
    /// Optional first destination.
    #[serde(default)]
    pub move_to: Option<[i32; 2]>,
}

impl Spawn {
    /// Initial position as a vector.
    #[must_use]
    pub const fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// First destination, if any.
    #[must_use]
    pub fn order(&self) -> Option<IVec2> {
        self.move_to.map(IVec2::from_array)
    }
}

/// A complete scenario for the demo host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Milliseconds simulated per tick.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: i32,
    /// Number of ticks to run.
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    /// Name tag style.
    #[serde(default)]
    pub style: StatusStyle,
    /// Ground colour painted under every unit.
    #[serde(default = "default_background")]
    pub background: Colour,
    /// Unit variants available to spawns.
    #[serde(default)]
    pub archetypes: Vec<Archetype>,
    /// Units to place on the stage.
    #[serde(default)]
    pub spawns: Vec<Spawn>,
}

const fn default_tick_ms() -> i32 {
    DEFAULT_TICK_MS
}

const fn default_ticks() -> u32 {
    DEFAULT_TICKS
}

const fn default_background() -> Colour {
    Colour::FIELD
}

impl Scenario {
    /// Reads and validates a scenario file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read, does not parse,
    /// or fails validation.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses and validates scenario JSON.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the text does not parse or fails
    /// validation.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let scenario: Self = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Checks the tick length, archetype values and names, and that every
    /// spawn resolves.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms < 0 {
            return Err(ConfigError::NegativeTickMs(self.tick_ms));
        }
        let mut names = HashSet::new();
        for archetype in &self.archetypes {
            check_archetype(archetype)?;
            if !names.insert(archetype.name.as_str()) {
                return Err(ConfigError::DuplicateArchetype(archetype.name.clone()));
            }
        }
        for (index, spawn) in self.spawns.iter().enumerate() {
            if !names.contains(spawn.archetype.as_str()) {
                return Err(ConfigError::UnknownArchetype {
                    index,
                    name: spawn.archetype.clone(),
                });
            }
        }
        Ok(())
    }

    /// Looks up an archetype by name.
    #[must_use]
    pub fn archetype(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|archetype| archetype.name == name)
    }

    /// Two allied units heading east and one raider closing in.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            ticks: DEFAULT_TICKS,
            style: StatusStyle::default(),
            background: Colour::FIELD,
            archetypes: vec![Archetype::infantry(), Archetype::scout(), Archetype::raider()],
            spawns: vec![
                Spawn {
                    archetype: "Infantry".to_owned(),
                    x: 40,
                    y: 200,
                    move_to: Some([300, 200]),
                },
                Spawn {
                    archetype: "Scout".to_owned(),
                    x: 40,
                    y: 260,
                    move_to: Some([320, 120]),
                },
                Spawn {
                    archetype: "Raider".to_owned(),
                    x: 420,
                    y: 180,
                    move_to: Some([260, 200]),
                },
            ],
        }
    }
}

/// Rejects archetype values that would make units walk away from their
/// targets or give views a negative size.
fn check_archetype(archetype: &Archetype) -> Result<(), ConfigError> {
    let fields = [
        ("move_speed", archetype.move_speed),
        ("cooldown_ms", archetype.cooldown_ms),
        ("width", archetype.width),
        ("height", archetype.height),
        ("status_offset", archetype.status_offset),
    ];
    match fields.into_iter().find(|&(_, value)| value < 0) {
        Some((field, value)) => Err(ConfigError::NegativeArchetypeField {
            archetype: archetype.name.clone(),
            field,
            value,
        }),
        None => Ok(()),
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn builtin_scenario_is_valid() {
        assert!(Scenario::builtin().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_archetype() {
        let result = Scenario::from_json(r#"{ "spawns": [ { "archetype": "Ghost", "x": 0, "y": 0 } ] }"#);
        assert!(matches!(
            result,
            Err(ConfigError::UnknownArchetype { index: 0, ref name }) if name == "Ghost"
        ));
    }

    #[test]
    fn rejects_duplicate_archetype() {
        let mut scenario = Scenario::builtin();
        scenario.archetypes.push(Archetype::scout());
        assert!(matches!(
            scenario.validate(),
            Err(ConfigError::DuplicateArchetype(ref name)) if name == "Scout"
        ));
    }

    #[rstest]
    #[case("move_speed")]
    #[case("cooldown_ms")]
    #[case("width")]
    #[case("height")]
    #[case("status_offset")]
    fn rejects_negative_archetype_values(#[case] field: &str) {
        let mut archetype = serde_json::json!({
            "name": "Lancer",
            "allied": true,
            "move_speed": 8,
            "cooldown_ms": 600,
            "width": 16,
            "height": 24,
            "colour": [200, 180, 40, 255]
        });
        archetype[field] = serde_json::json!(-5);
        let text = serde_json::json!({
            "archetypes": [archetype],
            "spawns": [ { "archetype": "Lancer", "x": 0, "y": 0, "move_to": [100, 0] } ]
        })
        .to_string();

        let result = Scenario::from_json(&text);
        assert!(
            matches!(
                result,
                Err(ConfigError::NegativeArchetypeField { ref archetype, field: found, value: -5 })
                    if archetype == "Lancer" && found == field
            ),
            "negative {field} should be rejected, got {result:?}"
        );
    }

    #[test]
    fn rejects_negative_tick_length() {
        assert!(matches!(
            Scenario::from_json(r#"{ "tick_ms": -16 }"#),
            Err(ConfigError::NegativeTickMs(-16))
        ));
    }

    #[test]
    fn zero_values_are_accepted() {
        let mut scenario = Scenario::builtin();
        scenario.tick_ms = 0;
        if let Some(archetype) = scenario.archetypes.first_mut() {
            archetype.move_speed = 0;
            archetype.status_offset = 0;
        }
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let Ok(scenario) = Scenario::from_json("{}") else {
            panic!("empty scenario should parse");
        };
        assert_eq!(scenario.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(scenario.ticks, DEFAULT_TICKS);
        assert_eq!(scenario.background, Colour::FIELD);
        assert!(scenario.spawns.is_empty());
    }
}
