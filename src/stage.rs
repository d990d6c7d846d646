//! Headless host stage that owns units and drives them.
//!
//! The stage plays the part of the windowing layer: it updates every unit
//! before painting, paints views layer by layer onto a [`Canvas`], and
//! forwards pointer input to views, draining the selection messages they
//! emit. It holds no gameplay rules of its own.

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};

use glam::IVec2;
use hashbrown::HashMap;
use log::{debug, info};
use thiserror::Error;

use crate::canvas::{Canvas, Colour};
use crate::config::{ConfigError, Scenario};
use crate::geometry::Bounds;
use crate::render::UnitKind;
use crate::style::StatusStyle;
use crate::unit::{Unit, UnitId};
use crate::view::{Layer, PointerEvent};

/// Errors returned by stage commands.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    /// The command named a unit the stage does not hold.
    #[error("no unit {0} on this stage")]
    UnknownUnit(UnitId),
}

/// Owner of every live unit plus the canvas layer registry.
#[derive(Debug)]
pub struct Stage {
    size: IVec2,
    background: Colour,
    style: StatusStyle,
    units: HashMap<UnitId, Unit>,
    layers: BTreeMap<Layer, Vec<UnitId>>,
    next_id: u32,
    selected: Option<UnitId>,
    selection_tx: Sender<UnitId>,
    selection_rx: Receiver<UnitId>,
    tick_count: u64,
}

impl Stage {
    /// Creates an empty stage of `size` pixels.
    #[must_use]
    pub fn new(size: IVec2, style: StatusStyle) -> Self {
        let (selection_tx, selection_rx) = mpsc::channel();
        Self {
            size,
            background: Colour::FIELD,
            style,
            units: HashMap::new(),
            layers: BTreeMap::new(),
            next_id: 0,
            selected: None,
            selection_tx,
            selection_rx,
            tick_count: 0,
        }
    }

    /// Replaces the background fill colour.
    #[must_use]
    pub const fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    /// Places a new unit and attaches its view to this stage.
    pub fn spawn(&mut self, kind: Box<dyn UnitKind>, position: IVec2) -> UnitId {
        self.place(kind, position).id()
    }

    fn place(&mut self, kind: Box<dyn UnitKind>, position: IVec2) -> &mut Unit {
        let id = UnitId(self.next_id);
        self.next_id += 1;

        let mut unit = Unit::new(id, kind, position);
        let layer = unit.attach_view(Some(self.selection_tx.clone())).layer();
        self.layers.entry(layer).or_default().push(id);
        debug!("Spawned {} {id} at {position} on layer {}", unit.name(), layer.0);
        self.units.entry(id).or_insert(unit)
    }

    /// Spawns every unit a scenario lists and issues their first orders.
    ///
    /// The scenario is validated first; on error the stage is left as it
    /// was and no ids are consumed.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] raised by [`Scenario::validate`].
    pub fn populate(&mut self, scenario: &Scenario) -> Result<Vec<UnitId>, ConfigError> {
        scenario.validate()?;
        let resolved = scenario
            .spawns
            .iter()
            .enumerate()
            .map(|(index, spawn)| {
                scenario
                    .archetype(&spawn.archetype)
                    .map(|archetype| (archetype, spawn))
                    .ok_or_else(|| ConfigError::UnknownArchetype {
                        index,
                        name: spawn.archetype.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut spawned = Vec::with_capacity(resolved.len());
        for (archetype, spawn) in resolved {
            let unit = self.place(Box::new(archetype.clone()), spawn.position());
            if let Some(order) = spawn.order() {
                unit.move_to(order);
            }
            spawned.push(unit.id());
        }
        info!("Stage populated with {} units", spawned.len());
        Ok(spawned)
    }

    /// Removes a unit and its view.
    ///
    /// # Errors
    /// Returns [`StageError::UnknownUnit`] if `id` is not on the stage.
    pub fn despawn(&mut self, id: UnitId) -> Result<Unit, StageError> {
        let unit = self.units.remove(&id).ok_or(StageError::UnknownUnit(id))?;
        for ids in self.layers.values_mut() {
            ids.retain(|held| *held != id);
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!("Despawned {} {id}", unit.name());
        Ok(unit)
    }

    /// Sends a unit toward `target`.
    ///
    /// # Errors
    /// Returns [`StageError::UnknownUnit`] if `id` is not on the stage.
    pub fn command_move(&mut self, id: UnitId, target: IVec2) -> Result<(), StageError> {
        let unit = self.units.get_mut(&id).ok_or(StageError::UnknownUnit(id))?;
        unit.move_to(target);
        Ok(())
    }

    /// Distance between two units on the stage.
    ///
    /// # Errors
    /// Returns [`StageError::UnknownUnit`] naming the first missing unit.
    pub fn distance(&self, from: UnitId, to: UnitId) -> Result<i32, StageError> {
        let a = self.units.get(&from).ok_or(StageError::UnknownUnit(from))?;
        let b = self.units.get(&to).ok_or(StageError::UnknownUnit(to))?;
        Ok(a.distance_to(b))
    }

    /// Runs one simulation tick of `delta` milliseconds over every unit.
    pub fn tick(&mut self, delta: i32) {
        for unit in self.units.values_mut() {
            unit.update(delta);
        }
        self.tick_count += 1;
        self.drain_selections();
    }

    /// Paints the background and then every view, lowest layer first.
    ///
    /// Within a layer, later spawns paint over earlier ones.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.set_colour(self.background);
        canvas.fill_rect(Bounds::new(IVec2::ZERO, self.size));
        for id in self.layers.values().flatten() {
            if let Some(unit) = self.units.get(id) {
                if let Some(view) = unit.view() {
                    view.paint(unit, canvas, &self.style);
                }
            }
        }
    }

    /// Forwards pointer input to the topmost view under it.
    ///
    /// A click on a unit selects it; a click on empty ground clears the
    /// selection. Returns the unit selected by this event.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<UnitId> {
        let consumed = self
            .layers
            .values()
            .rev()
            .flat_map(|ids| ids.iter().rev())
            .filter_map(|id| self.units.get(id).and_then(Unit::view))
            .any(|view| view.handle_pointer(event));

        if consumed {
            self.drain_selections();
            return self.selected;
        }
        if matches!(event, PointerEvent::Clicked(_)) && self.selected.take().is_some() {
            debug!("Selection cleared by click at {}", event.position());
        }
        None
    }

    fn drain_selections(&mut self) {
        while let Ok(id) = self.selection_rx.try_recv() {
            if self.units.contains_key(&id) {
                info!("Selected unit {id}");
                self.selected = Some(id);
            }
        }
    }

    /// Unit currently selected by the player, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<UnitId> {
        self.selected
    }

    /// Looks up a unit.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Every unit, in paint order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.layers
            .values()
            .flatten()
            .filter_map(|id| self.units.get(id))
    }

    /// Number of live units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the stage holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Ticks run so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Canvas size in pixels.
    #[must_use]
    pub const fn size(&self) -> IVec2 {
        self.size
    }
}
