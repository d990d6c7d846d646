//! Behavioural tests for the headless stage using rust-rspec.
//!
//! Covers tick-then-paint ordering, name tag gating and click selection.

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use std::sync::{Arc, Mutex, MutexGuard};

use glam::IVec2;
use rspec_runner::run_serial;
use test_utils::{assert_texts, position_of, Marker};
use vanguard::canvas::{DrawCommand, RecordingCanvas};
use vanguard::geometry::Bounds;
use vanguard::stage::Stage;
use vanguard::style::StatusStyle;
use vanguard::unit::UnitId;
use vanguard::view::PointerEvent;

const ALLY: UnitId = UnitId(0);
const RAIDER: UnitId = UnitId(1);

#[derive(Clone, Debug)]
struct Env {
    stage: Arc<Mutex<Stage>>,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            stage: Arc::new(Mutex::new(Self::fresh_stage())),
        }
    }
}

impl Env {
    fn fresh_stage() -> Stage {
        let mut stage = Stage::new(IVec2::new(640, 480), StatusStyle::default());
        stage.spawn(Box::new(Marker::ally("Alpha", 10, 100)), IVec2::new(100, 100));
        stage.spawn(Box::new(Marker::enemy("Raider", 10, 100)), IVec2::new(300, 100));
        stage
    }

    fn stage(&self) -> MutexGuard<'_, Stage> {
        self.stage.lock().expect("stage lock")
    }

    fn reset(&self) {
        *self.stage() = Self::fresh_stage();
    }

    fn frame(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.stage().paint(&mut canvas);
        canvas
    }

    fn click(&self, x: i32, y: i32) -> Option<UnitId> {
        self.stage().pointer(PointerEvent::Clicked(IVec2::new(x, y)))
    }
}

#[test]
fn stage_moves_then_paints() {
    run_serial(&rspec::given(
        "a stage with an ally and a raider",
        Env::default(),
        |ctx| {
            ctx.when("the ally is ordered east and the stage ticks", |ctx| {
                ctx.before_each(|env| {
                    env.reset();
                    let mut stage = env.stage();
                    stage
                        .command_move(ALLY, IVec2::new(130, 100))
                        .expect("ally exists");
                    stage.tick(100);
                });

                ctx.then("the ally advances one step and its view follows", |env| {
                    let stage = env.stage();
                    let ally = stage.unit(ALLY).expect("ally exists");
                    assert_eq!(ally.position(), IVec2::new(110, 100));
                    assert_eq!(
                        ally.view().map(|view| view.location()),
                        Some(IVec2::new(110, 85))
                    );
                    assert_eq!(stage.tick_count(), 1);
                });

                ctx.then("the raider stays put", |env| {
                    let stage = env.stage();
                    let raider = stage.unit(RAIDER).expect("raider exists");
                    assert_eq!(raider.position(), IVec2::new(300, 100));
                    assert_eq!(stage.distance(ALLY, RAIDER), Ok(190));
                });

                ctx.then("the frame shows the moved body and only the ally's tag", |env| {
                    let canvas = env.frame();
                    assert_texts(&canvas, &["Alpha"]);
                    let background = position_of(&canvas, |command| {
                        *command == DrawCommand::FillRect(Bounds::new(IVec2::ZERO, IVec2::new(640, 480)))
                    });
                    let body = position_of(&canvas, |command| {
                        *command
                            == DrawCommand::FillRect(Bounds::new(
                                IVec2::new(110, 100),
                                IVec2::new(10, 10),
                            ))
                    });
                    assert!(background < body, "background must paint under units");
                });
            });

            ctx.when("the player clicks the ally's name tag", |ctx| {
                ctx.before_each(|env| {
                    env.reset();
                });

                ctx.then("the ally becomes selected", |env| {
                    assert_eq!(env.click(105, 90), Some(ALLY));
                    assert_eq!(env.stage().selected(), Some(ALLY));
                });

                ctx.then("a later click on open ground clears the selection", |env| {
                    assert_eq!(env.click(105, 90), Some(ALLY));
                    assert_eq!(env.click(500, 400), None);
                    assert_eq!(env.stage().selected(), None);
                });
            });

            ctx.when("two units overlap", |ctx| {
                ctx.before_each(|env| {
                    env.reset();
                    env.stage()
                        .spawn(Box::new(Marker::ally("Bravo", 10, 100)), IVec2::new(104, 104));
                });

                ctx.then("the most recently placed view takes the click", |env| {
                    assert_eq!(env.click(106, 106), Some(UnitId(2)));
                });

                ctx.then("the earlier view still takes clicks outside the overlap", |env| {
                    assert_eq!(env.click(101, 88), Some(ALLY));
                });
            });
        },
    ));
}

#[test]
fn despawned_units_leave_the_frame() {
    let env = Env::default();
    let removed = env.stage().despawn(ALLY).expect("ally exists");
    assert_eq!(removed.name(), "Alpha");
    let canvas = env.frame();
    assert_texts(&canvas, &[]);
    assert_eq!(env.stage().len(), 1);
}
