//! Headless demo host that runs a scenario and logs what the units do.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::IVec2;
use log::info;
use vanguard::{init_logging, PointerEvent, RecordingCanvas, Scenario, Stage};

/// Stage size used by the demo host.
const STAGE_SIZE: IVec2 = IVec2::new(640, 480);

/// Runs a unit scenario without a window
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scenario JSON file; the built-in scenario is used when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the number of ticks to run
    #[arg(long)]
    ticks: Option<u32>,

    /// Override the milliseconds simulated per tick
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..))]
    tick_ms: Option<i32>,

    /// Click the stage at X Y after the run; off-canvas points are allowed
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    click: Option<Vec<i32>>,
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = match &args.scenario {
        Some(path) => Scenario::from_path(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::builtin(),
    };
    if let Some(ticks) = args.ticks {
        scenario.ticks = ticks;
    }
    if let Some(tick_ms) = args.tick_ms {
        scenario.tick_ms = tick_ms;
    }
    Ok(scenario)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = load_scenario(&args)?;
    let mut stage =
        Stage::new(STAGE_SIZE, scenario.style.clone()).with_background(scenario.background);
    stage
        .populate(&scenario)
        .context("placing scenario units")?;

    let mut canvas = RecordingCanvas::new();
    for _ in 0..scenario.ticks {
        stage.tick(scenario.tick_ms);
        canvas.clear();
        stage.paint(&mut canvas);
    }

    info!(
        "Ran {} ticks of {} ms; last frame drew {} commands",
        stage.tick_count(),
        scenario.tick_ms,
        canvas.commands().len()
    );
    for unit in stage.units() {
        info!(
            "{} {} at {} (target {}, {}, cooldown {} ms)",
            unit.name(),
            unit.id(),
            unit.position(),
            unit.target(),
            if unit.is_moving() { "moving" } else { "arrived" },
            unit.cooldown()
        );
    }

    if let Some([x, y]) = args.click.as_deref() {
        let point = IVec2::new(*x, *y);
        match stage.pointer(PointerEvent::Clicked(point)) {
            Some(id) => info!("Click at {point} selected unit {id}"),
            None => info!("Click at {point} hit no unit"),
        }
    }
    Ok(())
}
