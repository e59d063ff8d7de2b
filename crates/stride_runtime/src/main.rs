//! Stride Runtime
//!
//! Headless binary: loads settings, runs the demo level through the movement
//! pipeline at a fixed tick rate and logs what the player does.

mod demo;

use anyhow::{Context, Result};
use demo::DemoBody;
use stride_core::actuator::BodyActuator;
use stride_core::math::{Vec2, Vec4};
use stride_core::movement::JumpSource;
use stride_core::time::SimulationTime;
use stride_services::{PlayerController, Settings, TickReport};

const DEMO_SETTINGS: &str = include_str!("../settings/demo.json");

/// Uneven frame times, so fixed ticks sometimes run zero or two per frame.
const FRAME_TIMES: [f32; 4] = [0.016, 0.017, 0.033, 0.008];

const BODY_SIZE: Vec2 = Vec2::new(0.5, 0.5);
const BODY_COLOR: Vec4 = Vec4::ONE;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Summary {
    ticks: u64,
    jumps: u32,
    coyote_jumps: u32,
    buffered_jumps: u32,
    presses: u32,
    landings: u32,
}

impl Summary {
    fn record(&mut self, report: &TickReport, was_grounded: bool) {
        self.ticks += 1;
        if report.input.jump_pressed {
            self.presses += 1;
        }
        if report.grounded && !was_grounded {
            self.landings += 1;
        }
        if report.result.jumped {
            self.jumps += 1;
            if report.result.source == Some(JumpSource::Coyote) {
                self.coyote_jumps += 1;
            }
            if !report.input.jump_pressed {
                self.buffered_jumps += 1;
            }
        }
    }
}

fn load_settings() -> Result<Settings> {
    match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).with_context(|| format!("loading settings from {path}")),
        None => Settings::from_json_str(DEMO_SETTINGS).context("parsing built-in demo settings"),
    }
}

fn run(settings: &Settings) -> Result<Summary> {
    let config = settings.movement_config()?;
    let shape = settings.probe_shape()?;
    let ground = demo::level(settings.ground_probe.layer_mask);
    let script = demo::script();
    let script_ticks = script.len() as u64;

    let mut controller =
        PlayerController::new(config, shape, script, &ground).with_flash(settings.jump_flash()?);
    let mut body = DemoBody::standing_on(0.0, 0.0, BODY_SIZE);
    let mut step = settings.fixed_timestep()?;
    let mut time = SimulationTime::new();
    let mut summary = Summary::default();
    let mut was_grounded = true;

    tracing::info!(?config, ?shape, tick_secs = step.tick_secs(), "starting demo");

    for frame_dt in FRAME_TIMES.iter().cycle().copied() {
        if time.tick_count() >= script_ticks {
            break;
        }

        for _ in 0..step.accumulate(frame_dt) {
            if time.tick_count() >= script_ticks {
                break;
            }
            let dt = step.tick_secs();
            let report = controller.tick(dt, &mut body);
            body.integrate(dt, &ground);
            time.advance_tick(dt);

            log_transitions(time.tick_count(), &report, was_grounded, body.position());
            summary.record(&report, was_grounded);
            was_grounded = report.grounded;
        }

        let tint = controller
            .flash()
            .tint(BODY_COLOR, settings.feedback.flash_color);
        tracing::trace!(?tint, alpha = step.alpha(), "frame");
    }

    tracing::info!(
        ticks = summary.ticks,
        seconds = time.total_time().as_secs_f32(),
        "demo finished"
    );
    Ok(summary)
}

fn log_transitions(tick: u64, report: &TickReport, was_grounded: bool, position: Vec2) {
    if let Some(source) = report.result.source {
        let buffered = !report.input.jump_pressed;
        tracing::info!(tick, ?source, buffered, x = position.x, y = position.y, "jump");
    } else if report.input.jump_pressed {
        tracing::info!(tick, x = position.x, y = position.y, "jump pressed, waiting");
    }

    if report.grounded && !was_grounded {
        tracing::info!(tick, x = position.x, "landed");
    } else if !report.grounded && was_grounded && !report.result.jumped {
        tracing::info!(tick, x = position.x, "left ground");
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Stride v{}", stride_core::VERSION);
    let settings = load_settings()?;
    let summary = run(&settings)?;

    tracing::info!(
        jumps = summary.jumps,
        coyote = summary.coyote_jumps,
        buffered = summary.buffered_jumps,
        presses = summary.presses,
        landings = summary.landings,
        "summary"
    );

    Ok(())
}
