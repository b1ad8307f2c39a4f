//! Headless idle-mode runs
//!
//! Drives a world with the autopilot at a fixed frame step and renders every
//! frame, tallying score events. Used by the native binary.

use crate::consts::DEMO_DT;
use crate::renderer::{Canvas, render_world};
use crate::sim::{GameEvent, TickInput, World, tick};

/// Outcome of a demo run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoSummary {
    pub frames: u32,
    pub scores: u32,
    pub kills: u32,
    pub final_score: i64,
}

/// Run `frames` idle-mode frames on `world`, drawing each onto `canvas`
pub fn run_demo<C: Canvas + ?Sized>(world: &mut World, frames: u32, canvas: &mut C) -> DemoSummary {
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut summary = DemoSummary::default();

    for _ in 0..frames {
        tick(world, &input, DEMO_DT);
        for event in &world.state.events {
            match event {
                GameEvent::Scored { .. } => summary.scores += 1,
                GameEvent::Killed { .. } => summary.kills += 1,
            }
        }
        render_world(world, canvas);
        summary.frames += 1;
    }

    summary.final_score = world.score();
    log::info!(
        "Demo finished after {} frames: {} crossings, {} catches, score {}",
        summary.frames,
        summary.scores,
        summary.kills,
        summary.final_score
    );
    summary
}
