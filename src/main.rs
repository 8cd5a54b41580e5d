//! Demo entry point
//!
//! Runs the bouncing-entity simulation against the headless backend for a
//! fixed number of frames. Seed and frame count come from the command line:
//! `wireframe-bounce [seed] [frames]`.

use std::process;

use wireframe_bounce::consts::{VIEWPORT_H, VIEWPORT_W};
use wireframe_bounce::models::TEMPLATES;
use wireframe_bounce::platform::{HeadlessTarget, ScriptedEvents};
use wireframe_bounce::sim::{Simulation, run};

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random);
    let frames: u64 = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(600);

    log::info!("wireframe-bounce starting (seed {seed}, {frames} frames)");

    let mut target = HeadlessTarget::new(VIEWPORT_W, VIEWPORT_H);
    let mut events = ScriptedEvents::quit_after(frames);

    let mut sim = match Simulation::new(seed, &TEMPLATES) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("unable to start simulation: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&mut sim, &mut target, &mut events) {
        log::error!("simulation aborted: {e}");
        process::exit(1);
    }

    log::info!(
        "done: {} frames presented, {} triangles drawn",
        target.presents,
        target.total_triangles
    );
}
