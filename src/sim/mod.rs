//! Simulation core
//!
//! Entity lifecycle, collision physics and the frame loop. Everything here
//! is single-threaded and deterministic for a given seed: all randomness
//! flows through one seeded generator owned by the [`Simulation`].

pub mod entity;
pub mod physics;
pub mod tick;

pub use entity::Entity;
pub use physics::{Bounds, accelerate, update};
pub use tick::{FrameReport, SimPhase, Simulation, run};
