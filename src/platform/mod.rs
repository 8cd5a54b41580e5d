//! Platform abstractions
//!
//! The simulation core draws and polls through these narrow traits; actual
//! rasterization, window management and input delivery live behind them.

pub mod headless;

pub use headless::{HeadlessTarget, ScriptedEvents};

use crate::mesh::Triangle;

/// A drawable surface plus its rasterizer entry point.
pub trait RenderTarget {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Fill the whole surface with the background color.
    fn clear(&mut self);

    /// Rasterize one triangle using its draw-time transform fields.
    fn draw_triangle(&mut self, tri: &Triangle);

    /// Push the finished frame to the display.
    fn present(&mut self);

    /// Ask the windowing layer to move the window. Pass-through; headless
    /// targets may ignore it.
    fn reposition(&mut self, _x: i32, _y: i32) {}
}

/// Signals the core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Stop the simulation and unwind everything.
    Quit,
    /// The window became visible; the core requests a reposition.
    WindowShown,
}

/// Non-blocking input event source.
pub trait EventSource {
    /// Next pending event, or `None` when the queue is drained.
    fn poll(&mut self) -> Option<Event>;
}
