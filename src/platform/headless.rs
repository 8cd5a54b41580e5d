//! Headless backend
//!
//! A recording render target and a scripted event source. Used by the demo
//! binary and by every test that needs to observe what the frame loop did
//! without a real window.

use std::collections::VecDeque;

use super::{Event, EventSource, RenderTarget};
use crate::mesh::Triangle;

/// Render target that counts calls instead of drawing.
#[derive(Debug, Default)]
pub struct HeadlessTarget {
    width: f32,
    height: f32,
    /// Triangles drawn since the last clear
    pub frame_triangles: u64,
    /// Triangles drawn over the target's lifetime
    pub total_triangles: u64,
    pub clears: u64,
    pub presents: u64,
    /// Last reposition request, if any
    pub position: Option<(i32, i32)>,
}

impl HeadlessTarget {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl RenderTarget for HeadlessTarget {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.frame_triangles = 0;
    }

    fn draw_triangle(&mut self, _tri: &Triangle) {
        self.frame_triangles += 1;
        self.total_triangles += 1;
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn reposition(&mut self, x: i32, y: i32) {
        self.position = Some((x, y));
    }
}

/// Event source fed from a queue, with an optional quit deadline.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Event>,
    quit_after_frames: Option<u64>,
    frames_polled: u64,
}

impl ScriptedEvents {
    /// No events, ever.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Deliver the given events on the first frame, in order.
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            queue: events.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Deliver a quit signal once `frames` frames have drained the queue.
    pub fn quit_after(frames: u64) -> Self {
        Self {
            quit_after_frames: Some(frames),
            ..Self::default()
        }
    }

    /// Queue an event for the next poll.
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Option<Event> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }
        // An empty poll marks the end of one frame's drain.
        self.frames_polled += 1;
        if let Some(deadline) = self.quit_after_frames {
            if self.frames_polled > deadline {
                self.queue.push_back(Event::Quit);
                return self.queue.pop_front();
            }
        }
        None
    }
}
