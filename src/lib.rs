//! Wireframe Bounce - bouncing balls and teapots in a 2D viewport
//!
//! Core modules:
//! - `list`: generic ordered container with a versioned cursor
//! - `mesh`: triangle and mesh template types
//! - `models`: built-in sphere/teapot wireframe templates
//! - `sim`: entity lifecycle, collision physics, frame loop
//! - `platform`: render target and event source abstractions

pub mod error;
pub mod list;
pub mod mesh;
pub mod models;
pub mod platform;
pub mod sim;

pub use error::{Error, Result};
pub use list::{Cursor, List};

/// Simulation tuning constants
pub mod consts {
    /// Target frame duration in milliseconds (60 fps)
    pub const TARGET_FRAME_MS: f32 = 1000.0 / 60.0;

    /// Downward acceleration applied to vy every frame
    pub const GRAVITY: f32 = 0.25;
    /// Speed multiplier applied on every wall/floor impact
    pub const WALL_FRICTION: f32 = 0.7;
    /// Vertical speed at or below which a floor bounce settles to rest
    pub const REST_SPEED: f32 = 1.0;

    /// Where freshly created entities appear
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_Y: f32 = 100.0;
    /// Horizontal spawn velocity range (inclusive)
    pub const SPAWN_VX_MIN: i32 = 20;
    pub const SPAWN_VX_MAX: i32 = 70;
    /// Vertical spawn velocity upper bound (inclusive, lower bound 0)
    pub const SPAWN_VY_MAX: i32 = 2;

    /// Time an entity may rest on the floor before recycling, in ms
    pub const ENTITY_TTL_MS: i32 = 5000;
    /// Uniform mesh scale applied to every entity
    pub const ENTITY_SCALE: f32 = 0.1;
    /// Padding added to the derived radius so no vertex pokes past an edge
    pub const RADIUS_PADDING: f32 = 3.0;

    /// Initial population range (inclusive)
    pub const POPULATION_MIN: usize = 10;
    pub const POPULATION_MAX: usize = 19;

    /// Default viewport dimensions
    pub const VIEWPORT_W: f32 = 1500.0;
    pub const VIEWPORT_H: f32 = 800.0;
}
