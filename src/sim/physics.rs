//! Collision physics
//!
//! Axis-aligned bounding-circle-vs-viewport-edge response: left wall, right
//! wall and floor. There is no ceiling. Every impact damps the speed by the
//! wall friction factor, capped at the entity's own radius, and a slow
//! enough floor bounce settles the entity into the resting state.

use super::entity::Entity;
use crate::consts::{REST_SPEED, WALL_FRICTION};

/// Viewport extents the entities bounce inside.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Rescale the entity's speed by `boost`, clamped to `[0, max_speed]`.
///
/// A motionless entity stays motionless: rescaling divides by the current
/// speed, so zero speed is a guarded no-op.
pub fn accelerate(entity: &mut Entity, boost: f32, max_speed: f32) {
    let speed = entity.vel.length();
    if speed == 0.0 {
        return;
    }
    let new_speed = (speed * boost).clamp(0.0, max_speed);
    entity.vel *= new_speed / speed;
}

/// Advance one entity by one frame.
///
/// Order matters: gravity, predictive edge tests (which may each fire
/// independently in a corner), rest-time accounting, integration, rotation.
pub fn update(entity: &mut Entity, gravity: f32, elapsed_ms: f32, bounds: &Bounds) {
    entity.vel.y += gravity;

    let radius = entity.radius;
    let predicted = entity.pos + entity.vel;

    if predicted.x - radius <= 0.0 {
        entity.pos.x = radius;
        entity.vel.x = -entity.vel.x;
        accelerate(entity, WALL_FRICTION, radius);
    }
    if predicted.x + radius >= bounds.width {
        entity.pos.x = bounds.width - radius;
        entity.vel.x = -entity.vel.x;
        accelerate(entity, WALL_FRICTION, radius);
    }
    if predicted.y + radius >= bounds.height {
        entity.pos.y = bounds.height - radius;
        entity.vel.y = -entity.vel.y;
        accelerate(entity, WALL_FRICTION, radius);
        // Slow enough to stop bouncing
        if entity.vel.y.abs() <= REST_SPEED {
            entity.vel.y = 0.0;
        }
    }

    // Resting on the floor eats into the remaining ttl, floored at zero.
    if entity.vel.y == 0.0 {
        entity.ttl_ms = (entity.ttl_ms - elapsed_ms as i32).max(0);
    }

    entity.pos += entity.vel;
    entity.rotation += entity.vel.x;
}
