//! Entity lifecycle
//!
//! An entity owns a mutable copy of its template mesh and reuses it as a
//! scratch buffer every frame: `render` writes the draw-time transform into
//! each triangle in place before handing it to the rasterizer.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::error::{Error, Result};
use crate::mesh::{MeshTemplate, Triangle};
use crate::platform::RenderTarget;

/// One simulated wireframe object.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Identity; two entities are equal iff their ids match.
    id: u32,
    /// Owned copy of the template geometry, mutated in place when rendering
    mesh: Vec<Triangle>,
    /// Center position in viewport coordinates
    pub pos: Vec2,
    pub vel: Vec2,
    /// Angle accumulator, fed by horizontal velocity
    pub rotation: f32,
    pub scale: f32,
    /// Bounding radius, fixed at creation
    pub radius: f32,
    /// Remaining rest time before forced recycling, in milliseconds
    pub ttl_ms: i32,
}

impl Entity {
    /// Create an entity from a template.
    ///
    /// The radius is half the template's x extent (envelope including the
    /// origin) at entity scale, plus a fixed padding. Spawn velocity is
    /// drawn from the given generator.
    pub fn new(id: u32, template: &MeshTemplate, rng: &mut Pcg32) -> Result<Self> {
        if template.triangles.is_empty() {
            return Err(Error::EmptyTemplate(template.name));
        }

        let (xmin, xmax) = template.x_extent();
        let radius = (xmax - xmin) as f32 / 2.0 * ENTITY_SCALE + RADIUS_PADDING;

        Ok(Self {
            id,
            mesh: template.triangles.to_vec(),
            pos: Vec2::new(SPAWN_X, SPAWN_Y),
            vel: Vec2::new(
                rng.random_range(SPAWN_VX_MIN..=SPAWN_VX_MAX) as f32,
                rng.random_range(0..=SPAWN_VY_MAX) as f32,
            ),
            rotation: 0.0,
            scale: ENTITY_SCALE,
            radius,
            ttl_ms: ENTITY_TTL_MS,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// True once the entity has used up its rest time.
    pub fn expired(&self) -> bool {
        self.ttl_ms <= 0
    }

    pub fn mesh(&self) -> &[Triangle] {
        &self.mesh
    }

    /// Stamp the current transform into every owned triangle and draw it.
    ///
    /// Position is integer-truncated at draw time; the float state is not
    /// rounded.
    pub fn render(&mut self, target: &mut dyn RenderTarget) {
        for tri in &mut self.mesh {
            tri.tx = self.pos.x as i32;
            tri.ty = self.pos.y as i32;
            tri.rotation = self.rotation;
            tri.scale = self.scale;
            target.draw_triangle(tri);
        }
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
