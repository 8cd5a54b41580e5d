//! Triangle and mesh template types
//!
//! A mesh is an ordered sequence of triangles with integer model-space
//! vertices centered on the origin. Each triangle also carries draw-time
//! transform fields that the owner writes in place every frame before
//! handing the triangle to the rasterizer.

use glam::IVec2;

/// One wireframe triangle: three model-space vertices plus the per-frame
/// draw transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: IVec2,
    pub b: IVec2,
    pub c: IVec2,
    /// Draw-time translation (integer-truncated world position)
    pub tx: i32,
    pub ty: i32,
    /// Draw-time rotation angle
    pub rotation: f32,
    /// Draw-time uniform scale
    pub scale: f32,
}

impl Triangle {
    /// Build a triangle from model-space vertex coordinates with an identity
    /// draw transform. `const` so templates can live in static data.
    pub const fn from_vertices(ax: i32, ay: i32, bx: i32, by: i32, cx: i32, cy: i32) -> Self {
        Self {
            a: IVec2::new(ax, ay),
            b: IVec2::new(bx, by),
            c: IVec2::new(cx, cy),
            tx: 0,
            ty: 0,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    pub fn vertices(&self) -> [IVec2; 3] {
        [self.a, self.b, self.c]
    }
}

/// Shared, read-only triangle list an entity copies its geometry from.
#[derive(Debug)]
pub struct MeshTemplate {
    pub name: &'static str,
    pub triangles: &'static [Triangle],
}

impl MeshTemplate {
    /// Min/max x envelope across all vertices. The envelope includes the
    /// origin, matching how entity radii are derived: templates are centered
    /// on (0,0).
    pub fn x_extent(&self) -> (i32, i32) {
        let mut xmin = 0;
        let mut xmax = 0;
        for tri in self.triangles {
            for v in tri.vertices() {
                xmin = xmin.min(v.x);
                xmax = xmax.max(v.x);
            }
        }
        (xmin, xmax)
    }
}
