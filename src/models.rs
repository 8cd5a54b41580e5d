//! Built-in wireframe templates
//!
//! Model-space vertex data for the two stock shapes. Both are centered on
//! the origin; entity radii are derived from the x extent at creation time.

use crate::mesh::{MeshTemplate, Triangle};

const fn tri(ax: i32, ay: i32, bx: i32, by: i32, cx: i32, cy: i32) -> Triangle {
    Triangle::from_vertices(ax, ay, bx, by, cx, cy)
}

/// Eight-segment wireframe disc, radius 100.
pub static SPHERE: MeshTemplate = MeshTemplate {
    name: "sphere",
    triangles: &[
        tri(0, 0, 100, 0, 71, 71),
        tri(0, 0, 71, 71, 0, 100),
        tri(0, 0, 0, 100, -71, 71),
        tri(0, 0, -71, 71, -100, 0),
        tri(0, 0, -100, 0, -71, -71),
        tri(0, 0, -71, -71, 0, -100),
        tri(0, 0, 0, -100, 71, -71),
        tri(0, 0, 71, -71, 100, 0),
    ],
};

/// Blocky teapot silhouette: body, spout, handle, lid and knob.
pub static TEAPOT: MeshTemplate = MeshTemplate {
    name: "teapot",
    triangles: &[
        // body
        tri(-70, 50, 70, 50, 70, -20),
        tri(-70, 50, 70, -20, -70, -20),
        // spout, reaching out to x = 110
        tri(70, -10, 110, -30, 70, 10),
        tri(70, 10, 110, -30, 110, -10),
        // handle, reaching out to x = -110
        tri(-70, -10, -110, -20, -70, 20),
        tri(-70, 20, -110, -20, -110, 0),
        // lid and knob
        tri(-30, -20, 30, -20, 0, -45),
        tri(-8, -45, 8, -45, 0, -58),
        // base
        tri(-50, 50, 50, 50, 0, 60),
    ],
};

/// Default template set the simulation spawns from.
pub static TEMPLATES: [&MeshTemplate; 2] = [&SPHERE, &TEAPOT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_spans_minus_100_to_100() {
        assert_eq!(SPHERE.x_extent(), (-100, 100));
    }

    #[test]
    fn teapot_spans_minus_110_to_110() {
        assert_eq!(TEAPOT.x_extent(), (-110, 110));
    }

    #[test]
    fn templates_are_non_empty() {
        for template in TEMPLATES {
            assert!(!template.triangles.is_empty(), "{}", template.name);
        }
    }
}
