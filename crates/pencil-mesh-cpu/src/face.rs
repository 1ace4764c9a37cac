use pencil_geom::Vec3;
use pencil_grid::Direction;

use crate::constants::{FACE_CORNERS, UNIT_CUBE_VERTICES};

/// One quad about to be appended to a mesh. Lives only between culling and
/// emission.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceDescriptor {
    pub direction: Direction,
    pub vertices: [Vec3; 4],
    /// Buffer indices the four vertices will occupy.
    pub indices: [u32; 4],
}

impl FaceDescriptor {
    /// Builds the quad for `direction` of the cube with the given half
    /// extents centred at `position`. `base` is the index of its first vertex.
    pub fn for_cube(direction: Direction, half_extents: Vec3, position: Vec3, base: u32) -> Self {
        let corners = FACE_CORNERS[direction.index()];
        let vertices = corners.map(|c| UNIT_CUBE_VERTICES[c].scale(half_extents) + position);
        Self {
            direction,
            vertices,
            indices: [base, base + 1, base + 2, base + 3],
        }
    }

    /// Outward normal from the quad winding.
    #[inline]
    pub fn winding_normal(&self) -> Vec3 {
        let [a, b, c, _] = self.vertices;
        (b - a).cross(c - a).normalized()
    }
}
