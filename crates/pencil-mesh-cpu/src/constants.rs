//! Fixed tables for the cube mesher. Centralizes the magic numbers.

use pencil_geom::{Mat3, Vec3};

/// Corners of the cube spanning `[-1, 1]` on every axis, in authoring space
/// (x = row axis A, y = extrusion axis, z = column axis B).
pub(crate) const UNIT_CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
];

/// Corner indices per face, indexed by `Direction::index()`. Each quad is
/// wound so `cross(v1 - v0, v2 - v0)` points out of the cube.
pub(crate) const FACE_CORNERS: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // North (+B)
    [5, 0, 3, 6], // East (+A)
    [4, 5, 6, 7], // South (-B)
    [1, 4, 7, 2], // West (-A)
    [5, 4, 1, 0], // Up (+extrusion)
    [3, 2, 7, 6], // Down (-extrusion)
];

/// Two triangles per quad, relative to the quad's first vertex.
pub(crate) const QUAD_TRIANGLES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Euler (0, 90, 90) applied Z then X then Y: `(x, y, z) -> (z, x, y)`.
/// Column axis B becomes world X, row axis A world Y, extrusion world Z.
pub const AUTHORING_TO_WORLD: Mat3 =
    Mat3::from_rows([[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
