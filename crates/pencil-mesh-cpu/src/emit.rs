use pencil_geom::Vec3;
use pencil_grid::{Direction, OccupancyGrid};

use crate::face::FaceDescriptor;
use crate::mesh_build::MeshBuild;

/// True when the face of `(a, b)` through `dir` is on the boundary of the
/// solid. Off-plane faces are always exposed.
#[inline]
pub fn face_exposed(grid: &OccupancyGrid, a: i32, b: i32, dir: Direction) -> bool {
    grid.neighbor(a, b, dir) == 0
}

/// Emits every exposed face of the cell cube centred at `position`.
/// Returns how many quads were written.
pub(crate) fn emit_cell_faces(
    mb: &mut MeshBuild,
    grid: &OccupancyGrid,
    a: i32,
    b: i32,
    half_extents: Vec3,
    position: Vec3,
) -> usize {
    let mut emitted = 0;
    for dir in Direction::ALL {
        if !face_exposed(grid, a, b, dir) {
            continue;
        }
        let face = FaceDescriptor::for_cube(dir, half_extents, position, mb.next_index());
        mb.push_face(&face);
        emitted += 1;
    }
    emitted
}

/// Brute-force count of boundary faces over all occupied cells.
pub fn exposed_face_count(grid: &OccupancyGrid) -> usize {
    grid.iter_occupied()
        .map(|(a, b)| {
            Direction::ALL
                .iter()
                .filter(|&&dir| face_exposed(grid, a, b, dir))
                .count()
        })
        .sum()
}
