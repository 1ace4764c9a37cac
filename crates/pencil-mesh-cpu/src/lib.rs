//! CPU meshing crate: turns an occupancy grid into a face-culled cube mesh.
#![forbid(unsafe_code)]

mod constants;
mod emit;
mod face;
mod mesh_build;

use pencil_geom::Vec3;
use pencil_grid::{EmptyResult, OccupancyGrid, VoxelScale};

pub use constants::AUTHORING_TO_WORLD;
pub use emit::{exposed_face_count, face_exposed};
pub use face::FaceDescriptor;
pub use mesh_build::MeshBuild;

/// Grid-to-mesh strategy. Alternate strategies (coplanar face merging, for
/// instance) plug in here without touching callers.
pub trait VoxelMesher {
    fn build_mesh(&self, grid: &OccupancyGrid) -> Result<MeshBuild, EmptyResult>;
}

/// One box per painted cell, interior faces culled against the four planar
/// neighbours. Coplanar faces are not merged.
#[derive(Clone, Copy, Debug, Default)]
pub struct CubeVoxelMesher {
    scale: VoxelScale,
}

impl CubeVoxelMesher {
    pub fn new(scale: VoxelScale) -> Self {
        Self { scale }
    }

    #[inline]
    pub fn scale(&self) -> VoxelScale {
        self.scale
    }

    /// Half extents of one cell cube in authoring space.
    #[inline]
    fn half_extents(&self) -> Vec3 {
        let cell = self.scale.cell_size();
        Vec3::new(cell * 0.5, self.scale.extrusion_depth() * 0.5, cell * 0.5)
    }
}

impl VoxelMesher for CubeVoxelMesher {
    fn build_mesh(&self, grid: &OccupancyGrid) -> Result<MeshBuild, EmptyResult> {
        let cell = self.scale.cell_size();
        let half = self.half_extents();
        let mut mb = MeshBuild::default();
        mb.reserve_quads(grid.occupied_count() * 2);
        let (width, depth) = grid.extent();
        for b in 0..depth {
            for a in 0..width {
                if !grid.is_occupied(a, b) {
                    continue;
                }
                let position = Vec3::new(a as f32 * cell, 0.0, b as f32 * cell);
                emit::emit_cell_faces(&mut mb, grid, a, b, half, position);
            }
        }
        if mb.is_empty() {
            log::debug!(target: "mesh", "no painted cells in {}x{} grid", grid.width(), grid.depth());
            return Err(EmptyResult::new("generated mesh has no vertices"));
        }
        mb.finalize(&AUTHORING_TO_WORLD);
        log::debug!(
            target: "mesh",
            "built {} faces ({} triangles, {} vertices)",
            mb.face_count(),
            mb.triangle_count(),
            mb.vertex_count()
        );
        Ok(mb)
    }
}
