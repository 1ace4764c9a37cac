use pencil_geom::Vec3;
use pencil_grid::{EmptyResult, OccupancyGrid, VoxelScale};

use crate::volume::{BoxVolume, PhysicsMaterial};

/// Grid-to-volumes strategy. A 2D rectangle packer could replace the run
/// merger behind this trait.
pub trait ColliderCreator {
    fn create_colliders(
        &self,
        grid: &OccupancyGrid,
        material: Option<&PhysicsMaterial>,
    ) -> Result<Vec<BoxVolume>, EmptyResult>;
}

/// Single pass, one box per contiguous run of painted cells within a row.
/// Runs never merge across rows.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunLengthColliderCreator {
    scale: VoxelScale,
}

impl RunLengthColliderCreator {
    pub fn new(scale: VoxelScale) -> Self {
        Self { scale }
    }

    fn start_run(&self, a: usize, b: usize, material: Option<&PhysicsMaterial>) -> BoxVolume {
        let cell = self.scale.cell_size();
        BoxVolume {
            position: Vec3::new(b as f32 * cell, a as f32 * cell, 0.0),
            center: Vec3::ZERO,
            size: Vec3::new(cell, cell, self.scale.extrusion_depth()),
            row: a,
            start_column: b,
            cells: 0,
            material: material.cloned(),
        }
    }

    #[inline]
    fn finish_run(&self, mut run: BoxVolume) -> BoxVolume {
        run.center = Vec3::new((run.size.x - self.scale.cell_size()) / 2.0, 0.0, 0.0);
        run
    }
}

impl ColliderCreator for RunLengthColliderCreator {
    fn create_colliders(
        &self,
        grid: &OccupancyGrid,
        material: Option<&PhysicsMaterial>,
    ) -> Result<Vec<BoxVolume>, EmptyResult> {
        let cell = self.scale.cell_size();
        let depth = grid.depth();
        let mut out = Vec::new();
        for a in 0..grid.width() {
            let Some(row) = grid.row(a) else {
                continue;
            };
            let mut active: Option<BoxVolume> = None;
            for (b, &cell_value) in row.iter().enumerate() {
                if cell_value != 1 {
                    if let Some(run) = active.take() {
                        out.push(self.finish_run(run));
                    }
                    continue;
                }
                let run = active.get_or_insert_with(|| self.start_run(a, b, material));
                run.cells += 1;
                run.size.x = run.cells as f32 * cell;
                // The row edge closes any open run.
                if b + 1 == depth {
                    if let Some(run) = active.take() {
                        out.push(self.finish_run(run));
                    }
                }
            }
        }
        if out.is_empty() {
            return Err(EmptyResult::new("no painted cells to build colliders from"));
        }
        log::debug!(
            target: "collider",
            "merged {} cells into {} boxes",
            grid.occupied_count(),
            out.len()
        );
        Ok(out)
    }
}
