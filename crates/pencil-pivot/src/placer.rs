use pencil_geom::Vec3;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::border::{BorderExtremes, TouchPoint};
use crate::error::PivotError;
use crate::gesture::DrawHistory;
use crate::policy::PivotPolicy;
use crate::transform::Transform;

/// A new parent node for the mesh.
///
/// `anchor` starts at the mesh node's rotation with unit scale; the mesh keeps
/// its world position, so its offset under the anchor is `mesh_local`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub anchor: Transform,
    pub mesh_local: Vec3,
}

#[derive(Clone, Copy, Debug)]
pub struct PivotPlacer {
    cell_size: f32,
}

impl PivotPlacer {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Offset from the mesh node to the outer edge of grid index `p`. Cell
    /// centres sit on integer multiples of the cell size, so edges are half a
    /// cell back.
    #[inline]
    pub fn index_offset(&self, p: TouchPoint) -> Vec3 {
        let half = self.cell_size / 2.0;
        Vec3::new(
            p.horizontal as f32 * self.cell_size - half,
            p.vertical as f32 * self.cell_size - half,
            0.0,
        )
    }

    /// Computes the anchor for `policy`, or `None` for the default policy.
    ///
    /// Touching policies draw a fresh random touch point on every call.
    pub fn place<R: Rng + ?Sized>(
        &self,
        policy: PivotPolicy,
        borders: &BorderExtremes,
        mesh: &Transform,
        history: &DrawHistory,
        rng: &mut R,
    ) -> Result<Option<Placement>, PivotError> {
        let anchor_pos = if let Some((h, v)) = policy.corner() {
            let idx = TouchPoint::new(borders.extreme(h), borders.extreme(v));
            mesh.position + self.index_offset(idx)
        } else if let Some(side) = policy.touching_side() {
            let idx = borders
                .touches(side)
                .choose(rng)
                .copied()
                .ok_or(PivotError::NoTouchPoints { side })?;
            mesh.position + self.index_offset(idx)
        } else if policy.uses_draw_point() {
            let point = match policy {
                PivotPolicy::StartDrawPoint => history.start_in_canvas(),
                _ => history.finish_in_canvas(),
            };
            let p = point.ok_or(PivotError::MissingGesturePoint { policy })?;
            Vec3::new(p.x, p.y, mesh.position.z)
        } else {
            return Ok(None);
        };

        let anchor = Transform {
            position: anchor_pos,
            rotation_euler_deg: mesh.rotation_euler_deg,
            scale: Vec3::ONE,
        };
        log::debug!(target: "pivot", "{policy:?} anchor at {anchor_pos:?}");
        Ok(Some(Placement {
            anchor,
            mesh_local: mesh.position - anchor_pos,
        }))
    }
}
