use pencil_geom::{Aabb, Vec3};
use serde::Deserialize;

/// Opaque physics material handle, copied onto every generated volume.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PhysicsMaterial(pub String);

/// Axis-aligned collision box covering one horizontal run of painted cells.
///
/// `position` is the centre of the run's first cell in the mesh's local
/// frame; `center` offsets from there to the middle of the run, so the box's
/// left edge meets the first cell's left edge and its right edge the last
/// cell's right edge.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxVolume {
    pub position: Vec3,
    pub center: Vec3,
    /// Extent along the run axis, the row axis and the extrusion axis.
    pub size: Vec3,
    pub row: usize,
    pub start_column: usize,
    pub cells: usize,
    pub material: Option<PhysicsMaterial>,
}

impl BoxVolume {
    #[inline]
    pub fn world_center(&self) -> Vec3 {
        self.position + self.center
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.world_center(), self.size)
    }
}
