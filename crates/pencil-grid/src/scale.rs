use crate::error::InvalidConfiguration;

/// Validated world-space sizing of one grid cell.
///
/// `cell_size` is the edge length of a cell in the canvas plane and
/// `extrusion_depth` the full thickness of the solid along the extrusion axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelScale {
    cell_size: f32,
    extrusion_depth: f32,
}

impl VoxelScale {
    pub fn new(cell_size: f32, extrusion_depth: f32) -> Result<Self, InvalidConfiguration> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(InvalidConfiguration::CellSize(cell_size));
        }
        if !(extrusion_depth.is_finite() && extrusion_depth > 0.0) {
            return Err(InvalidConfiguration::ExtrusionDepth(extrusion_depth));
        }
        Ok(Self {
            cell_size,
            extrusion_depth,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn extrusion_depth(&self) -> f32 {
        self.extrusion_depth
    }
}

impl Default for VoxelScale {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            extrusion_depth: 1.0,
        }
    }
}
