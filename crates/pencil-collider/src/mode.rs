use pencil_geom::Aabb;
use pencil_grid::{EmptyResult, OccupancyGrid};
use serde::Deserialize;

use crate::merge::ColliderCreator;
use crate::volume::{BoxVolume, PhysicsMaterial};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColliderMode {
    #[default]
    None,
    /// The render mesh itself serves as a single static volume.
    #[serde(alias = "static-single-volume")]
    Static,
    /// Merged box volumes, optionally driven by a rigid body.
    #[serde(alias = "dynamic-merged-volumes")]
    Dynamic,
}

/// Collision output attached next to the generated mesh.
#[derive(Clone, Debug, PartialEq)]
pub enum CollisionShape {
    Mesh {
        material: Option<PhysicsMaterial>,
    },
    Boxes {
        volumes: Vec<BoxVolume>,
        rigid_body: bool,
    },
}

impl CollisionShape {
    pub fn volumes(&self) -> &[BoxVolume] {
        match self {
            CollisionShape::Mesh { .. } => &[],
            CollisionShape::Boxes { volumes, .. } => volumes,
        }
    }

    pub fn has_rigid_body(&self) -> bool {
        matches!(self, CollisionShape::Boxes { rigid_body: true, .. })
    }

    /// Union of all box volumes; `None` for a mesh collider.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut it = self.volumes().iter().map(BoxVolume::aabb);
        let first = it.next()?;
        Some(it.fold(first, |bb, b| bb.union(&b)))
    }
}

/// Produces the collision output for `mode`. A rigid body is only honoured
/// for merged volumes; asking for one in any other mode is dropped.
pub fn build_collision(
    mode: ColliderMode,
    grid: &OccupancyGrid,
    creator: &dyn ColliderCreator,
    material: Option<&PhysicsMaterial>,
    rigid_body: bool,
) -> Result<Option<CollisionShape>, EmptyResult> {
    if rigid_body && mode != ColliderMode::Dynamic {
        log::warn!(target: "collider", "rigid body ignored for collider mode {mode:?}");
    }
    match mode {
        ColliderMode::None => Ok(None),
        ColliderMode::Static => {
            if grid.is_empty() {
                return Err(EmptyResult::new("no painted cells to build a mesh collider from"));
            }
            Ok(Some(CollisionShape::Mesh {
                material: material.cloned(),
            }))
        }
        ColliderMode::Dynamic => {
            let volumes = creator.create_colliders(grid, material)?;
            Ok(Some(CollisionShape::Boxes {
                volumes,
                rigid_body,
            }))
        }
    }
}
