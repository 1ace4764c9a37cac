//! Grid-to-object pipeline: mesh, collision, pivot and persistence in order.
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::time::Instant;

use pencil_collider::{
    ColliderCreator, CollisionShape, RunLengthColliderCreator, build_collision,
};
use pencil_geom::Vec3;
use pencil_grid::{EmptyResult, InvalidConfiguration, OccupancyGrid, VoxelScale};
use pencil_io::{GridStore, PencilConfig, StoreError};
use pencil_mesh_cpu::{CubeVoxelMesher, MeshBuild, VoxelMesher};
use pencil_pivot::{
    BorderExtremes, CanvasArea, DrawHistory, PivotError, PivotPlacer, PivotPolicy, Placement,
    Transform, analyze_borders,
};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Empty(#[from] EmptyResult),
    #[error(transparent)]
    Config(#[from] InvalidConfiguration),
    #[error(transparent)]
    Pivot(#[from] PivotError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseTimings {
    pub t_mesh_ms: u32,
    pub t_collider_ms: u32,
    pub t_pivot_ms: u32,
    pub t_total_ms: u32,
}

/// Everything produced for one finished drawing.
#[derive(Clone, Debug)]
pub struct GeneratedObject {
    pub mesh: MeshBuild,
    pub collision: Option<CollisionShape>,
    /// Mesh node transform. Local to `placement.anchor` when a pivot was
    /// placed, world space otherwise.
    pub mesh_transform: Transform,
    pub placement: Option<Placement>,
    pub borders: Option<BorderExtremes>,
    pub saved_to: Option<PathBuf>,
    pub timings: PhaseTimings,
}

impl GeneratedObject {
    /// The outermost node: the anchor if one was placed, else the mesh node.
    pub fn root_transform(&self) -> &Transform {
        match &self.placement {
            Some(p) => &p.anchor,
            None => &self.mesh_transform,
        }
    }
}

pub struct Pipeline {
    config: PencilConfig,
    scale: VoxelScale,
    mesher: Box<dyn VoxelMesher>,
    colliders: Box<dyn ColliderCreator>,
}

impl Pipeline {
    /// Validates the config up front so no grid is processed with a bad scale.
    pub fn new(config: PencilConfig) -> Result<Self, PipelineError> {
        let scale = config.validate()?;
        Ok(Self {
            config,
            scale,
            mesher: Box::new(CubeVoxelMesher::new(scale)),
            colliders: Box::new(RunLengthColliderCreator::new(scale)),
        })
    }

    pub fn with_mesher(mut self, mesher: Box<dyn VoxelMesher>) -> Self {
        self.mesher = mesher;
        self
    }

    pub fn with_collider_creator(mut self, creator: Box<dyn ColliderCreator>) -> Self {
        self.colliders = creator;
        self
    }

    #[inline]
    pub fn config(&self) -> &PencilConfig {
        &self.config
    }

    #[inline]
    pub fn scale(&self) -> VoxelScale {
        self.scale
    }

    /// Region in which draw samples count for the draw-point pivots.
    pub fn canvas_area(&self, grid: &OccupancyGrid) -> CanvasArea {
        CanvasArea::new(
            self.config.canvas_origin,
            grid.width(),
            grid.depth(),
            self.scale.cell_size(),
        )
    }

    /// Where the mesh node starts before any pivot is applied.
    pub fn mesh_transform(&self) -> Transform {
        if !self.config.adjust_to_canvas {
            return Transform::IDENTITY;
        }
        let half = self.scale.cell_size() / 2.0;
        Transform::at(self.config.canvas_origin + Vec3::new(half, half, 0.0))
    }

    pub fn generate(
        &self,
        grid: &OccupancyGrid,
        history: &DrawHistory,
    ) -> Result<GeneratedObject, PipelineError> {
        self.generate_with_rng(grid, history, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        grid: &OccupancyGrid,
        history: &DrawHistory,
        rng: &mut R,
    ) -> Result<GeneratedObject, PipelineError> {
        let t0 = Instant::now();
        let cfg = &self.config;

        let mesh = self.mesher.build_mesh(grid)?;
        let t_mesh = t0.elapsed();

        let t1 = Instant::now();
        let collision = build_collision(
            cfg.collider,
            grid,
            self.colliders.as_ref(),
            cfg.physics_material.as_ref(),
            cfg.add_rigid_body,
        )?;
        let t_collider = t1.elapsed();

        let t2 = Instant::now();
        let mut mesh_transform = self.mesh_transform();
        let (borders, mut placement) = if cfg.pivot != PivotPolicy::Default {
            let borders = analyze_borders(grid);
            let placement = PivotPlacer::new(self.scale.cell_size()).place(
                cfg.pivot,
                &borders,
                &mesh_transform,
                history,
                rng,
            )?;
            (Some(borders), placement)
        } else {
            (None, None)
        };
        if let Some(p) = &placement {
            mesh_transform.position = p.mesh_local;
        }
        match placement.as_mut() {
            Some(p) => cfg.correction.apply(&mut p.anchor),
            None => cfg.correction.apply(&mut mesh_transform),
        }
        let t_pivot = t2.elapsed();

        let saved_to = if cfg.storage.save {
            let store = GridStore::new(&cfg.storage.root);
            Some(store.save(&cfg.storage.folder, &cfg.storage.name, grid)?)
        } else {
            None
        };

        let timings = PhaseTimings {
            t_mesh_ms: t_mesh.as_millis() as u32,
            t_collider_ms: t_collider.as_millis() as u32,
            t_pivot_ms: t_pivot.as_millis() as u32,
            t_total_ms: t0.elapsed().as_millis() as u32,
        };
        log::info!(
            target: "pipeline",
            "generated {}x{} grid: faces={} boxes={} pivot={:?} total_ms={}",
            grid.width(),
            grid.depth(),
            mesh.face_count(),
            collision.as_ref().map_or(0, |c| c.volumes().len()),
            cfg.pivot,
            timings.t_total_ms
        );

        Ok(GeneratedObject {
            mesh,
            collision,
            mesh_transform,
            placement,
            borders,
            saved_to,
            timings,
        })
    }
}
