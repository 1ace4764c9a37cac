use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pencil_collider::{ColliderMode, PhysicsMaterial};
use pencil_geom::Vec3;
use pencil_grid::{InvalidConfiguration, VoxelScale};
use pencil_pivot::{PivotPolicy, TransformCorrection};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] InvalidConfiguration),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub root: PathBuf,
    pub folder: String,
    pub name: String,
    /// Persist the grid every time an object is generated.
    pub save: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            folder: "MeshDatas".to_string(),
            name: "MyMeshName".to_string(),
            save: false,
        }
    }
}

/// Everything that shapes one generated object, read from `pencil.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PencilConfig {
    pub cell_size: f32,
    pub extrusion_depth: f32,
    pub collider: ColliderMode,
    pub add_rigid_body: bool,
    pub physics_material: Option<PhysicsMaterial>,
    pub pivot: PivotPolicy,
    /// Line cell centres up with the painted pixels of the canvas.
    pub adjust_to_canvas: bool,
    pub canvas_origin: Vec3,
    pub correction: TransformCorrection,
    pub storage: StorageConfig,
}

impl Default for PencilConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            extrusion_depth: 1.0,
            collider: ColliderMode::None,
            add_rigid_body: false,
            physics_material: None,
            pivot: PivotPolicy::Default,
            adjust_to_canvas: false,
            canvas_origin: Vec3::ZERO,
            correction: TransformCorrection::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl PencilConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: PencilConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<VoxelScale, InvalidConfiguration> {
        VoxelScale::new(self.cell_size, self.extrusion_depth)
    }
}

/// Reads `path` if it exists, else falls back to defaults.
pub fn load_config(path: &Path) -> Result<PencilConfig, ConfigError> {
    if !path.exists() {
        log::info!(target: "config", "config {path:?} not found, using defaults");
        return Ok(PencilConfig::default());
    }
    PencilConfig::from_path(path)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records `(target, message)` pairs for every enabled log call.
    struct Capture(Mutex<Vec<(String, String)>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push((record.target().to_string(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn missing_config_logs_under_config_target() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Info);
        let tmp = tempfile::tempdir().unwrap();
        let cfg = load_config(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, PencilConfig::default());
        let lines = CAPTURE.0.lock().unwrap();
        assert!(
            lines
                .iter()
                .any(|(target, msg)| target == "config" && msg.contains("absent.toml")),
            "{lines:?}"
        );
    }

    #[test]
    fn empty_config_is_default() {
        let cfg = PencilConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PencilConfig::default());
        assert_eq!(cfg.storage.folder, "MeshDatas");
        assert_eq!(cfg.storage.name, "MyMeshName");
    }

    #[test]
    fn full_config_parses() {
        let cfg = PencilConfig::from_toml_str(
            r#"
cell_size = 0.5
extrusion_depth = 2.0
collider = "dynamic"
add_rigid_body = true
physics_material = "rubber"
pivot = "lower-left"
adjust_to_canvas = true
canvas_origin = [1.0, 2.0, 3.0]

[correction]
scale = [2.0, 2.0, 2.0]

[storage]
root = "out"
name = "cup"
save = true
"#,
        )
        .unwrap();
        assert_eq!(cfg.collider, ColliderMode::Dynamic);
        assert_eq!(cfg.physics_material, Some(PhysicsMaterial("rubber".into())));
        assert_eq!(cfg.pivot, PivotPolicy::LowerLeft);
        assert_eq!(cfg.canvas_origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cfg.correction.rotation, None);
        assert_eq!(cfg.correction.scale, Some(Vec3::new(2.0, 2.0, 2.0)));
        assert_eq!(cfg.storage.folder, "MeshDatas");
        assert!(cfg.storage.save);
        let scale = cfg.validate().unwrap();
        assert_eq!(scale.cell_size(), 0.5);
    }

    #[test]
    fn rejects_non_positive_scale() {
        let err = PencilConfig::from_toml_str("cell_size = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(InvalidConfiguration::CellSize(_))
        ));
        let err = PencilConfig::from_toml_str("extrusion_depth = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(InvalidConfiguration::ExtrusionDepth(_))
        ));
    }

    #[test]
    fn rejects_unknown_pivot() {
        assert!(matches!(
            PencilConfig::from_toml_str("pivot = \"center\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
