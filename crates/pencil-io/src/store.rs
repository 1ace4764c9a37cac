use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pencil_grid::{GridError, OccupancyGrid};
use thiserror::Error;

pub const GRID_FILE_EXTENSION: &str = "dpd";

const HEADER_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no persisted grid at {path:?}")]
    MissingPersistedData { path: PathBuf },
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("grid data truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("grid data has {extra} trailing bytes")]
    TrailingBytes { extra: usize },
    #[error("grid {width}x{depth} does not fit the file header")]
    TooLarge { width: usize, depth: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// `width: u32 LE`, `depth: u32 LE`, then the cells row-major, one byte each.
pub fn encode_grid(grid: &OccupancyGrid) -> Result<Vec<u8>, StoreError> {
    let too_large = || StoreError::TooLarge {
        width: grid.width(),
        depth: grid.depth(),
    };
    let w = u32::try_from(grid.width()).map_err(|_| too_large())?;
    let d = u32::try_from(grid.depth()).map_err(|_| too_large())?;
    let mut out = Vec::with_capacity(HEADER_LEN + grid.as_flat().len());
    out.extend_from_slice(&w.to_le_bytes());
    out.extend_from_slice(&d.to_le_bytes());
    out.extend_from_slice(grid.as_flat());
    Ok(out)
}

pub fn decode_grid(bytes: &[u8]) -> Result<OccupancyGrid, StoreError> {
    if bytes.len() < HEADER_LEN {
        return Err(StoreError::Truncated {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    let (header, body) = bytes.split_at(HEADER_LEN);
    let mut w = [0u8; 4];
    let mut d = [0u8; 4];
    w.copy_from_slice(&header[..4]);
    d.copy_from_slice(&header[4..]);
    let width = u32::from_le_bytes(w) as usize;
    let depth = u32::from_le_bytes(d) as usize;
    let max = i32::MAX as usize;
    if width > max || depth > max {
        return Err(StoreError::TooLarge { width, depth });
    }
    let expected = width
        .checked_mul(depth)
        .ok_or(StoreError::TooLarge { width, depth })?;
    if body.len() < expected {
        return Err(StoreError::Truncated {
            expected: HEADER_LEN + expected,
            actual: bytes.len(),
        });
    }
    if body.len() > expected {
        return Err(StoreError::TrailingBytes {
            extra: body.len() - expected,
        });
    }
    Ok(OccupancyGrid::from_flat(width, depth, body)?)
}

/// Grids stored as `<root>/<folder>/<name>.dpd`.
#[derive(Clone, Debug)]
pub struct GridStore {
    root: PathBuf,
}

impl GridStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, folder: &str, name: &str) -> PathBuf {
        self.root
            .join(folder)
            .join(format!("{name}.{GRID_FILE_EXTENSION}"))
    }

    pub fn exists(&self, folder: &str, name: &str) -> bool {
        self.path_for(folder, name).is_file()
    }

    /// Writes `grid`, creating the folder and retrying once if it is missing.
    pub fn save(
        &self,
        folder: &str,
        name: &str,
        grid: &OccupancyGrid,
    ) -> Result<PathBuf, StoreError> {
        let path = self.path_for(folder, name);
        let bytes = encode_grid(grid)?;
        match fs::write(&path, &bytes) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let dir = self.root.join(folder);
                log::warn!(target: "store", "directory {dir:?} missing, creating it");
                fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
                    path: dir.clone(),
                    source,
                })?;
                fs::write(&path, &bytes).map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        }
        log::info!(
            target: "store",
            "saved {}x{} grid to {path:?}",
            grid.width(),
            grid.depth()
        );
        Ok(path)
    }

    pub fn load(&self, folder: &str, name: &str) -> Result<OccupancyGrid, StoreError> {
        let path = self.path_for(folder, name);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::MissingPersistedData { path });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let grid = decode_grid(&bytes)?;
        log::debug!(
            target: "store",
            "loaded {}x{} grid from {path:?}",
            grid.width(),
            grid.depth()
        );
        Ok(grid)
    }
}
