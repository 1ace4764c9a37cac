//! Grid persistence, TOML configuration and mesh export.
#![forbid(unsafe_code)]

pub mod config;
pub mod obj;
pub mod store;

pub use config::{ConfigError, PencilConfig, StorageConfig, load_config};
pub use obj::{mesh_to_obj_string, write_obj};
pub use store::{GRID_FILE_EXTENSION, GridStore, StoreError, decode_grid, encode_grid};
