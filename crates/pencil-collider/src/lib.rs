//! Collision volumes for painted grids: greedy per-row run merging.
#![forbid(unsafe_code)]

mod merge;
mod mode;
mod volume;

pub use merge::{ColliderCreator, RunLengthColliderCreator};
pub use mode::{ColliderMode, CollisionShape, build_collision};
pub use volume::{BoxVolume, PhysicsMaterial};
