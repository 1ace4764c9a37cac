//! Occupancy grid: the painted canvas snapshot every pass reads from.
#![forbid(unsafe_code)]

mod direction;
mod error;
mod grid;
mod scale;

pub use direction::Direction;
pub use error::{EmptyResult, GridError, InvalidConfiguration};
pub use grid::OccupancyGrid;
pub use scale::VoxelScale;
