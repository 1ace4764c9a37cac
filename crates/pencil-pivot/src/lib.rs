//! Border extremes of a painted region and anchor placement on them.
#![forbid(unsafe_code)]

mod border;
mod error;
mod gesture;
mod placer;
mod policy;
mod transform;

pub use border::{BorderExtremes, Side, TouchPoint, analyze_borders};
pub use error::PivotError;
pub use gesture::{CanvasArea, DrawHistory};
pub use placer::{PivotPlacer, Placement};
pub use policy::PivotPolicy;
pub use transform::{Transform, TransformCorrection};
