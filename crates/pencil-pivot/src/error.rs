use thiserror::Error;

use crate::border::Side;
use crate::policy::PivotPolicy;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PivotError {
    #[error("no touch points on the {side:?} border")]
    NoTouchPoints { side: Side },
    #[error("pivot policy {policy:?} needs a draw point inside the canvas, none was recorded")]
    MissingGesturePoint { policy: PivotPolicy },
}
