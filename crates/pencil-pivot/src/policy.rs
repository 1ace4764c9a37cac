use serde::Deserialize;

use crate::border::Side;

/// Where the anchor of a generated solid goes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotPolicy {
    /// Leave the mesh node where it is; no anchor is created.
    #[default]
    Default,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    TouchingLeft,
    TouchingRight,
    TouchingUp,
    TouchingDown,
    StartDrawPoint,
    FinishDrawPoint,
}

impl PivotPolicy {
    pub const ALL: [PivotPolicy; 11] = [
        PivotPolicy::Default,
        PivotPolicy::UpperLeft,
        PivotPolicy::UpperRight,
        PivotPolicy::LowerLeft,
        PivotPolicy::LowerRight,
        PivotPolicy::TouchingLeft,
        PivotPolicy::TouchingRight,
        PivotPolicy::TouchingUp,
        PivotPolicy::TouchingDown,
        PivotPolicy::StartDrawPoint,
        PivotPolicy::FinishDrawPoint,
    ];

    /// Horizontal and vertical sides of a corner policy.
    pub fn corner(self) -> Option<(Side, Side)> {
        match self {
            PivotPolicy::UpperLeft => Some((Side::Left, Side::Top)),
            PivotPolicy::UpperRight => Some((Side::Right, Side::Top)),
            PivotPolicy::LowerLeft => Some((Side::Left, Side::Bottom)),
            PivotPolicy::LowerRight => Some((Side::Right, Side::Bottom)),
            _ => None,
        }
    }

    pub fn touching_side(self) -> Option<Side> {
        match self {
            PivotPolicy::TouchingLeft => Some(Side::Left),
            PivotPolicy::TouchingRight => Some(Side::Right),
            PivotPolicy::TouchingUp => Some(Side::Top),
            PivotPolicy::TouchingDown => Some(Side::Bottom),
            _ => None,
        }
    }

    #[inline]
    pub fn uses_draw_point(self) -> bool {
        matches!(
            self,
            PivotPolicy::StartDrawPoint | PivotPolicy::FinishDrawPoint
        )
    }
}
