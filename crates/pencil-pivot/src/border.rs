use pencil_grid::OccupancyGrid;

/// One of the four sides of the painted region's bounding box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];
}

/// Grid coordinate of a touch point. `horizontal` runs along the column axis
/// (B), `vertical` along the row axis (A).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TouchPoint {
    pub horizontal: i32,
    pub vertical: i32,
}

impl TouchPoint {
    #[inline]
    pub const fn new(horizontal: i32, vertical: i32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Bounding extremes of the painted cells plus every cell touching each side.
///
/// `right` and `top` are exclusive (one past the last painted index).
/// Touch points on those two sides use the same convention, so they are
/// `(b + 1, a + 1)` of the painted cell; left and bottom touch points are the
/// raw `(b, a)`. Corner anchors built from these values land on the outer
/// edges of the painted region.
///
/// An all-empty grid keeps the sentinels `left = depth`, `right = 1`,
/// `top = 1`, `bottom = depth` and has no touch points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderExtremes {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub left_touches: Vec<TouchPoint>,
    pub right_touches: Vec<TouchPoint>,
    pub top_touches: Vec<TouchPoint>,
    pub bottom_touches: Vec<TouchPoint>,
}

impl BorderExtremes {
    pub fn touches(&self, side: Side) -> &[TouchPoint] {
        match side {
            Side::Left => &self.left_touches,
            Side::Right => &self.right_touches,
            Side::Top => &self.top_touches,
            Side::Bottom => &self.bottom_touches,
        }
    }

    /// Extreme index for `side`, in the same convention as its touch points.
    pub fn extreme(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    /// Grid cell `(a, b)` a touch point on `side` was recorded for.
    pub fn touch_cell(side: Side, p: TouchPoint) -> (i32, i32) {
        match side {
            Side::Left | Side::Bottom => (p.vertical, p.horizontal),
            Side::Right | Side::Top => (p.vertical - 1, p.horizontal - 1),
        }
    }

    /// True when no painted cell was found.
    pub fn is_degenerate(&self) -> bool {
        Side::ALL.iter().all(|&s| self.touches(s).is_empty())
    }
}

/// Two passes over the grid: extremes first, then every painted cell that
/// sits on one of them.
///
/// Rows are scanned from the last towards row 0, columns left to right; touch
/// lists keep that order.
pub fn analyze_borders(grid: &OccupancyGrid) -> BorderExtremes {
    let (width, depth) = grid.extent();

    let mut left = depth;
    let mut right = 0;
    let mut top = 0;
    // Painted rows may all lie above the column-count sentinel.
    let mut lowest: Option<i32> = None;

    for a in (0..width).rev() {
        for b in 0..depth {
            if !grid.is_occupied(a, b) {
                continue;
            }
            left = left.min(b);
            right = right.max(b);
            top = top.max(a);
            lowest = Some(lowest.map_or(a, |m| m.min(a)));
        }
    }
    let bottom = lowest.unwrap_or(depth);

    let mut out = BorderExtremes {
        left,
        right: right + 1,
        top: top + 1,
        bottom,
        left_touches: Vec::new(),
        right_touches: Vec::new(),
        top_touches: Vec::new(),
        bottom_touches: Vec::new(),
    };

    for a in (0..width).rev() {
        for b in 0..depth {
            if !grid.is_occupied(a, b) {
                continue;
            }
            if b == left {
                out.left_touches.push(TouchPoint::new(b, a));
            }
            if b == right {
                out.right_touches.push(TouchPoint::new(b + 1, a + 1));
            }
            if a == top {
                out.top_touches.push(TouchPoint::new(b + 1, a + 1));
            }
            if a == bottom {
                out.bottom_touches.push(TouchPoint::new(b, a));
            }
        }
    }

    log::debug!(
        target: "pivot",
        "borders l={} r={} t={} b={} touches={}/{}/{}/{}",
        out.left,
        out.right,
        out.top,
        out.bottom,
        out.left_touches.len(),
        out.right_touches.len(),
        out.top_touches.len(),
        out.bottom_touches.len()
    );
    out
}
