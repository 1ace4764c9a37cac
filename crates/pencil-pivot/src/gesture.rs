use pencil_geom::{Vec2, Vec3};

/// World-space rectangle covered by the drawing canvas.
///
/// Columns run along x and rows along y, starting at the canvas origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl CanvasArea {
    pub fn new(origin: Vec3, width: usize, depth: usize, cell_size: f32) -> Self {
        Self {
            min: Vec2::new(origin.x, origin.y),
            max: Vec2::new(
                origin.x + depth as f32 * cell_size,
                origin.y + width as f32 * cell_size,
            ),
        }
    }

    /// Inclusive on every edge. Ignores z.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        !(p.x < self.min.x || p.x > self.max.x || p.y < self.min.y || p.y > self.max.y)
    }

    /// Clamps x/y into the area, keeping z.
    #[inline]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z,
        )
    }
}

/// Cursor positions recorded over one drawing stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawHistory {
    start: Option<Vec3>,
    finish: Option<Vec3>,
    start_in_canvas: Option<Vec3>,
    finish_in_canvas: Option<Vec3>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a stroke, forgetting the previous one.
    pub fn begin(&mut self, p: Vec3) {
        *self = Self {
            start: Some(p),
            ..Self::default()
        };
    }

    /// Records a cursor sample; only samples inside `area` count.
    pub fn sample(&mut self, area: &CanvasArea, p: Vec3) {
        if !area.contains(p) {
            return;
        }
        if self.start_in_canvas.is_none() {
            self.start_in_canvas = Some(p);
        }
        self.finish_in_canvas = Some(p);
    }

    pub fn finish(&mut self, p: Vec3) {
        self.finish = Some(p);
    }

    #[inline]
    pub fn start(&self) -> Option<Vec3> {
        self.start
    }

    #[inline]
    pub fn finish_point(&self) -> Option<Vec3> {
        self.finish
    }

    /// First sample that landed inside the canvas.
    #[inline]
    pub fn start_in_canvas(&self) -> Option<Vec3> {
        self.start_in_canvas
    }

    /// Latest sample that landed inside the canvas.
    #[inline]
    pub fn finish_in_canvas(&self) -> Option<Vec3> {
        self.finish_in_canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> CanvasArea {
        // 2 rows, 4 columns of 0.5 at (1, 1)
        CanvasArea::new(Vec3::new(1.0, 1.0, 5.0), 2, 4, 0.5)
    }

    #[test]
    fn area_bounds_inclusive() {
        let a = area();
        assert_eq!(a.max, Vec2::new(3.0, 2.0));
        assert!(a.contains(Vec3::new(1.0, 1.0, 0.0)));
        assert!(a.contains(Vec3::new(3.0, 2.0, -9.0)));
        assert!(!a.contains(Vec3::new(3.01, 1.5, 0.0)));
        assert!(!a.contains(Vec3::new(2.0, 0.99, 0.0)));
    }

    #[test]
    fn clamp_keeps_z() {
        let p = area().clamp(Vec3::new(-4.0, 9.0, 7.0));
        assert_eq!(p, Vec3::new(1.0, 2.0, 7.0));
    }

    #[test]
    fn stroke_records_first_and_last_inside() {
        let a = area();
        let mut h = DrawHistory::new();
        h.begin(Vec3::new(0.0, 0.0, 0.0));
        h.sample(&a, Vec3::new(0.0, 0.0, 0.0));
        h.sample(&a, Vec3::new(1.5, 1.5, 0.0));
        h.sample(&a, Vec3::new(2.5, 1.5, 0.0));
        h.sample(&a, Vec3::new(9.0, 1.5, 0.0));
        h.finish(Vec3::new(9.0, 1.5, 0.0));
        assert_eq!(h.start(), Some(Vec3::new(0.0, 0.0, 0.0)));
        assert_eq!(h.start_in_canvas(), Some(Vec3::new(1.5, 1.5, 0.0)));
        assert_eq!(h.finish_in_canvas(), Some(Vec3::new(2.5, 1.5, 0.0)));
        assert_eq!(h.finish_point(), Some(Vec3::new(9.0, 1.5, 0.0)));
    }

    #[test]
    fn begin_resets_previous_stroke() {
        let a = area();
        let mut h = DrawHistory::new();
        h.begin(Vec3::ZERO);
        h.sample(&a, Vec3::new(1.5, 1.5, 0.0));
        h.finish(Vec3::ZERO);
        h.begin(Vec3::ONE);
        assert_eq!(h.start_in_canvas(), None);
        assert_eq!(h.finish_in_canvas(), None);
        assert_eq!(h.finish_point(), None);
        assert_eq!(h.start(), Some(Vec3::ONE));
    }
}
