use crate::direction::Direction;
use crate::error::GridError;

/// Dense `width x depth` field of painted (1) and empty (0) cells.
///
/// Axis A runs over `0..width` (rows), axis B over `0..depth` (columns).
/// Storage is row-major: `a * depth + b`. Any non-zero input byte is stored
/// as 1. Both dimensions fit in `i32`, so signed cell coordinates never
/// truncate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    depth: usize,
    cells: Vec<u8>,
}

/// Cell count for `width x depth`, rejecting shapes whose coordinates or
/// length do not fit.
fn checked_len(width: usize, depth: usize) -> Result<usize, GridError> {
    let max = i32::MAX as usize;
    if width > max || depth > max {
        return Err(GridError::TooLarge { width, depth });
    }
    width
        .checked_mul(depth)
        .ok_or(GridError::TooLarge { width, depth })
}

impl OccupancyGrid {
    /// All-empty grid.
    pub fn new(width: usize, depth: usize) -> Result<Self, GridError> {
        let len = checked_len(width, depth)?;
        Ok(Self {
            width,
            depth,
            cells: vec![0; len],
        })
    }

    /// Copies a flat row-major buffer.
    pub fn from_flat(width: usize, depth: usize, data: &[u8]) -> Result<Self, GridError> {
        let expected = checked_len(width, depth)?;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                width,
                depth,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            depth,
            cells: data.iter().map(|&v| u8::from(v != 0)).collect(),
        })
    }

    /// Copies a 2D buffer, one inner slice per row (axis A).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.len();
        let depth = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(checked_len(width, depth)?);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != depth {
                return Err(GridError::RaggedRow {
                    row,
                    expected: depth,
                    actual: r.len(),
                });
            }
            cells.extend(r.iter().map(|&v| u8::from(v != 0)));
        }
        Ok(Self {
            width,
            depth,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `(width, depth)` as signed coordinates bounds.
    #[inline]
    pub fn extent(&self) -> (i32, i32) {
        (self.width as i32, self.depth as i32)
    }

    #[inline]
    fn idx(&self, a: usize, b: usize) -> usize {
        a * self.depth + b
    }

    #[inline]
    pub fn contains(&self, a: i32, b: i32) -> bool {
        a >= 0 && b >= 0 && (a as usize) < self.width && (b as usize) < self.depth
    }

    /// Occupancy at `(a, b)`; out-of-range coordinates read as empty.
    #[inline]
    pub fn get(&self, a: i32, b: i32) -> u8 {
        if !self.contains(a, b) {
            return 0;
        }
        self.cells[self.idx(a as usize, b as usize)]
    }

    #[inline]
    pub fn is_occupied(&self, a: i32, b: i32) -> bool {
        self.get(a, b) == 1
    }

    /// Occupancy of the neighbour through `dir`. Steps off the plane or off
    /// the grid read as empty.
    #[inline]
    pub fn neighbor(&self, a: i32, b: i32, dir: Direction) -> u8 {
        if !dir.is_planar() {
            return 0;
        }
        let (da, _, db) = dir.delta();
        match (a.checked_add(da), b.checked_add(db)) {
            (Some(na), Some(nb)) => self.get(na, nb),
            _ => 0,
        }
    }

    /// Row `a` as a slice, if in range.
    pub fn row(&self, a: usize) -> Option<&[u8]> {
        if a >= self.width {
            return None;
        }
        let start = self.idx(a, 0);
        Some(&self.cells[start..start + self.depth])
    }

    /// Flat row-major view of the cells.
    #[inline]
    pub fn as_flat(&self) -> &[u8] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&1)
    }

    /// Occupied coordinates in row-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, &v)| {
            (v == 1).then(|| ((i / self.depth) as i32, (i % self.depth) as i32))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_empty() {
        let g = OccupancyGrid::from_rows(&[[1u8, 1], [1, 1]]).unwrap();
        assert_eq!(g.get(-1, 0), 0);
        assert_eq!(g.get(0, -1), 0);
        assert_eq!(g.get(2, 0), 0);
        assert_eq!(g.get(0, 2), 0);
        assert_eq!(g.get(1, 1), 1);
    }

    #[test]
    fn neighbor_offsets() {
        // a=0: [0,1,0]; a=1: [1,1,1]
        let g = OccupancyGrid::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
        assert_eq!(g.neighbor(0, 1, Direction::East), 1);
        assert_eq!(g.neighbor(0, 1, Direction::West), 0);
        assert_eq!(g.neighbor(0, 1, Direction::North), 0);
        assert_eq!(g.neighbor(1, 1, Direction::North), 1);
        assert_eq!(g.neighbor(1, 1, Direction::South), 1);
        assert_eq!(g.neighbor(1, 1, Direction::Up), 0);
        assert_eq!(g.neighbor(1, 1, Direction::Down), 0);
    }

    #[test]
    fn nonzero_bytes_normalize_to_one() {
        let g = OccupancyGrid::from_flat(1, 3, &[0, 7, 255]).unwrap();
        assert_eq!(g.as_flat(), &[0, 1, 1]);
        assert_eq!(g.occupied_count(), 2);
    }

    #[test]
    fn copy_does_not_alias_source() {
        let mut src = vec![vec![0u8, 1], vec![1, 0]];
        let g = OccupancyGrid::from_rows(&src[..]).unwrap();
        src[0][0] = 1;
        assert_eq!(g.get(0, 0), 0);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            OccupancyGrid::from_flat(2, 2, &[1, 0, 1]),
            Err(GridError::LengthMismatch { expected: 4, actual: 3, .. })
        ));
        assert!(matches!(
            OccupancyGrid::from_rows(&[vec![1u8, 0], vec![1]]),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn neighbor_at_coordinate_limits_reads_empty() {
        let g = OccupancyGrid::from_rows(&[[1u8, 1], [1, 1]]).unwrap();
        assert_eq!(g.neighbor(i32::MAX, 0, Direction::East), 0);
        assert_eq!(g.neighbor(0, i32::MAX, Direction::North), 0);
        assert_eq!(g.neighbor(i32::MIN, 0, Direction::West), 0);
        assert_eq!(g.neighbor(0, i32::MIN, Direction::South), 0);
    }

    #[test]
    fn oversized_shapes_are_errors() {
        assert!(matches!(
            OccupancyGrid::from_flat(usize::MAX, 2, &[]),
            Err(GridError::TooLarge { .. })
        ));
        assert!(matches!(
            OccupancyGrid::new(i32::MAX as usize + 1, 0),
            Err(GridError::TooLarge { .. })
        ));
        assert!(matches!(
            OccupancyGrid::new(usize::MAX, usize::MAX),
            Err(GridError::TooLarge { .. })
        ));
        let g = OccupancyGrid::new(3, 5).unwrap();
        assert_eq!(g.extent(), (3, 5));
    }

    #[test]
    fn iter_occupied_row_major() {
        let g = OccupancyGrid::from_rows(&[[0u8, 1], [1, 1]]).unwrap();
        let cells: Vec<_> = g.iter_occupied().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (1, 1)]);
        assert!(!g.is_empty());
        assert!(OccupancyGrid::new(3, 3).unwrap().is_empty());
    }
}
