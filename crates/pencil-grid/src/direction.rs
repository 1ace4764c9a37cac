/// The six cardinal face directions of a grid cell.
///
/// `North`/`South` step along the column axis (B), `East`/`West` along the row
/// axis (A). `Up`/`Down` leave the plane along the extrusion axis, where the
/// grid never has a neighbour.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    Up = 4,
    Down = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Offset `(da, dup, db)` when stepping out through this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, 1),
            Direction::East => (1, 0, 0),
            Direction::South => (0, 0, -1),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }

    #[inline]
    pub fn is_planar(self) -> bool {
        !matches!(self, Direction::Up | Direction::Down)
    }
}
