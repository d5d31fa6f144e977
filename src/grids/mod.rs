pub mod cell;
pub mod wall_grid;

use bitflags::bitflags;

pub const DEFAULT_DIMS: (usize, usize) = (16, 16);
pub const DEFAULT_CELL_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_DIMS.0, DEFAULT_DIMS.1)
    }
}

/// Converts grid coordinates to a row-major index, `None` when the probe
/// falls outside the grid. Every neighbor lookup goes through here so that
/// off-grid positions read as "no neighbor".
#[inline]
pub fn index_of(x: isize, y: isize, dims: &Dimensions) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= dims.width || y >= dims.height {
        return None;
    }

    Some(x + y * dims.width)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Probe order used when looking for neighbors.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction of a single grid step from `from` to `to`. Rows are checked
    /// before columns; anything further than one step away is `None`.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let (fx, fy) = from;
        let (tx, ty) = to;

        if fx == tx && fy + 1 == ty {
            Some(Direction::Down)
        } else if fx == tx && fy == ty + 1 {
            Some(Direction::Up)
        } else if fy == ty && fx + 1 == tx {
            Some(Direction::Right)
        } else if fy == ty && fx == tx + 1 {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

bitflags! {
    /// Walls still standing around a cell. A set bit means the wall is present.
    pub struct Sides: u8 {
        const UP = 0b0001;
        const DOWN = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
    }
}

impl From<Direction> for Sides {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Sides::UP,
            Direction::Down => Sides::DOWN,
            Direction::Left => Sides::LEFT,
            Direction::Right => Sides::RIGHT,
        }
    }
}

/// What clearing a wall between two cells that aren't grid neighbors does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallStrictness {
    /// report `MazeError::NotAdjacent`
    Strict,
    /// leave both cells alone and log a warning
    Lenient,
}

impl Default for WallStrictness {
    fn default() -> Self {
        WallStrictness::Strict
    }
}
