use log::warn;

use crate::error::MazeError;
use crate::generators::RandomSource;
use crate::grids::cell::Cell;
use crate::grids::{index_of, Dimensions, Direction, Sides, WallStrictness};

/// Read-only snapshot of one cell, everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub x: usize,
    pub y: usize,
    pub size: f32,
    pub visited: bool,
    pub sides: Sides,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallGrid {
    pub dims: Dimensions,
    pub cell_size: f32,

    // row-major, index = x + y * width
    pub cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(width: usize, height: usize, cell_size: f32) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let dims = Dimensions::new(width, height);
        let mut cells = Vec::with_capacity(dims.len());
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }

        Ok(Self {
            dims,
            cell_size,
            cells,
        })
    }

    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        index_of(x as isize, y as isize, &self.dims)
    }

    #[inline]
    pub fn get_cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index_of(x, y).map(|index| &self.cells[index])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn views(&self) -> impl Iterator<Item = CellView> + '_ {
        let size = self.cell_size;
        self.cells.iter().map(move |cell| CellView {
            x: cell.x,
            y: cell.y,
            size,
            visited: cell.visited,
            sides: cell.sides,
        })
    }

    pub fn visit(&mut self, index: usize) -> Result<(), MazeError> {
        self.check_index(index)?;
        self.cells[index].visited = true;
        Ok(())
    }

    pub fn unvisited_neighbor_of<R>(&self, index: usize, rng: &mut R) -> Option<usize>
    where
        R: RandomSource + ?Sized,
    {
        self.cells
            .get(index)?
            .find_unvisited_neighbor(&self.cells, &self.dims, rng)
    }

    /// True when the wall on `dir` side of the cell at `index` is gone.
    pub fn is_open(&self, index: usize, dir: Direction) -> bool {
        self.cells
            .get(index)
            .map(|cell| !cell.has_wall(dir))
            .unwrap_or(false)
    }

    /// Clears the shared wall between two cells on both of them at once.
    /// Returns the side cleared on `from`, `None` when a lenient grid skipped
    /// a non-adjacent pair.
    pub fn clear_wall_between(
        &mut self,
        from: usize,
        to: usize,
        strictness: WallStrictness,
    ) -> Result<Option<Direction>, MazeError> {
        self.check_index(from)?;
        self.check_index(to)?;

        let cleared = if from == to {
            None
        } else {
            let (a, b) = pair_mut(&mut self.cells, from, to);
            a.clear_wall_toward(b)
        };

        if cleared.is_none() {
            let from = self.cells[from].coords();
            let to = self.cells[to].coords();
            match strictness {
                WallStrictness::Strict => return Err(MazeError::NotAdjacent { from, to }),
                WallStrictness::Lenient => {
                    warn!("ignoring wall clear between non-adjacent cells {:?} and {:?}", from, to)
                }
            }
        }

        Ok(cleared)
    }

    /// Number of interior walls knocked down, each shared wall counted once.
    pub fn cleared_walls(&self) -> usize {
        // only look down and right so every shared wall is seen once
        self.cells
            .iter()
            .map(|cell| {
                let open = cell.open_sides();
                open.contains(Sides::DOWN) as usize + open.contains(Sides::RIGHT) as usize
            })
            .sum()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), MazeError> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(MazeError::CellOutOfBounds {
                index,
                len: self.cells.len(),
            })
        }
    }
}

// both indices must be in bounds and distinct
fn pair_mut(cells: &mut [Cell], a: usize, b: usize) -> (&mut Cell, &mut Cell) {
    if a < b {
        let (head, tail) = cells.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = cells.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
