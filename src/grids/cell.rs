use crate::generators::RandomSource;
use crate::grids::{index_of, Dimensions, Direction, Sides};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub sides: Sides,
    pub visited: bool,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            sides: Sides::all(),
            visited: false,
        }
    }

    #[inline]
    pub fn coords(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.sides.contains(Sides::from(dir))
    }

    /// Sides whose wall has been knocked down.
    pub fn open_sides(&self) -> Sides {
        Sides::all() - self.sides
    }

    /// Picks one of the unvisited grid neighbors uniformly at random and
    /// returns its index into `cells`.
    pub fn find_unvisited_neighbor<R>(
        &self,
        cells: &[Cell],
        dims: &Dimensions,
        rng: &mut R,
    ) -> Option<usize>
    where
        R: RandomSource + ?Sized,
    {
        let mut neighbors = Vec::with_capacity(Direction::ALL.len());
        for dir in Direction::ALL.iter() {
            let (dx, dy) = dir.offset();
            let probe = index_of(self.x as isize + dx, self.y as isize + dy, dims);
            if let Some(index) = probe {
                if !cells[index].visited {
                    neighbors.push(index);
                }
            }
        }

        if neighbors.is_empty() {
            return None;
        }

        let pick = rng.below(neighbors.len());
        Some(neighbors[pick])
    }

    /// Knocks down the wall shared with `other`, on both cells. Returns the
    /// side cleared on `self`, or `None` (nothing touched) if the two cells
    /// aren't one grid step apart.
    pub fn clear_wall_toward(&mut self, other: &mut Cell) -> Option<Direction> {
        let dir = Direction::between(self.coords(), other.coords())?;
        self.sides.remove(Sides::from(dir));
        other.sides.remove(Sides::from(-dir));

        Some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::FirstCandidate;

    struct Last;

    impl RandomSource for Last {
        fn below(&mut self, bound: usize) -> usize {
            bound - 1
        }
    }

    fn grid(dims: &Dimensions) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(dims.len());
        for y in 0..dims.height {
            for x in 0..dims.width {
                cells.push(Cell::new(x, y));
            }
        }
        cells
    }

    #[test]
    fn new_cell_is_walled_and_unvisited() {
        let cell = Cell::new(2, 3);
        assert_eq!(cell.sides, Sides::all());
        assert!(!cell.visited);
        assert!(cell.open_sides().is_empty());
    }

    #[test]
    fn neighbors_are_probed_up_down_left_right() {
        let dims = Dimensions::new(3, 3);
        let cells = grid(&dims);
        let center = &cells[4];

        assert_eq!(
            center.find_unvisited_neighbor(&cells, &dims, &mut FirstCandidate),
            Some(1)
        );
        assert_eq!(
            center.find_unvisited_neighbor(&cells, &dims, &mut Last),
            Some(5)
        );
    }

    #[test]
    fn visited_and_off_grid_neighbors_are_skipped() {
        let dims = Dimensions::new(3, 3);
        let mut cells = grid(&dims);
        // corner (0, 0) only has Down (3) and Right (1)
        cells[3].visited = true;

        let corner = cells[0].clone();
        assert_eq!(
            corner.find_unvisited_neighbor(&cells, &dims, &mut FirstCandidate),
            Some(1)
        );

        cells[1].visited = true;
        assert_eq!(
            corner.find_unvisited_neighbor(&cells, &dims, &mut FirstCandidate),
            None
        );
    }

    #[test]
    fn lone_cell_has_no_neighbors() {
        let dims = Dimensions::new(1, 1);
        let cells = grid(&dims);
        assert_eq!(
            cells[0].find_unvisited_neighbor(&cells, &dims, &mut FirstCandidate),
            None
        );
    }

    #[test]
    fn clearing_a_wall_clears_both_sides() {
        let mut a = Cell::new(1, 1);

        let mut below = Cell::new(1, 2);
        assert_eq!(a.clear_wall_toward(&mut below), Some(Direction::Down));
        assert!(!a.has_wall(Direction::Down));
        assert!(!below.has_wall(Direction::Up));

        let mut left = Cell::new(0, 1);
        assert_eq!(a.clear_wall_toward(&mut left), Some(Direction::Left));
        assert!(!a.has_wall(Direction::Left));
        assert!(!left.has_wall(Direction::Right));

        assert_eq!(a.open_sides(), Sides::DOWN | Sides::LEFT);
        assert_eq!(below.open_sides(), Sides::UP);
    }

    #[test]
    fn non_adjacent_clear_touches_nothing() {
        let mut a = Cell::new(0, 0);
        let mut far = Cell::new(3, 1);
        assert_eq!(a.clear_wall_toward(&mut far), None);
        assert_eq!(a.sides, Sides::all());
        assert_eq!(far.sides, Sides::all());
    }
}
