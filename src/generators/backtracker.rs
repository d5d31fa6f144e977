use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MazeError;
use crate::generators::{GenerationState, Generator, RandSource, RandomSource};
use crate::grids::cell::Cell;
use crate::grids::wall_grid::{CellView, WallGrid};
use crate::grids::{Dimensions, WallStrictness};

/// Randomized depth-first backtracker over a rectangular grid.
///
/// Generation starts at (0, 0). Each step either knocks through to a random
/// unvisited neighbor (pushing the current cell) or pops the stack to back
/// up. Walls only ever come down toward unvisited cells, so the open passages
/// always form a tree, and once the stack runs dry it spans every cell.
pub struct Maze<R> {
    grid: WallGrid,
    // indices into grid.cells, never owning
    stack: Vec<usize>,
    current: usize,
    state: GenerationState,
    steps: usize,
    strictness: WallStrictness,
    rng: R,
}

impl Maze<RandSource<StdRng>> {
    /// Unseeded maze, ready to be stepped.
    pub fn new(width: usize, height: usize, cell_size: f32) -> Result<Self, MazeError> {
        Self::with_source(
            width,
            height,
            cell_size,
            RandSource(StdRng::from_entropy()),
        )
    }

    /// Reproducible maze, ready to be stepped.
    pub fn seeded(
        width: usize,
        height: usize,
        cell_size: f32,
        seed: u64,
    ) -> Result<Self, MazeError> {
        Self::with_source(
            width,
            height,
            cell_size,
            RandSource(StdRng::seed_from_u64(seed)),
        )
    }
}

impl<R: RandomSource> Maze<R> {
    pub fn with_source(
        width: usize,
        height: usize,
        cell_size: f32,
        rng: R,
    ) -> Result<Self, MazeError> {
        let grid = WallGrid::with_dims(width, height, cell_size)?;
        debug!("new {}x{} maze", width, height);

        Ok(Self {
            grid,
            stack: Vec::new(),
            current: 0,
            state: GenerationState::Running,
            steps: 0,
            strictness: WallStrictness::default(),
            rng,
        })
    }

    /// Builds and fully generates a maze in one go.
    pub fn generated_with_source(
        width: usize,
        height: usize,
        cell_size: f32,
        rng: R,
    ) -> Result<Self, MazeError> {
        let mut maze = Self::with_source(width, height, cell_size, rng)?;
        maze.generate()?;
        Ok(maze)
    }

    pub fn with_strictness(mut self, strictness: WallStrictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn step(&mut self) -> Result<GenerationState, MazeError> {
        if self.state == GenerationState::Done {
            return Ok(GenerationState::Done);
        }
        self.steps += 1;

        let current = self.current;
        self.grid.visit(current)?;

        match self.grid.unvisited_neighbor_of(current, &mut self.rng) {
            Some(next) => {
                self.grid.visit(next)?;
                self.stack.push(current);
                self.grid
                    .clear_wall_between(current, next, self.strictness)?;
                self.current = next;
                trace!("carve {} -> {}", current, next);
            }
            None => match self.stack.pop() {
                Some(prev) => {
                    self.current = prev;
                    trace!("backtrack {} -> {}", current, prev);
                }
                None => {
                    self.state = GenerationState::Done;
                    debug!(
                        "{}x{} maze done after {} steps",
                        self.grid.dims.width, self.grid.dims.height, self.steps
                    );
                }
            },
        }

        Ok(self.state)
    }

    pub fn generate(&mut self) -> Result<&WallGrid, MazeError> {
        while self.step()? == GenerationState::Running {}
        Ok(&self.grid)
    }
}

impl<R> Maze<R> {
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.dims.height
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.grid.dims
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.grid.cell_size
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.grid.views()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.get_cell(x, y)
    }

    /// The cell the traversal is sitting on. Back at (0, 0) once done.
    pub fn current(&self) -> &Cell {
        &self.grid.cells[self.current]
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == GenerationState::Done
    }

    pub fn strictness(&self) -> WallStrictness {
        self.strictness
    }
}

impl<R: RandomSource> Generator for Maze<R> {
    fn step_generation(&mut self) -> Result<GenerationState, MazeError> {
        self.step()
    }

    fn generate_maze(&mut self) -> Result<&WallGrid, MazeError> {
        self.generate()
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn steps(&self) -> usize {
        self.steps
    }

    fn is_done(&self) -> bool {
        self.state == GenerationState::Done
    }

    fn cursor(&self) -> Option<(usize, usize)> {
        match self.state {
            GenerationState::Running => Some(self.current().coords()),
            GenerationState::Done => None,
        }
    }
}
