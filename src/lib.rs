pub mod error;
pub mod generators;
pub mod grids;

pub use error::MazeError;
pub use generators::backtracker::Maze;
pub use generators::{FirstCandidate, GenerationState, Generator, RandSource, RandomSource};
pub use grids::cell::Cell;
pub use grids::wall_grid::{CellView, WallGrid};
pub use grids::{Dimensions, Direction, Sides, WallStrictness};
