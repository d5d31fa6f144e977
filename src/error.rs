use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell index {index} out of bounds for a grid of {len} cells")]
    CellOutOfBounds { index: usize, len: usize },

    #[error("cells {from:?} and {to:?} are not adjacent, no wall between them")]
    NotAdjacent {
        from: (usize, usize),
        to: (usize, usize),
    },
}
