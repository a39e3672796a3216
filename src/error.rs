use thiserror::Error;

/// Errors surfaced at the public boundary of the maze engine.
///
/// Broken internal invariants (carving between non-adjacent cells, indexing
/// outside the grid) are programming errors and panic instead.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("level {index} does not exist ({available} levels available)")]
    UnknownLevel { index: usize, available: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;

/// Rejects empty grids before anything is allocated.
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::InvalidDimensions { rows, cols });
    }
    Ok(())
}
