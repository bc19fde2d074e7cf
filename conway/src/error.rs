// error.rs - Error types for the simulation core

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Grid creation failed: a zero dimension, an overflowing area, or no memory.
    Allocation { width: usize, height: usize },
    /// A coordinate outside `[0, width) x [0, height)`.
    OutOfBounds { x: i64, y: i64, width: usize, height: usize },
    /// Two grids that must share dimensions do not.
    DimensionMismatch { expected: (usize, usize), found: (usize, usize) },
    /// A row coroutine panicked or was cancelled before delivering its row.
    RowTask { row: usize, reason: String },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::Allocation { width, height } => {
                write!(f, "cannot allocate a {}x{} grid", width, height)
            }
            LifeError::OutOfBounds { x, y, width, height } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", x, y, width, height)
            }
            LifeError::DimensionMismatch { expected, found } => write!(
                f,
                "grid dimensions differ: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            LifeError::RowTask { row, reason } => {
                write!(f, "row coroutine {} failed: {}", row, reason)
            }
        }
    }
}

impl std::error::Error for LifeError {}
