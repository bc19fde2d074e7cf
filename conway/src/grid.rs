// grid.rs - Dense grid storage for Conway's Game of Life
//
// Axis convention used across the workspace: `x` is the column in [0, width),
// `y` is the row in [0, height). Cells live in one buffer at `y * width + x`.

use crate::error::LifeError;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocates a `width` x `height` grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let alloc_err = LifeError::Allocation { width, height };
        if width == 0 || height == 0 {
            return Err(alloc_err);
        }
        let len = width.checked_mul(height).ok_or_else(|| alloc_err.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| alloc_err)?;
        cells.resize(len, false);

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True when the signed coordinate lies inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(self.out_of_bounds(x as i64, y as i64))
        }
    }

    pub(crate) fn out_of_bounds(&self, x: i64, y: i64) -> LifeError {
        LifeError::OutOfBounds { x, y, width: self.width, height: self.height }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), LifeError> {
        let i = self.index(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<(), LifeError> {
        self.set(x, y, true)
    }

    pub fn set_dead(&mut self, x: usize, y: usize) -> Result<(), LifeError> {
        self.set(x, y, false)
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, LifeError> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    // Hot-loop accessor for coordinates the caller already knows are in bounds.
    #[inline]
    pub(crate) fn is_alive(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Overwrites every cell with the one at the same coordinate in `src`.
    pub fn copy_from(&mut self, src: &Grid) -> Result<(), LifeError> {
        self.ensure_same_dimensions(src)?;
        self.cells.copy_from_slice(&src.cells);
        Ok(())
    }

    pub(crate) fn ensure_same_dimensions(&self, other: &Grid) -> Result<(), LifeError> {
        if self.dimensions() != other.dimensions() {
            return Err(LifeError::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            });
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [bool] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// 64-bit hash of the cell states, used to spot repeated generations.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    /// Refills the grid with a deterministic soup, roughly one cell in three alive.
    pub fn randomize(&mut self, seed_value: u32) {
        let mut hasher = DefaultHasher::new();
        seed_value.hash(&mut hasher);
        let mut seed = hasher.finish();

        for cell in self.cells.iter_mut() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            *cell = (seed >> 16) % 3 == 0;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
