// stepper.rs - One full-grid generation pass

use crate::error::LifeError;
use crate::grid::Grid;
use crate::rule::next_state;
use crate::topology::{NeighborCounter, Topology};

/// Fills `out` with the next generation of row `y` of `current`.
pub(crate) fn next_row(current: &Grid, counter: &dyn NeighborCounter, y: usize, out: &mut [bool]) {
    for (x, cell) in out.iter_mut().enumerate() {
        let neighbors = counter.count(current, x, y);
        *cell = next_state(current.is_alive(x, y), neighbors);
    }
}

/// Writes the generation after `current` into `next`, which must have the same size.
pub fn advance_into(current: &Grid, next: &mut Grid, topology: Topology) -> Result<(), LifeError> {
    current.ensure_same_dimensions(next)?;
    let counter = topology.strategy();
    for y in 0..current.height() {
        next_row(current, counter, y, next.row_mut(y));
    }
    Ok(())
}

/// Returns the generation after `current`, leaving `current` untouched.
pub fn advance(current: &Grid, topology: Topology) -> Result<Grid, LifeError> {
    let (width, height) = current.dimensions();
    let mut next = Grid::new(width, height)?;
    advance_into(current, &mut next, topology)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set_alive(x, y).unwrap();
        }
        grid
    }

    fn live(grid: &Grid) -> Vec<(usize, usize)> {
        grid.live_cells().collect()
    }

    #[test]
    fn empty_grid_stays_empty() {
        let grid = Grid::new(7, 5).unwrap();
        for topology in Topology::ALL {
            assert!(advance(&grid, topology).unwrap().is_empty(), "{topology}");
        }
    }

    #[test]
    fn block_is_a_still_life() {
        let clipped = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let next = advance(&clipped, Topology::Clipped).unwrap();
        assert_eq!(next, clipped);

        let wrapped = grid_with(4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        for topology in [Topology::Toroidal, Topology::Klein] {
            let once = advance(&wrapped, topology).unwrap();
            let twice = advance(&once, topology).unwrap();
            assert_eq!(once, wrapped, "{topology}");
            assert_eq!(twice, wrapped, "{topology}");
        }
    }

    #[test]
    fn blinker_has_period_two_on_a_torus() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = advance(&horizontal, Topology::Toroidal).unwrap();
        assert_eq!(live(&vertical), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(advance(&vertical, Topology::Toroidal).unwrap(), horizontal);
    }

    #[test]
    fn two_cells_on_a_three_by_three_torus_die_out() {
        // Every cell's neighborhood covers the rest of a 3x3 torus: the live pair
        // sees one neighbor each and every dead cell sees two.
        let grid = grid_with(3, 3, &[(0, 0), (1, 0)]);
        let next = advance(&grid, Topology::Toroidal).unwrap();
        assert!(live(&next).is_empty());
    }

    #[test]
    fn full_row_fills_a_three_by_three_torus() {
        let grid = grid_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);
        let next = advance(&grid, Topology::Toroidal).unwrap();
        assert_eq!(next.live_count(), 9);
        // Every cell now has eight neighbors.
        assert!(advance(&next, Topology::Toroidal).unwrap().is_empty());
    }

    #[test]
    fn glider_leaves_the_clipped_board_as_a_block() {
        // A glider hitting the bottom-right corner of a finite board settles into a block.
        let mut grid = grid_with(6, 6, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        for _ in 0..20 {
            grid = advance(&grid, Topology::Clipped).unwrap();
        }
        assert_eq!(live(&grid), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn glider_returns_home_on_a_torus() {
        let start = grid_with(8, 8, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let mut grid = start.clone();
        // A glider moves one cell diagonally every four generations.
        for _ in 0..32 {
            grid = advance(&grid, Topology::Toroidal).unwrap();
        }
        assert_eq!(grid, start);
    }

    #[test]
    fn advance_does_not_touch_its_input() {
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let before = grid.clone();
        let _ = advance(&grid, Topology::Clipped).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn advance_into_rejects_mismatched_buffers() {
        let grid = Grid::new(4, 4).unwrap();
        let mut next = Grid::new(4, 5).unwrap();
        assert_eq!(
            advance_into(&grid, &mut next, Topology::Toroidal),
            Err(LifeError::DimensionMismatch { expected: (4, 4), found: (4, 5) })
        );
    }

    #[test]
    fn advance_into_overwrites_stale_cells() {
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let mut next = grid_with(5, 5, &[(0, 0), (4, 4)]);
        advance_into(&grid, &mut next, Topology::Clipped).unwrap();
        assert_eq!(live(&next), vec![(2, 1), (2, 2), (2, 3)]);
    }
}
