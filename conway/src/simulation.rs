// simulation.rs - Double-buffered Game of Life driver state

use crate::coro::advance_rows;
use crate::error::LifeError;
use crate::grid::Grid;
use crate::patterns::Pattern;
use crate::stepper::advance_into;
use crate::topology::Topology;
use std::collections::VecDeque;
use std::sync::Arc;

// Number of recent generations remembered for cycle detection.
const HISTORY_LEN: usize = 10;

/// Result of seeding: how many points landed on the grid and how many fell outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub applied: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Evolved,
    /// The new generation repeats one of the last few.
    Cycle,
}

/// Owns the current and next generation buffers. `step` writes into `next`
/// and swaps, so the current grid is never written while it is being read.
pub struct Simulation {
    current: Grid,
    next: Grid,
    topology: Topology,
    generation: u64,
    grid_history: VecDeque<u64>,
}

impl Simulation {
    pub fn new(width: usize, height: usize, topology: Topology) -> Result<Self, LifeError> {
        Self::from_grid(Grid::new(width, height)?, topology)
    }

    pub fn from_grid(grid: Grid, topology: Topology) -> Result<Self, LifeError> {
        let (width, height) = grid.dimensions();
        let mut sim = Self {
            next: Grid::new(width, height)?,
            current: grid,
            topology,
            generation: 0,
            grid_history: VecDeque::with_capacity(HISTORY_LEN),
        };
        sim.restart();
        Ok(sim)
    }

    /// Read-only view of the current generation.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks each point, shifted by `origin`, alive. Points that land outside
    /// the grid are skipped and counted.
    pub fn seed<I>(&mut self, points: I, origin: (i64, i64)) -> SeedReport
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut report = SeedReport::default();
        for (x, y) in points {
            let (gx, gy) = (origin.0.saturating_add(x), origin.1.saturating_add(y));
            if self.current.contains(gx, gy) && self.current.set_alive(gx as usize, gy as usize).is_ok() {
                report.applied += 1;
            } else {
                tracing::warn!(x = gx, y = gy, "seed point outside the grid, skipped");
                report.skipped += 1;
            }
        }
        self.restart();
        report
    }

    /// Clears the grid and places `pattern` at its center.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> SeedReport {
        self.current.clear();
        let origin = pattern.centered_origin(self.current.width(), self.current.height());
        self.seed(pattern.cells.iter().copied(), origin)
    }

    pub fn randomize(&mut self, seed: u32) {
        self.current.randomize(seed);
        self.restart();
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.restart();
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, LifeError> {
        let alive = self.current.toggle(x, y)?;
        self.reset_history();
        Ok(alive)
    }

    /// Advances one generation on the calling thread.
    pub fn step(&mut self) -> Result<StepOutcome, LifeError> {
        advance_into(&self.current, &mut self.next, self.topology)?;
        Ok(self.commit())
    }

    /// Advances one generation with one coroutine per row on `runtime`.
    pub fn step_concurrent(
        &mut self,
        runtime: &tokio::runtime::Runtime,
    ) -> Result<StepOutcome, LifeError> {
        let snapshot = Arc::new(self.current.clone());
        self.next = runtime.block_on(advance_rows(snapshot, self.topology))?;
        Ok(self.commit())
    }

    fn commit(&mut self) -> StepOutcome {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            live = self.current.live_count(),
            "generation advanced"
        );
        if self.check_for_cycle() { StepOutcome::Cycle } else { StepOutcome::Evolved }
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.current.fingerprint();
        if self.grid_history.contains(&current_hash) {
            return true;
        }
        self.remember(current_hash);
        false
    }

    fn remember(&mut self, hash: u64) {
        if self.grid_history.len() == HISTORY_LEN {
            self.grid_history.pop_front();
        }
        self.grid_history.push_back(hash);
    }

    fn reset_history(&mut self) {
        self.grid_history.clear();
        let hash = self.current.fingerprint();
        self.remember(hash);
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.reset_history();
    }
}
