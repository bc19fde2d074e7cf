// lib.rs - Conway's Game of Life engine
//
// Dense grid, three edge topologies (plus a reflected Klein variant), the B3/S23
// rule, a sequential stepper and a row-coroutine stepper, and pattern sources.

pub mod coro;
pub mod error;
pub mod grid;
pub mod life106;
pub mod patterns;
pub mod rule;
pub mod simulation;
pub mod stepper;
pub mod topology;

pub use error::LifeError;
pub use grid::Grid;
pub use life106::{load_life106, parse_life106, PatternError};
pub use patterns::{Pattern, PATTERNS};
pub use rule::next_state;
pub use simulation::{SeedReport, Simulation, StepOutcome};
pub use stepper::{advance, advance_into};
pub use topology::{count_live_neighbors, NeighborCounter, Topology, UnknownTopology};
