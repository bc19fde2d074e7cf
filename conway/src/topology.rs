// topology.rs - Edge policies for neighbor counting

use crate::error::LifeError;
use crate::grid::Grid;
use std::fmt;
use std::str::FromStr;

// The eight Moore-neighborhood offsets as (dx, dy).
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// A neighbor-counting policy. Implementations must return a value in `0..=8`
/// for every in-bounds `(x, y)`.
pub trait NeighborCounter: Send + Sync {
    fn count(&self, grid: &Grid, x: usize, y: usize) -> u8;
}

/// Finite board: neighbors past the edge are simply absent.
pub struct Clipped;

/// Both axes wrap independently.
pub struct Toroidal;

/// Klein edge with a plain modulo wrap on both axes, which makes it
/// indistinguishable from `Toroidal`.
pub struct Klein;

/// Klein bottle with a twist: x wraps plainly, and a neighbor reached across
/// the top or bottom edge has its column mirrored.
pub struct KleinReflected;

#[inline]
fn wrap(coord: usize, offset: i64, dim: usize) -> usize {
    // ((coord + offset) mod dim + dim) mod dim
    (coord as i64 + offset).rem_euclid(dim as i64) as usize
}

impl NeighborCounter for Clipped {
    fn count(&self, grid: &Grid, x: usize, y: usize) -> u8 {
        let (w, h) = (grid.width() as i64, grid.height() as i64);
        let mut count = 0;
        for &(dx, dy) in &OFFSETS {
            let (nx, ny) = (x as i64 + dx, y as i64 + dy);
            if nx >= 0 && nx < w && ny >= 0 && ny < h && grid.is_alive(nx as usize, ny as usize) {
                count += 1;
            }
        }
        count
    }
}

impl NeighborCounter for Toroidal {
    fn count(&self, grid: &Grid, x: usize, y: usize) -> u8 {
        let (w, h) = grid.dimensions();
        let mut count = 0;
        for &(dx, dy) in &OFFSETS {
            if grid.is_alive(wrap(x, dx, w), wrap(y, dy, h)) {
                count += 1;
            }
        }
        count
    }
}

impl NeighborCounter for Klein {
    fn count(&self, grid: &Grid, x: usize, y: usize) -> u8 {
        let (w, h) = grid.dimensions();
        let mut count = 0;
        for &(dx, dy) in &OFFSETS {
            let nx = wrap(x, dx, w);
            let ny = wrap(y, dy, h);
            if grid.is_alive(nx, ny) {
                count += 1;
            }
        }
        count
    }
}

impl NeighborCounter for KleinReflected {
    fn count(&self, grid: &Grid, x: usize, y: usize) -> u8 {
        let (w, h) = grid.dimensions();
        let mut count = 0;
        for &(dx, dy) in &OFFSETS {
            let raw_y = y as i64 + dy;
            let crossed = raw_y < 0 || raw_y >= h as i64;
            let mut nx = wrap(x, dx, w);
            if crossed {
                nx = w - 1 - nx;
            }
            if grid.is_alive(nx, wrap(y, dy, h)) {
                count += 1;
            }
        }
        count
    }
}

/// Edge behavior selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    #[default]
    Clipped,
    Toroidal,
    Klein,
    KleinReflected,
}

impl Topology {
    pub const ALL: [Topology; 4] = [
        Topology::Clipped,
        Topology::Toroidal,
        Topology::Klein,
        Topology::KleinReflected,
    ];

    /// Resolves the policy to its counting strategy.
    pub fn strategy(self) -> &'static dyn NeighborCounter {
        match self {
            Topology::Clipped => &Clipped,
            Topology::Toroidal => &Toroidal,
            Topology::Klein => &Klein,
            Topology::KleinReflected => &KleinReflected,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Topology::Clipped => "hedge",
            Topology::Toroidal => "torus",
            Topology::Klein => "klein",
            Topology::KleinReflected => "klein-reflected",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTopology(pub String);

impl fmt::Display for UnknownTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown edge type '{}' (expected hedge, torus, klein or klein-reflected)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTopology {}

impl FromStr for Topology {
    type Err = UnknownTopology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hedge" | "clipped" => Ok(Topology::Clipped),
            "torus" | "toroidal" => Ok(Topology::Toroidal),
            "klein" => Ok(Topology::Klein),
            "klein-reflected" | "reflected-klein" => Ok(Topology::KleinReflected),
            _ => Err(UnknownTopology(s.to_string())),
        }
    }
}

/// Bounds-checked neighbor count of `(x, y)` under `topology`.
pub fn count_live_neighbors(
    grid: &Grid,
    topology: Topology,
    x: usize,
    y: usize,
) -> Result<u8, LifeError> {
    if x >= grid.width() || y >= grid.height() {
        return Err(grid.out_of_bounds(x as i64, y as i64));
    }
    Ok(topology.strategy().count(grid, x, y))
}
