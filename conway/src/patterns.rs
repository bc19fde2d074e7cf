// patterns.rs - Built-in starting patterns
//
// Cells are (x, y) offsets from the pattern's top-left corner.

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn size(&self) -> (i64, i64) {
        let w = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (w, h)
    }

    /// Origin that centers the pattern on a `width` x `height` grid.
    pub fn centered_origin(&self, width: usize, height: usize) -> (i64, i64) {
        let (w, h) = self.size();
        ((width as i64 - w) / 2, (height as i64 - h) / 2)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0), (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::stepper::advance;
    use crate::topology::Topology;

    fn place(pattern: &Pattern, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        let (ox, oy) = pattern.centered_origin(width, height);
        for &(x, y) in pattern.cells {
            grid.set_alive((ox + x) as usize, (oy + y) as usize).unwrap();
        }
        grid
    }

    #[test]
    fn sizes_cover_the_bounding_box() {
        assert_eq!(find("glider").map(Pattern::size), Some((3, 3)));
        assert_eq!(find("Pulsar").map(Pattern::size), Some((13, 13)));
        assert_eq!(find("Gosper Glider Gun").map(Pattern::size), Some((36, 9)));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn oscillators_keep_their_period() {
        for (name, period) in [("Blinker", 2), ("Toad", 2), ("Beacon", 2), ("Pulsar", 3)] {
            let pattern = find(name).unwrap();
            let start = place(pattern, 21, 21);
            let mut grid = start.clone();
            for _ in 0..period {
                grid = advance(&grid, Topology::Clipped).unwrap();
            }
            assert_eq!(grid, start, "{name}");
        }
    }

    #[test]
    fn gun_emits_gliders() {
        let pattern = find("Gosper Glider Gun").unwrap();
        let mut grid = place(pattern, 60, 40);
        let initial = grid.live_count();
        for _ in 0..60 {
            grid = advance(&grid, Topology::Clipped).unwrap();
        }
        assert!(grid.live_count() > initial);
    }
}
