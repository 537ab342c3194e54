use super::{Cell, Grid};

/// A named arrangement of live cells that can seed a fresh board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) of alive cells, relative to the top-left
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }

    /// Stamp the pattern onto `grid` with its top-left at (row, col).
    /// Cells that would land outside the grid wrap around, matching the board topology.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        let (h, w) = grid.dimensions();
        if h == 0 || w == 0 {
            return;
        }
        for &(dr, dc) in &self.cells {
            grid.set((row + dr) % h, (col + dc) % w, Cell::Alive);
        }
    }

    /// Fresh board of the given size with the pattern centered on it
    pub fn to_grid(&self, height: usize, width: usize) -> Grid {
        let mut grid = Grid::new(height, width);
        let row = height.saturating_sub(self.height) / 2;
        let col = width.saturating_sub(self.width) / 2;
        self.place_on(&mut grid, row, col);
        grid
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator, symmetric so rows and columns read the same
    pub fn pulsar() -> Pattern {
        let mut cells = Vec::new();
        for &r in &[0usize, 5, 7, 12] {
            for &c in &[2usize, 3, 4, 8, 9, 10] {
                cells.push((r, c));
                cells.push((c, r));
            }
        }
        cells.sort_unstable();
        cells.dedup();
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0), (4, 1), (5, 1),
                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),
                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),
                // Right square
                (2, 34), (3, 34), (2, 35), (3, 35),
            ],
        )
    }

    /// R-pentomino - stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evolve(grid: &Grid, generations: usize) -> Grid {
        (0..generations).fold(grid.clone(), |g, _| g.step())
    }

    #[test]
    fn test_pattern_bounds() {
        let gun = presets::glider_gun();
        assert_eq!((gun.height, gun.width), (9, 36));
        let pulsar = presets::pulsar();
        assert_eq!((pulsar.height, pulsar.width), (13, 13));
        assert_eq!(pulsar.cells.len(), 48);
    }

    #[test]
    fn test_to_grid_centers() {
        let grid = presets::block().to_grid(6, 6);
        assert_eq!(grid.population(), 4);
        assert!(grid.get(2, 2).is_some_and(|c| c.is_alive()));
        assert!(grid.get(3, 3).is_some_and(|c| c.is_alive()));
    }

    #[test]
    fn test_oscillator_periods() {
        for (pattern, period) in [
            (presets::blinker(), 2),
            (presets::toad(), 2),
            (presets::beacon(), 2),
            (presets::pulsar(), 3),
        ] {
            let start = pattern.to_grid(30, 30);
            assert_ne!(evolve(&start, 1), start, "{} should change", pattern.name);
            assert_eq!(evolve(&start, period), start, "{} period", pattern.name);
        }
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let start = presets::glider().to_grid(20, 20);
        let after = evolve(&start, 4);
        let mut expected = Grid::new(20, 20);
        presets::glider().place_on(&mut expected, 9, 9);
        assert_eq!(after, expected);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        // 4 generations move a glider one cell; 4 * 20 brings it home on a 20x20 torus
        let start = presets::glider().to_grid(20, 20);
        assert_eq!(evolve(&start, 80), start);
    }

    #[test]
    fn test_all_patterns_unique_names() {
        let patterns = presets::all_patterns();
        let mut names: Vec<_> = patterns.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), patterns.len());
    }
}
