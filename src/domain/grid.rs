use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Default board size
pub const DEFAULT_HEIGHT: usize = 60;
pub const DEFAULT_WIDTH: usize = 80;

/// Grid manages the 2D cellular automaton board.
/// Dimensions are fixed at creation; advancement returns a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from row-major cells. Returns None if the length is wrong.
    pub fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == height * width).then_some(Self { height, width, cells })
    }

    /// (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position; out-of-range coordinates are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip one cell in place. Out-of-range coordinates are a no-op so that
    /// pointer positions past the board edge can be passed straight through.
    /// Returns whether a cell was actually flipped.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        true
    }

    /// Count live cells in the Moore neighborhood with toroidal wrapping
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let h = self.height;
        let w = self.width;
        // Adding (len - 1) instead of subtracting 1 keeps the arithmetic unsigned.
        [h - 1, 0, 1]
            .into_iter()
            .flat_map(|dr| [w - 1, 0, 1].into_iter().map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| self.cells[self.index((row + dr) % h, (col + dc) % w)])
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)].evolve(self.neighbor_count(row, col))
    }

    /// Pure evolution - returns the next generation, input untouched (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Row-parallel evolution using rayon; output is identical to `step`.
    /// Only worth it for boards far larger than the default.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.width).map(move |col| self.next_cell(row, col)))
            .collect();

        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Set every cell to dead, keeping dimensions
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize grid; each cell is alive with probability `density`
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let p = density.clamp(0.0, 1.0);
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(p) { Cell::Alive } else { Cell::Dead };
        });
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over all cells with their (row, col)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.width, i % self.width, cell))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}
