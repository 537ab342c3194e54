use rand::Rng;
use std::collections::HashSet;

use crate::config::Config;
use crate::domain::Grid;

/// Share of cells brought to life by a randomize
pub const RANDOM_DENSITY: f64 = 0.3;

/// One play session: the board plus everything the game screen toggles.
/// Cells can only be edited while paused, and nothing advances or paints
/// while the pause menu is open.
pub struct Session {
    pub grid: Grid,
    pub paused: bool,
    pub menu_open: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub ticks_per_second: f32,
    parallel_threshold: usize,
    /// Cells already flipped by the current pointer drag; None between strokes
    stroke: Option<HashSet<(usize, usize)>>,
}

impl Session {
    /// New session over `grid`; sessions start advancing immediately
    pub fn new(grid: Grid, config: &Config) -> Self {
        Self {
            grid,
            paused: false,
            menu_open: false,
            generation: 0,
            update_timer: 0.0,
            ticks_per_second: config.ticks_per_second,
            parallel_threshold: config.parallel_threshold,
            stroke: None,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.paused && !self.menu_open
    }

    /// Toggle play/pause state
    pub fn toggle_pause(&mut self) {
        if !self.menu_open {
            self.paused = !self.paused;
        }
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Fill the board randomly; editing op, so only while paused
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        if self.is_editable() {
            self.grid.randomize_with(rng, RANDOM_DENSITY);
            self.generation = 0;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.stroke = None;
    }

    /// Leave the pause menu. The board stays paused so it can be edited.
    pub fn resume_from_menu(&mut self) {
        self.menu_open = false;
        self.paused = true;
    }

    /// Pointer pressed over (row, col): starts a new paint stroke
    pub fn press(&mut self, row: usize, col: usize) {
        if !self.is_editable() {
            return;
        }
        let mut stroke = HashSet::new();
        if self.grid.toggle_cell(row, col) {
            stroke.insert((row, col));
        }
        self.stroke = Some(stroke);
    }

    /// Pointer dragged over (row, col) with the button held.
    /// Each cell flips at most once per stroke; drags without a press are ignored.
    pub fn drag(&mut self, row: usize, col: usize) {
        if !self.is_editable() {
            return;
        }
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        if !stroke.contains(&(row, col)) && self.grid.toggle_cell(row, col) {
            stroke.insert((row, col));
        }
    }

    pub fn release(&mut self) {
        self.stroke = None;
    }

    /// Compute the next generation and swap it in
    pub fn advance(&mut self) {
        let (h, w) = self.grid.dimensions();
        self.grid = if h * w >= self.parallel_threshold {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        };
        self.generation += 1;
    }

    /// Update simulation by one frame. Returns whether a generation elapsed.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if self.paused || self.menu_open {
            return false;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.ticks_per_second;
        if self.update_timer < update_interval {
            return false;
        }

        self.advance();
        self.update_timer = 0.0;
        true
    }
}
