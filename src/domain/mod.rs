mod cell;
mod grid;
mod patterns;

pub use cell::Cell;
pub use grid::{Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use patterns::{Pattern, presets};
