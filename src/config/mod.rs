use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::domain::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::persistence::atomic_rename;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "GAME_OF_LIFE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "life.json";

pub type Rgb = [u8; 3];

/// Swatches offered on the settings screen
pub const PALETTE: [Rgb; 8] = [
    [0, 255, 0],
    [255, 0, 0],
    [0, 200, 200],
    [255, 255, 0],
    [255, 105, 180],
    [160, 32, 240],
    [255, 165, 0],
    [200, 200, 200],
];

/// Colors handed to the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub alive: Rgb,
    pub dead: Rgb,
    pub grid_lines: Rgb,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            alive: [0, 255, 0],
            dead: [30, 30, 30],
            grid_lines: [50, 50, 50],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Side of one cell in pixels
    pub cell_size: u32,
    pub ticks_per_second: f32,
    /// Boards with at least this many cells step on the rayon pool
    pub parallel_threshold: usize,
    pub save_file: PathBuf,
    pub pattern_dir: PathBuf,
    pub colors: ColorSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_WIDTH,
            grid_height: DEFAULT_HEIGHT,
            cell_size: 10,
            ticks_per_second: 10.0,
            parallel_threshold: 250_000,
            save_file: PathBuf::from("savegame.json"),
            pattern_dir: PathBuf::from("static_patterns"),
            colors: ColorSettings::default(),
        }
    }
}

impl Config {
    /// Window dimensions in pixels. Both sides fit in an `i32`; a board too large
    /// for that gets the default window instead.
    pub fn window_size(&self) -> (u32, u32) {
        self.pixel_size().unwrap_or_else(|| {
            let defaults = Self::default();
            warn!(
                "{}x{} cells of {}px do not fit a window, using {}x{}",
                self.grid_height, self.grid_width, self.cell_size, defaults.grid_height, defaults.grid_width
            );
            (
                defaults.grid_width as u32 * defaults.cell_size,
                defaults.grid_height as u32 * defaults.cell_size,
            )
        })
    }

    fn pixel_size(&self) -> Option<(u32, u32)> {
        let side = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|n| n.checked_mul(self.cell_size))
                .filter(|&px| i32::try_from(px).is_ok())
        };
        Some((side(self.grid_width)?, side(self.grid_height)?))
    }

    /// Replace values the simulation cannot run with
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.grid_width == 0 || self.grid_height == 0 {
            warn!(
                "grid size {}x{} is invalid, using {}x{}",
                self.grid_height, self.grid_width, defaults.grid_height, defaults.grid_width
            );
            self.grid_width = defaults.grid_width;
            self.grid_height = defaults.grid_height;
        }
        if self.cell_size == 0 {
            warn!("cell_size must be positive, using {}", defaults.cell_size);
            self.cell_size = defaults.cell_size;
        }
        if self.pixel_size().is_none() {
            warn!(
                "{}x{} cells of {}px do not fit a window, using {}x{} at {}px",
                self.grid_height,
                self.grid_width,
                self.cell_size,
                defaults.grid_height,
                defaults.grid_width,
                defaults.cell_size
            );
            self.grid_width = defaults.grid_width;
            self.grid_height = defaults.grid_height;
            self.cell_size = defaults.cell_size;
        }
        if !(self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0) {
            warn!("ticks_per_second must be positive, using {}", defaults.ticks_per_second);
            self.ticks_per_second = defaults.ticks_per_second;
        }
        self
    }
}

/// Config file location: `$GAME_OF_LIFE_CONFIG` or `life.json` in the working directory
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Read the config. Missing file gives defaults; a malformed one is reported and ignored.
pub fn load_config(path: &Path) -> Config {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            warn!("cannot read config {}: {e}", path.display());
            return Config::default();
        }
    };
    match serde_json::from_str::<Config>(&text) {
        Ok(config) => config.sanitized(),
        Err(e) => {
            warn!("ignoring malformed config {}: {e}", path.display());
            Config::default()
        }
    }
}

pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(config).context("failed to encode config")?;
    fs::write(&tmp, data).with_context(|| format!("failed to write {}", tmp.display()))?;
    atomic_rename(&tmp, path)?;
    info!("wrote config to {}", path.display());
    Ok(())
}
