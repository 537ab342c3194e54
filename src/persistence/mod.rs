mod codec;
mod library;

pub use codec::{deserialize, serialize};
pub use library::{list_pattern_files, PatternFile};

use anyhow::{Context, Result, ensure};
use log::{info, warn};
use std::{fs, io, path::Path};

use crate::domain::Grid;

/// Write the board atomically: temp file next to the target, then rename.
pub fn save_grid(path: &Path, grid: &Grid) -> Result<()> {
    let data = serialize(grid)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data).with_context(|| format!("failed to write {}", tmp.display()))?;
    atomic_rename(&tmp, path)?;
    info!("saved {}x{} grid to {}", grid.height(), grid.width(), path.display());
    Ok(())
}

/// Load the save file. A missing file means no save exists yet and yields an
/// empty board of the expected size; anything unreadable or malformed is an error.
pub fn load_grid(path: &Path, height: usize, width: usize) -> Result<Grid> {
    match fs::read(path) {
        Ok(bytes) => decode_sized(&bytes, path, height, width),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("no save at {}, starting empty", path.display());
            Ok(Grid::new(height, width))
        }
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Load a stored pattern; unlike the save file it must exist.
pub fn load_pattern(path: &Path, height: usize, width: usize) -> Result<Grid> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    decode_sized(&bytes, path, height, width)
}

fn decode_sized(bytes: &[u8], path: &Path, height: usize, width: usize) -> Result<Grid> {
    let grid = deserialize(bytes).with_context(|| format!("cannot load {}", path.display()))?;
    ensure!(
        grid.dimensions() == (height, width),
        "{} holds a {}x{} grid, expected {height}x{width}",
        path.display(),
        grid.height(),
        grid.width()
    );
    info!("loaded {}", path.display());
    Ok(grid)
}

/// Move a fully written temp file over `to`. `fs::rename` replaces an existing
/// target in one step, so `to` always holds either the old or the new contents.
/// On failure the temp file is removed and the target is left untouched.
pub(crate) fn atomic_rename(from: &Path, to: &Path) -> Result<()> {
    if let Err(e) = fs::rename(from, to) {
        if let Err(cleanup) = fs::remove_file(from) {
            warn!("could not remove {}: {cleanup}", from.display());
        }
        return Err(e)
            .with_context(|| format!("failed to move {} to {}", from.display(), to.display()));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::scratch_dir;
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_missing_save_is_empty_grid() {
        let dir = scratch_dir("missing_save");
        let grid = load_grid(&dir.join("nope.json"), 60, 80).unwrap();
        assert_eq!(grid, Grid::new(60, 80));
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("save_load");
        let path = dir.join("savegame.json");
        let grid = presets::glider().to_grid(60, 80);
        save_grid(&path, &grid).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(load_grid(&path, 60, 80).unwrap(), grid);

        // Overwrite keeps only the latest
        let mut cleared = grid.clone();
        cleared.clear();
        save_grid(&path, &cleared).unwrap();
        assert_eq!(load_grid(&path, 60, 80).unwrap(), cleared);
    }

    #[test]
    fn test_overwrite_leaves_no_temp_file() {
        let dir = scratch_dir("overwrite_save");
        let path = dir.join("savegame.json");
        save_grid(&path, &presets::blinker().to_grid(60, 80)).unwrap();
        let block = presets::block().to_grid(60, 80);
        save_grid(&path, &block).unwrap();

        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(load_grid(&path, 60, 80).unwrap(), block);
    }

    #[test]
    fn test_failed_rename_keeps_target_and_cleans_temp() {
        let dir = scratch_dir("failed_rename");
        // A non-empty directory where the save should go cannot be replaced by a file
        let path = dir.join("savegame.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        assert!(save_grid(&path, &Grid::new(3, 3)).is_err());
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_corrupt_save_is_error() {
        let dir = scratch_dir("corrupt_save");
        let path = dir.join("savegame.json");
        fs::write(&path, b"{\"height\":60,").unwrap();
        assert!(load_grid(&path, 60, 80).is_err());
    }

    #[test]
    fn test_dimension_mismatch_is_error() {
        let dir = scratch_dir("mismatch");
        let path = dir.join("small.json");
        save_grid(&path, &Grid::new(10, 10)).unwrap();
        let err = load_pattern(&path, 60, 80).unwrap_err();
        assert!(err.to_string().contains("expected 60x80"));
    }

    #[test]
    fn test_missing_pattern_is_error() {
        let dir = scratch_dir("missing_pattern");
        assert!(load_pattern(&dir.join("ghost.json"), 60, 80).is_err());
    }
}
