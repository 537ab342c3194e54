use anyhow::{Context, Result};
use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Extension used for stored boards, both the save file and library patterns
pub const GRID_EXTENSION: &str = "json";

/// A stored board in the pattern directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternFile {
    pub name: String,
    pub path: PathBuf,
}

/// List stored patterns in `dir`, sorted by name. The active save file is left
/// out even if it lives in the same directory. A missing directory is an empty library.
pub fn list_pattern_files(dir: &Path, save_file: &Path) -> Result<Vec<PatternFile>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("pattern directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to list {}", dir.display())),
    };

    let save_name = save_file.file_name();
    let mut patterns = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("failed to list {}", dir.display()))?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != GRID_EXTENSION) {
            continue;
        }
        if path.file_name() == save_name {
            continue;
        }
        let Some(name) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        patterns.push(PatternFile { name, path });
    }
    patterns.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(patterns)
}
