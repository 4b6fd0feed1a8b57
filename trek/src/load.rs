//! Reading map files from disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use trek_core::{Grid, GridError};
use trek_route::Quest;

/// Side length of the overworld map.
pub const OVERWORLD_SIZE: usize = 42;
/// Side length of each dungeon map.
pub const DUNGEON_SIZE: usize = 28;

pub const OVERWORLD_FILE: &str = "overworld.txt";
pub const DUNGEON_FILES: [&str; 3] = ["dungeon1.txt", "dungeon2.txt", "dungeon3.txt"];

/// Errors that can occur when loading the maps.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Grid { path: PathBuf, source: GridError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Grid { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid { source, .. } => Some(source),
        }
    }
}

/// Load one square map of side `size`.
pub fn load_grid(path: &Path, size: usize) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = Grid::parse(&text, Some(size)).map_err(|source| LoadError::Grid {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} ({}x{})", path.display(), grid.height(), grid.width());
    Ok(grid)
}

/// Load the overworld and the three dungeons from `dir`.
pub fn load_quest(dir: &Path) -> Result<Quest, LoadError> {
    let overworld = load_grid(&dir.join(OVERWORLD_FILE), OVERWORLD_SIZE)?;
    let [d1, d2, d3] = DUNGEON_FILES;
    Ok(Quest {
        overworld,
        dungeons: [
            load_grid(&dir.join(d1), DUNGEON_SIZE)?,
            load_grid(&dir.join(d2), DUNGEON_SIZE)?,
            load_grid(&dir.join(d3), DUNGEON_SIZE)?,
        ],
    })
}
