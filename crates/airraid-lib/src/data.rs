//! Resolution of the catalog files on disk.
//!
//! Lookup order, highest priority first: explicit paths, the
//! `AIRRAID_SHIP_DATA` / `AIRRAID_EQUIPMENT_DATA` environment variables, a data
//! directory (`--data-dir` or `AIRRAID_DATA_DIR`), and finally the platform data
//! directory.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// File name of the ship table inside a data directory.
pub const SHIPS_FILENAME: &str = "ships.json";

/// File name of the equipment table inside a data directory.
pub const EQUIPMENT_FILENAME: &str = "equipment.json";

pub const SHIP_DATA_ENV: &str = "AIRRAID_SHIP_DATA";
pub const EQUIPMENT_DATA_ENV: &str = "AIRRAID_EQUIPMENT_DATA";
pub const DATA_DIR_ENV: &str = "AIRRAID_DATA_DIR";

/// Platform data directory, resolved once per process.
static PLATFORM_DATA_DIR: Lazy<Option<PathBuf>> = Lazy::new(|| {
    ProjectDirs::from("com", "airraid", "airraid").map(|dirs| dirs.data_dir().to_path_buf())
});

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    PLATFORM_DATA_DIR
        .clone()
        .ok_or(Error::ProjectDirsUnavailable)
}

/// Caller-supplied overrides, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub ships: Option<PathBuf>,
    pub equipment: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Resolved locations of the two catalog tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub ships: PathBuf,
    pub equipment: PathBuf,
}

impl CatalogPaths {
    /// Paths of both tables inside a data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            ships: dir.join(SHIPS_FILENAME),
            equipment: dir.join(EQUIPMENT_FILENAME),
        }
    }

    /// Resolve both tables from overrides, environment and defaults. The data
    /// directory is only consulted for tables without an explicit or env path.
    pub fn resolve(sources: &CatalogSources) -> Result<Self> {
        let data_dir = || -> Result<PathBuf> {
            match sources.data_dir.clone().or_else(|| env_path(DATA_DIR_ENV)) {
                Some(dir) => Ok(dir),
                None => default_data_dir(),
            }
        };

        let ships = match sources.ships.clone().or_else(|| env_path(SHIP_DATA_ENV)) {
            Some(path) => path,
            None => data_dir()?.join(SHIPS_FILENAME),
        };
        let equipment = match sources
            .equipment
            .clone()
            .or_else(|| env_path(EQUIPMENT_DATA_ENV))
        {
            Some(path) => path,
            None => data_dir()?.join(EQUIPMENT_FILENAME),
        };

        let paths = Self { ships, equipment };
        debug!(
            ships = %paths.ships.display(),
            equipment = %paths.equipment.display(),
            "resolved catalog paths"
        );
        Ok(paths)
    }

    /// Load the catalog from the resolved paths.
    pub fn load(&self) -> Result<Catalog> {
        for path in [&self.ships, &self.equipment] {
            if !path.exists() {
                warn!(path = %path.display(), "catalog file missing");
            }
        }
        Catalog::from_paths(&self.ships, &self.equipment)
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
