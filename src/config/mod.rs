//! Configuration management for idb.
//!
//! The store location is resolved in this order:
//! - `--dir` / `IDB_DIR`
//! - `store_dir` in the YAML config file (`--config` / `IDB_CONFIG`, or
//!   `$XDG_CONFIG_HOME/idb/config.yaml`)
//! - `~/.idb`

use std::fs;
use std::path::{Path, PathBuf};

use idb_lib::{IdbError, IdeaStore, Result};
use serde::Deserialize;
use tracing::debug;

/// Directory under `$HOME` used when nothing else is configured.
pub const DEFAULT_DIR_NAME: &str = ".idb";

/// Values taken from the command line (or their env fallbacks).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// On-disk config file layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub store_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration for the current user.
    ///
    /// # Errors
    ///
    /// Returns `Config` if an explicit config file is missing, any config
    /// file fails to parse, or no home directory can be found.
    pub fn load(overrides: &CliOverrides) -> Result<Self> {
        let default_config = dirs::config_dir().map(|d| d.join("idb").join("config.yaml"));
        let home = dirs::home_dir();
        Self::resolve(overrides, default_config.as_deref(), home.as_deref())
    }

    /// Resolve configuration from explicit inputs.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn resolve(
        overrides: &CliOverrides,
        default_config: Option<&Path>,
        home: Option<&Path>,
    ) -> Result<Self> {
        let file = match (&overrides.config, default_config) {
            (Some(path), _) => read_config_file(path, true)?,
            (None, Some(path)) => read_config_file(path, false)?,
            (None, None) => ConfigFile::default(),
        };

        let store_dir = match (&overrides.dir, file.store_dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => expand_home(&dir, home),
            (None, None) => home
                .map(|h| h.join(DEFAULT_DIR_NAME))
                .ok_or_else(|| {
                    IdbError::Config("cannot determine home directory; pass --dir".to_string())
                })?,
        };

        let log_file = file.log_file.map(|p| expand_home(&p, home));

        debug!(store_dir = %store_dir.display(), "Resolved configuration");
        Ok(Self {
            store_dir,
            log_file,
        })
    }

    /// Store handle for the configured directory.
    #[must_use]
    pub fn store(&self) -> IdeaStore {
        IdeaStore::new(&self.store_dir)
    }
}

fn read_config_file(path: &Path, required: bool) -> Result<ConfigFile> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            return Ok(ConfigFile::default());
        }
        Err(e) => {
            return Err(IdbError::Config(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&contents)
        .map_err(|e| IdbError::Config(format!("invalid config {}: {e}", path.display())))
}

/// Expand a leading `~/` against the home directory.
fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
