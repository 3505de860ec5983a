//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Default slot configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "slots.toml";

/// Settings resolved from the environment and command-line flags.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub config_path: PathBuf,
    pub materials_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            materials_path: None,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SLOTS_CONFIG` - Slot configuration TOML file (default: `slots.toml`)
    /// - `SLOTS_MATERIALS` - RON material catalog (default: built-in catalog)
    /// - `SLOTS_LOG_DIR` - Directory for a `slots.log` file (default: stderr only)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_path("SLOTS_CONFIG") {
            config.config_path = path;
        }
        config.materials_path = read_path("SLOTS_MATERIALS");
        config.log_dir = read_path("SLOTS_LOG_DIR");

        config
    }

    /// Applies command-line flags on top of the environment.
    pub fn with_overrides(mut self, config: Option<PathBuf>, materials: Option<PathBuf>) -> Self {
        if let Some(path) = config {
            self.config_path = path;
        }
        if materials.is_some() {
            self.materials_path = materials;
        }
        self
    }
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
