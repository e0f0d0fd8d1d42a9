use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

pub mod model;

pub use model::*;

pub const LOCAL_CONFIG_FILE: &str = "adacheck.toml";

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        config.validate()?;

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.service.base_url.trim().is_empty() {
            return Err(Error::Config("service.base_url must not be empty".into()));
        }

        if self.service.timeout_secs == 0 {
            return Err(Error::Config("service.timeout_secs must be positive".into()));
        }

        if self.progress.tick_ms == 0 {
            return Err(Error::Config("progress.tick_ms must be positive".into()));
        }

        Ok(())
    }

    /// Full URL for an endpoint path, tolerating stray slashes on either side.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.service.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Per-user configuration file, used when the working directory has none.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("adacheck").join("config.toml"))
}

/// Resolves the configuration: explicit path, then `./adacheck.toml`, then the
/// per-user file, then built-in defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading explicit config");
        return Config::load(path);
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        debug!(path = %local.display(), "loading local config");
        return Config::load(&local);
    }

    if let Some(global) = global_config_path().filter(|path| path.is_file()) {
        debug!(path = %global.display(), "loading global config");
        return Config::load(&global);
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}
