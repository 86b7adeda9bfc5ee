//! Runtime configuration with environment overrides.
//!
//! Defaults suit the interactive workflow: export/import/log directories
//! relative to the working directory, the response cache under the home
//! directory, and a one second cooldown between PokeAPI fetches.
//! `TRAINERFORGE_*` environment variables (optionally from a `.env` file)
//! override the defaults; CLI flags override both.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use crate::api::pokeapi::POKEAPI_BASE;

/// Default minimum interval between outbound fetches, in seconds.
const DEFAULT_COOLDOWN_SECS: u64 = 1;

/// Runtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote API base URL.
    pub api_base: String,
    /// Minimum interval between outbound fetches, in seconds.
    pub cooldown_secs: u64,
    /// Directory holding the persistent response cache.
    pub data_dir: PathBuf,
    /// Directory trainer JSON files are exported to.
    pub export_dir: PathBuf,
    /// Directory scanned for trainer JSON files to import.
    pub import_dir: PathBuf,
    /// Directory receiving the dated log files.
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trainerforge");
        Self {
            api_base: POKEAPI_BASE.to_string(),
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            data_dir,
            export_dir: PathBuf::from("export"),
            import_dir: PathBuf::from("import"),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Defaults with `TRAINERFORGE_*` environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var("TRAINERFORGE_API_BASE") {
            config.api_base = base;
        }
        if let Ok(secs) = std::env::var("TRAINERFORGE_COOLDOWN_SECS") {
            match secs.parse() {
                Ok(parsed) => config.cooldown_secs = parsed,
                Err(_) => warn!(
                    value = %secs,
                    "Ignoring unparseable TRAINERFORGE_COOLDOWN_SECS"
                ),
            }
        }
        if let Ok(dir) = std::env::var("TRAINERFORGE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("TRAINERFORGE_EXPORT_DIR") {
            config.export_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("TRAINERFORGE_IMPORT_DIR") {
            config.import_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("TRAINERFORGE_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        config
    }

    /// Path of the persistent response cache file.
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("cache").join("responses.json")
    }

    /// The cooldown interval as a [`Duration`].
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}
