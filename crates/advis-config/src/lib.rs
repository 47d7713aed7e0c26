//! # advis-config
//!
//! Layered configuration loading for Advis using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ADVIS_*` prefix, `__` as separator)
//! 2. Project-level `.advis/config.toml`
//! 3. User-level `~/.config/advis/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ADVIS_DATA__DIR` -> `data.dir`, `ADVIS_GENERAL__TERM_ID` ->
//! `general.term_id`, `ADVIS_DATA__FILES__STUDENTS` -> `data.files.students`.
//!
//! # Usage
//!
//! ```no_run
//! use advis_config::AdvisConfig;
//!
//! let config = AdvisConfig::load_with_dotenv().expect("config");
//! if config.data.is_configured() {
//!     println!("Snapshot directory: {}", config.data.dir);
//! }
//! ```

mod data;
mod error;
mod general;
mod server;

pub use data::DataConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use advis_core::enums::TableKind;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound accepted for `general.page_size`.
pub const MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdvisConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AdvisConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".advis/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ADVIS_").split("__"))
    }

    /// Reject values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.page_size == 0 || self.general.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidValue {
                field: String::from("general.page_size"),
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: String::from("server.bind"),
                reason: String::from("must not be empty"),
            });
        }
        for key in self.data.files.keys() {
            if key.parse::<TableKind>().is_err() {
                return Err(ConfigError::InvalidValue {
                    field: format!("data.files.{key}"),
                    reason: String::from("not a known table"),
                });
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("advis").join("config.toml"))
    }
}
