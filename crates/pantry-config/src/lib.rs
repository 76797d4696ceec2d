//! # pantry-config
//!
//! Layered configuration loading for Pantry using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PANTRY_*` prefix, `__` as separator)
//! 2. Project-level `.pantry/config.toml`
//! 3. User-level `~/.config/pantry/config.toml`
//! 4. Built-in defaults
//!
//! The loaded [`PantryConfig`] is immutable. The server loads it once at
//! startup and hands it to everything that needs it, including the Yummly
//! credentials.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PANTRY_YUMMLY__API_KEY` -> `yummly.api_key`,
//! `PANTRY_SERVER__PORT` -> `server.port`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pantry_config::PantryConfig;
//!
//! let config = PantryConfig::load_with_dotenv().expect("config");
//! if !config.yummly.is_configured() {
//!     eprintln!("yummly proxy disabled");
//! }
//! ```

mod database;
mod error;
mod feed;
mod server;
mod yummly;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use feed::FeedConfig;
pub use server::ServerConfig;
pub use yummly::YummlyConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PantryConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub yummly: YummlyConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

impl PantryConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the binary can layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".pantry/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PANTRY_").split("__"))
    }

    /// Reject values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "must be non-zero".into(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if !self.yummly.base_url.starts_with("http://")
            && !self.yummly.base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "yummly.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.yummly.base_url),
            });
        }
        Ok(())
    }

    /// Yummly section, or an error when credentials are missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if the API key or host is empty.
    pub fn require_yummly(&self) -> Result<&YummlyConfig, ConfigError> {
        if self.yummly.is_configured() {
            Ok(&self.yummly)
        } else {
            Err(ConfigError::NotConfigured {
                section: "yummly".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pantry").join("config.toml"))
    }
}
