//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cardsgame/cardsgame.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `CARDSGAME_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for cardsgame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Interface the HTTP API binds to (default: localhost)
    pub host: String,
    /// Port the HTTP API listens on (default: 8080)
    pub port: u16,
    /// Cards drawn when a draw request carries no amount (default: 1)
    pub default_draw_amount: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 8080,
            default_draw_amount: 1,
        }
    }
}

/// Get the XDG config directory for cardsgame.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cardsgame").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cardsgame.toml"))
}

impl Settings {
    /// Address the HTTP API listens on, e.g. `localhost:8080`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/cardsgame/cardsgame.toml`
    /// 3. `config_file`
    /// 4. Environment variables: `CARDSGAME_*` prefix, e.g. `CARDSGAME_PORT=9000`
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("host", defaults.host.clone())
            .map_err(config_err)?
            .set_default("port", i64::from(defaults.port))
            .map_err(config_err)?
            .set_default("default_draw_amount", defaults.default_draw_amount)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = config_file {
            debug!("load: config file {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(Environment::with_prefix("CARDSGAME").try_parsing(true));

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;

        Ok(settings)
    }

    /// Reject values the service cannot run with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.host.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "host must not be empty".into(),
            });
        }
        if self.default_draw_amount <= 0 {
            return Err(ApplicationError::Config {
                message: format!(
                    "default_draw_amount must be positive, got {}",
                    self.default_draw_amount
                ),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cardsgame configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/cardsgame/cardsgame.toml
#   File:   cardsgame --config <file>
#   Env:    CARDSGAME_* environment variables (e.g. CARDSGAME_PORT=9000)

# Interface the HTTP API binds to
# host = "localhost"

# Port the HTTP API listens on
# port = 8080

# Cards drawn when a draw request carries no amount
# default_draw_amount = 1
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
