//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rshuff/rshuff.toml`
//! 3. Local config: `<dir>/.rshuff.toml`
//! 4. Environment variables: `RSHUFF_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::{CodecOptions, SingleSymbolPolicy, TruncatedPolicy};
use crate::render::RenderOptions;

/// Console rendering configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Label internal tree nodes with symbols and code path, not only weight
    pub show_internal: bool,
    /// Colorize CLI output
    pub color: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_internal: true,
            color: true,
        }
    }
}

/// Raw codec config for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCodecSettings {
    pub truncated: Option<TruncatedPolicy>,
    pub single_symbol: Option<SingleSymbolPolicy>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub show_internal: Option<bool>,
    pub color: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub codec: RawCodecSettings,
    pub render: RawRenderSettings,
}

/// Unified configuration for rshuff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Policies for truncated streams and single-symbol alphabets
    pub codec: CodecOptions,
    pub render: RenderSettings,
}

/// Get the XDG config directory for rshuff.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rshuff").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rshuff.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".rshuff.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// An unset key is None; a set key that does not convert is an error.
fn env_value<T>(lookup: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match lookup {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

/// Parse a policy name such as `drop` or `one-bit`.
fn parse_value<T: DeserializeOwned>(key: &str, value: String) -> Result<T, ApplicationError> {
    toml::Value::String(value.clone())
        .try_into()
        .map_err(|_| ApplicationError::Config {
            message: format!("invalid value for {}: {}", key, value),
        })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            codec: CodecOptions {
                truncated: overlay.codec.truncated.unwrap_or(self.codec.truncated),
                single_symbol: overlay
                    .codec
                    .single_symbol
                    .unwrap_or(self.codec.single_symbol),
            },
            render: RenderSettings {
                show_internal: overlay
                    .render
                    .show_internal
                    .unwrap_or(self.render.show_internal),
                color: overlay.render.color.unwrap_or(self.render.color),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.rshuff.toml`
    #[instrument(level = "debug")]
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Load defaults overlaid with exactly one file, then environment variables.
    #[instrument(level = "debug")]
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        if !path.exists() {
            return Err(ApplicationError::ConfigNotFound(path.to_path_buf()));
        }
        let current = Self::default().merge_with(&load_raw_settings(path)?);
        Self::apply_env_overrides(current)
    }

    /// Apply RSHUFF_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RSHUFF")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("codec.truncated"))? {
            settings.codec.truncated = parse_value("codec.truncated", val)?;
        }
        if let Some(val) = env_value(config.get_string("codec.single_symbol"))? {
            settings.codec.single_symbol = parse_value("codec.single_symbol", val)?;
        }
        if let Some(val) = env_value(config.get_bool("render.show_internal"))? {
            settings.render.show_internal = val;
        }
        if let Some(val) = env_value(config.get_bool("render.color"))? {
            settings.render.color = val;
        }

        Ok(settings)
    }

    pub fn codec_options(&self) -> CodecOptions {
        self.codec
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_internal: self.render.show_internal,
        }
    }

    /// Serialize to TOML, e.g. to show the effective configuration.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
