//! Configuration module for the reorder prediction service.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: HTTP listener and model artifact.

mod model_config;
mod server_config;

pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig};
pub use server_config::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT, ServerEnvConfig};

use anyhow::{Context, Result};

/// Main service configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_env().context("Failed to load server config")?,
            model: ModelEnvConfig::from_env().context("Failed to load model config")?,
        })
    }
}
