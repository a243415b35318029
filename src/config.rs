//! Service configuration.
//!
//! All settings come from environment variables (a `.env` file is honored
//! when present, see `main`). The API credential is required; everything
//! else has a default. The assembled [`Config`] is passed by reference into
//! the components that need it, so tests construct one directly instead of
//! mutating the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Environment variables recognized for the API credential, in priority
/// order. The first one present wins.
const API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

const DEFAULT_MODEL: &str = "gemini-flash-latest";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_DIR: &str = "frontend";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Errors that can occur while assembling the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no API key found: set GOOGLE_API_KEY or GEMINI_API_KEY")]
    MissingApiKey,
}

/// Runtime configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the text-generation provider.
    pub api_key: String,
    /// Name of the environment variable the key was read from.
    pub key_source: &'static str,
    /// Model identifier passed to the provider.
    pub model: String,
    /// Base URL of the provider API.
    pub api_base: String,
    /// Timeout applied to each generation request.
    pub request_timeout: Duration,
    /// Sampling temperature for generation.
    pub temperature: f64,
    /// HTTP listen port.
    pub port: u16,
    /// Directory holding the static frontend.
    pub frontend_dir: PathBuf,
}

impl Config {
    /// Read the configuration from the environment.
    ///
    /// Absence of both credential variables is fatal and reported as
    /// [`ConfigError::MissingApiKey`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let (api_key, key_source) = API_KEY_VARS
            .iter()
            .find_map(|name| {
                env::var(name)
                    .ok()
                    .filter(|value| !value.is_empty())
                    .map(|value| (value, *name))
            })
            .ok_or(ConfigError::MissingApiKey)?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let frontend_dir = env::var("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_FRONTEND_DIR));

        Ok(Self {
            api_key,
            key_source,
            model,
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
            port,
            frontend_dir,
        })
    }
}
