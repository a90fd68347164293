// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads .env then process env; owns credential and token-directory resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration management
//!
//! Configuration is environment-only: an optional `.env` file is loaded
//! first, then process environment variables win. Account credentials and
//! the token directory keep the variable names established Garmin tooling
//! uses (`GARMIN_EMAIL`, `GARMIN_PASSWORD`, `GARMINTOKENS`,
//! `GARMINTOKENS_BASE64`).

use crate::constants::{env as env_names, garmin_api};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default operational level
    #[default]
    Info,
    /// Per-request diagnostics
    Debug,
    /// Full wire-level detail
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Garmin account email, if provided
    pub email: Option<String>,
    /// Garmin account password, if provided
    pub password: Option<String>,
    /// Directory holding persisted OAuth tokens
    pub token_dir: PathBuf,
    /// Optional path of a base64 token blob to import when the directory is empty
    pub token_base64_path: Option<PathBuf>,
    /// Log level
    pub log_level: LogLevel,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when neither credentials nor a token
    /// directory path can be resolved.
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let email = non_empty_var(env_names::GARMIN_EMAIL);
        let password = non_empty_var(env_names::GARMIN_PASSWORD);

        let token_dir = non_empty_var(env_names::GARMIN_TOKENS)
            .unwrap_or_else(|| garmin_api::DEFAULT_TOKEN_DIR.to_owned());
        let token_dir = expand_home(&token_dir)?;

        let token_base64_path = non_empty_var(env_names::GARMIN_TOKENS_BASE64)
            .map(|p| expand_home(&p))
            .transpose()?;

        let log_level = LogLevel::from_str_or_default(
            &env::var(env_names::RUST_LOG).unwrap_or_else(|_| "info".to_owned()),
        );

        Ok(Self {
            email,
            password,
            token_dir,
            token_base64_path,
            log_level,
        })
    }

    /// Account credentials for the password-grant fallback, when both are set
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) => Some((email, password)),
            _ => None,
        }
    }

    /// One-line configuration summary for startup logging.
    ///
    /// Never includes the password or token material.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "email={}, password={}, token_dir={}, token_blob={}, log_level={}",
            self.email.as_deref().unwrap_or("<unset>"),
            if self.password.is_some() { "<set>" } else { "<unset>" },
            self.token_dir.display(),
            self.token_base64_path
                .as_deref()
                .map_or_else(|| "<unset>".to_owned(), |p| p.display().to_string()),
            self.log_level,
        )
    }
}

/// Read an environment variable, treating empty values as unset
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Expand a leading `~` to the user's home directory
fn expand_home(path: &str) -> AppResult<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::config("cannot resolve home directory for '~' expansion"))?;
        Ok(home.join(rest))
    } else if path == "~" {
        dirs::home_dir()
            .ok_or_else(|| AppError::config("cannot resolve home directory for '~' expansion"))
    } else {
        Ok(Path::new(path).to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_expand_home_passthrough() {
        let p = expand_home("/tmp/tokens").unwrap();
        assert_eq!(p, PathBuf::from("/tmp/tokens"));
    }
}
