// ABOUTME: OAuth token model, on-disk persistence, and token endpoint calls
// ABOUTME: Token material is redacted from Debug output and never logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token lifecycle: load from disk or a base64 blob at start-up, refresh on
//! expiry against the upstream token endpoint, persist back after every
//! change. The on-disk layout (`oauth2_token.json` inside a dot-directory,
//! optional base64 dump file) matches what existing Garmin token tooling
//! writes, so already-provisioned directories keep working.

use crate::constants::garmin_api;
use crate::errors::{AppError, AppResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Duration, TimeZone, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// OAuth2 token pair issued by the upstream service
#[derive(Clone, Serialize, Deserialize)]
pub struct OAuth2Token {
    /// Current access token
    pub access_token: String,
    /// Refresh token for obtaining new access tokens
    pub refresh_token: Option<String>,
    /// When the access token expires
    pub expires_at: Option<DateTime<Utc>>,
    /// Token type, normally `Bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Granted scope string
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

impl OAuth2Token {
    /// Whether the access token is already past its expiry
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|expires_at| Utc::now() >= expires_at)
    }

    /// Whether the token expires within the threshold and should be refreshed
    #[must_use]
    pub fn needs_refresh(&self, threshold_minutes: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Utc::now() + Duration::minutes(threshold_minutes) > expires_at)
    }
}

// Token material must never leak through Debug formatting
impl fmt::Debug for OAuth2Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2Token")
            .field("access_token", &"[redacted]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[redacted]"),
            )
            .field("expires_at", &self.expires_at)
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Token endpoint response structure
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    scope: Option<String>,
}

impl TokenResponse {
    /// Convert the wire response into a stored token, computing expiry
    #[must_use]
    pub fn into_token(self) -> OAuth2Token {
        let expires_at = self
            .expires_at
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
            .or_else(|| {
                self.expires_in
                    .map(|secs| Utc::now() + Duration::seconds(secs))
            });

        OAuth2Token {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            token_type: self.token_type.unwrap_or_else(default_token_type),
            scope: self.scope,
        }
    }
}

/// On-disk token persistence
///
/// Tokens live in `<dir>/oauth2_token.json`. When a base64 blob path is
/// configured, the store can import from it when the directory is empty and
/// mirrors every save into it.
pub struct TokenStore {
    dir: PathBuf,
    blob_path: Option<PathBuf>,
}

impl TokenStore {
    /// Create a store over the given token directory
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            blob_path: None,
        }
    }

    /// Create a store that also mirrors tokens into a base64 blob file
    #[must_use]
    pub fn with_blob(dir: PathBuf, blob_path: Option<PathBuf>) -> Self {
        Self { dir, blob_path }
    }

    /// Path of the persisted token file
    #[must_use]
    pub fn token_path(&self) -> PathBuf {
        self.dir.join(garmin_api::TOKEN_FILE)
    }

    /// Load the persisted token, if any
    ///
    /// Falls back to the base64 blob when the directory has no token file.
    ///
    /// # Errors
    ///
    /// Returns an error when a present token file cannot be read or parsed.
    pub fn load(&self) -> AppResult<Option<OAuth2Token>> {
        let path = self.token_path();
        if path.is_file() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                AppError::config(format!("cannot read token file {}: {e}", path.display()))
            })?;
            let token: OAuth2Token = serde_json::from_str(&raw).map_err(|e| {
                AppError::invalid_format(format!(
                    "token file {} is not a valid token: {e}",
                    path.display()
                ))
            })?;
            debug!("loaded token from {}", path.display());
            return Ok(Some(token));
        }

        if let Some(blob_path) = &self.blob_path {
            if blob_path.is_file() {
                return Self::load_blob(blob_path).map(Some);
            }
        }

        Ok(None)
    }

    /// Persist the token to disk (and the base64 blob when configured)
    ///
    /// # Errors
    ///
    /// Returns an error when the token directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, token: &OAuth2Token) -> AppResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::config(format!(
                "cannot create token directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.token_path();
        let serialized = serde_json::to_string_pretty(token)?;
        fs::write(&path, &serialized)
            .map_err(|e| AppError::config(format!("cannot write {}: {e}", path.display())))?;
        restrict_permissions(&path);
        info!("token persisted to {}", path.display());

        if let Some(blob_path) = &self.blob_path {
            let encoded = BASE64.encode(serialized.as_bytes());
            if let Err(e) = fs::write(blob_path, encoded) {
                warn!("cannot mirror token blob to {}: {e}", blob_path.display());
            } else {
                restrict_permissions(blob_path);
            }
        }

        Ok(())
    }

    fn load_blob(blob_path: &Path) -> AppResult<OAuth2Token> {
        let raw = fs::read_to_string(blob_path).map_err(|e| {
            AppError::config(format!("cannot read token blob {}: {e}", blob_path.display()))
        })?;
        let decoded = BASE64.decode(raw.trim().as_bytes()).map_err(|e| {
            AppError::invalid_format(format!(
                "token blob {} is not valid base64: {e}",
                blob_path.display()
            ))
        })?;
        let token: OAuth2Token = serde_json::from_slice(&decoded).map_err(|e| {
            AppError::invalid_format(format!(
                "token blob {} does not decode to a token: {e}",
                blob_path.display()
            ))
        })?;
        debug!("loaded token from blob {}", blob_path.display());
        Ok(token)
    }
}

/// Tighten file permissions on persisted token material
#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        warn!("cannot restrict permissions on {}: {e}", path.display());
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}

/// Refresh an access token using the refresh token grant
///
/// # Errors
///
/// Returns an authentication error when the token endpoint rejects the
/// refresh token, and an upstream error on network failure.
pub async fn refresh_access_token(
    http: &Client,
    token_url: &str,
    refresh_token: &str,
) -> AppResult<OAuth2Token> {
    info!("refreshing Garmin Connect access token");

    let params = [
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
    ];

    let response = http.post(token_url).form(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::external_auth(format!(
            "token refresh failed with status {status}"
        )));
    }

    let token_response: TokenResponse = response.json().await.map_err(|e| {
        AppError::external_auth(format!("cannot parse token refresh response: {e}"))
    })?;

    Ok(token_response.into_token())
}

/// Exchange account credentials for a token via the password grant
///
/// This is the single forwarding call used for first-time setup when no
/// token exists on disk; it is not an SSO flow.
///
/// # Errors
///
/// Returns an authentication error when the token endpoint rejects the
/// credentials, and an upstream error on network failure.
pub async fn exchange_password(
    http: &Client,
    token_url: &str,
    email: &str,
    password: &str,
) -> AppResult<OAuth2Token> {
    info!("exchanging account credentials for a token");

    let params = [
        ("grant_type", "password"),
        ("username", email),
        ("password", password),
    ];

    let response = http.post(token_url).form(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::auth_invalid(format!(
            "credential exchange failed with status {status}; \
             provision a token directory if the account requires SSO"
        )));
    }

    let token_response: TokenResponse = response.json().await.map_err(|e| {
        AppError::external_auth(format!("cannot parse token exchange response: {e}"))
    })?;

    Ok(token_response.into_token())
}
