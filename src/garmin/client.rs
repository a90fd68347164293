// ABOUTME: Authenticated Garmin Connect HTTP client implementing the GarminApi trait
// ABOUTME: Bearer GETs with one token refresh and one retry on a 401 response
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Garmin Connect client
//!
//! `GarminClient` owns the process-wide credential handle: the token slot
//! behind a `tokio::sync::RwLock`, the shared `reqwest::Client`, and the
//! on-disk [`TokenStore`]. Endpoint paths follow the Garmin Connect consumer
//! API as exercised by the `python-garminconnect` library
//! (<https://github.com/cyberjunky/python-garminconnect>).
//!
//! A handful of wellness endpoints embed the account's display name in the
//! URL path; the client fetches the social profile once after login and
//! caches the identifiers it needs.

use super::api::GarminApi;
use super::token::{self, OAuth2Token, TokenStore};
use crate::constants::{garmin_api, limits};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Endpoint configuration for the Garmin Connect API
#[derive(Debug, Clone)]
pub struct GarminConfig {
    /// Base URL for authenticated API calls
    pub api_base_url: String,
    /// OAuth token endpoint URL
    pub token_url: String,
}

impl Default for GarminConfig {
    fn default() -> Self {
        Self {
            api_base_url: garmin_api::API_BASE_URL.to_owned(),
            token_url: garmin_api::TOKEN_URL.to_owned(),
        }
    }
}

/// Profile identifiers several wellness endpoints embed in their URL paths
#[derive(Debug, Clone)]
struct ProfileRef {
    display_name: String,
    profile_id: Option<u64>,
}

/// The subset of the social profile the client itself needs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SocialProfileResponse {
    display_name: String,
    profile_id: Option<u64>,
    id: Option<u64>,
}

/// Authenticated Garmin Connect client
pub struct GarminClient {
    config: GarminConfig,
    http: Client,
    token: RwLock<Option<OAuth2Token>>,
    profile: RwLock<Option<ProfileRef>>,
    store: TokenStore,
}

impl GarminClient {
    /// Create a new client over the given token store
    #[must_use]
    pub fn new(config: GarminConfig, store: TokenStore) -> Self {
        Self {
            config,
            http: Client::new(),
            token: RwLock::new(None),
            profile: RwLock::new(None),
            store,
        }
    }

    /// Check whether the client currently holds a usable token
    pub async fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .await
            .as_ref()
            .is_some_and(|t| !t.is_expired())
    }

    /// Initialize the credential handle
    ///
    /// Loads the persisted token (directory first, base64 blob second),
    /// refreshes it when close to expiry, or falls back to a single
    /// credential exchange when nothing is on disk. The resulting token is
    /// persisted before the client is considered ready, and the social
    /// profile is fetched once to prime the identifier cache.
    ///
    /// # Errors
    ///
    /// Returns an authentication error when no token can be obtained.
    pub async fn login(&self, credentials: Option<(&str, &str)>) -> AppResult<()> {
        let loaded = self.store.load()?;

        let token = match loaded {
            Some(existing) if existing.needs_refresh(limits::TOKEN_REFRESH_THRESHOLD_MINUTES) => {
                match self.try_refresh(&existing).await {
                    Ok(refreshed) => refreshed,
                    Err(refresh_err) => {
                        // A dead refresh token is recoverable when credentials are present
                        if let Some((email, password)) = credentials {
                            warn!("stored token could not be refreshed: {refresh_err}");
                            token::exchange_password(
                                &self.http,
                                &self.config.token_url,
                                email,
                                password,
                            )
                            .await?
                        } else {
                            return Err(refresh_err);
                        }
                    }
                }
            }
            Some(existing) => existing,
            None => {
                let (email, password) = credentials.ok_or_else(|| {
                    AppError::auth_required(
                        "no stored token and GARMIN_EMAIL/GARMIN_PASSWORD are not set",
                    )
                })?;
                token::exchange_password(&self.http, &self.config.token_url, email, password)
                    .await?
            }
        };

        self.store.save(&token)?;
        *self.token.write().await = Some(token);

        // Prime the display-name cache; also proves the token works
        let profile = self.ensure_profile().await?;
        info!(
            "Garmin Connect client ready for account '{}'",
            profile.display_name
        );
        Ok(())
    }

    async fn try_refresh(&self, existing: &OAuth2Token) -> AppResult<OAuth2Token> {
        let refresh_token = existing
            .refresh_token
            .as_deref()
            .ok_or_else(|| AppError::auth_expired("stored token has no refresh token"))?;
        let mut refreshed =
            token::refresh_access_token(&self.http, &self.config.token_url, refresh_token).await?;
        // Some refresh responses omit the refresh token; keep the old one
        if refreshed.refresh_token.is_none() {
            refreshed.refresh_token = existing.refresh_token.clone();
        }
        Ok(refreshed)
    }

    /// Clone the current access token out of the lock
    async fn bearer(&self) -> AppResult<String> {
        let guard = self.token.read().await;
        guard
            .as_ref()
            .map(|t| t.access_token.clone())
            .ok_or_else(|| AppError::auth_required("client is not logged in"))
    }

    /// Refresh the stored token once, persisting the replacement
    async fn refresh_once(&self) -> AppResult<()> {
        // Clone what we need so the lock is not held across the refresh call
        let refresh_token = {
            let guard = self.token.read().await;
            guard
                .as_ref()
                .and_then(|t| t.refresh_token.clone())
                .ok_or_else(|| {
                    AppError::auth_expired("access token rejected and no refresh token is stored")
                })?
        };

        let mut refreshed =
            token::refresh_access_token(&self.http, &self.config.token_url, &refresh_token).await?;
        if refreshed.refresh_token.is_none() {
            refreshed.refresh_token = Some(refresh_token);
        }
        self.store.save(&refreshed)?;
        *self.token.write().await = Some(refreshed);
        Ok(())
    }

    async fn send(&self, url: &str) -> AppResult<Response> {
        let bearer = self.bearer().await?;
        Ok(self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {bearer}"))
            .send()
            .await?)
    }

    /// Authenticated GET returning the payload as received.
    ///
    /// A 401 triggers exactly one token refresh, after which the original
    /// request is retried once.
    async fn api_get(&self, endpoint: &str) -> AppResult<Value> {
        let url = format!(
            "{}/{}",
            self.config.api_base_url,
            endpoint.trim_start_matches('/')
        );
        debug!("GET {url}");

        let mut response = self.send(&url).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            info!("access token rejected, refreshing once");
            self.refresh_once().await?;
            response = self.send(&url).await?;

            if response.status() == StatusCode::UNAUTHORIZED {
                return Err(AppError::auth_expired(
                    "Garmin Connect rejected the refreshed token",
                ));
            }
        }

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(endpoint.to_owned()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Garmin Connect request failed - status: {status}, body: {body}");
            return Err(AppError::external_service(format!(
                "Garmin Connect request failed with status {status}"
            )));
        }

        Ok(response.json::<Value>().await?)
    }

    /// Cached profile identifiers, fetched on first use
    async fn ensure_profile(&self) -> AppResult<ProfileRef> {
        if let Some(profile) = self.profile.read().await.as_ref() {
            return Ok(profile.clone());
        }

        let payload = self.api_get("userprofile-service/socialProfile").await?;
        let parsed: SocialProfileResponse = serde_json::from_value(payload).map_err(|e| {
            AppError::external_service(format!("social profile payload is missing fields: {e}"))
        })?;

        let profile = ProfileRef {
            display_name: parsed.display_name,
            profile_id: parsed.profile_id.or(parsed.id),
        };
        *self.profile.write().await = Some(profile.clone());
        Ok(profile)
    }

    async fn display_name(&self) -> AppResult<String> {
        Ok(self.ensure_profile().await?.display_name)
    }

    async fn profile_id(&self) -> AppResult<u64> {
        self.ensure_profile().await?.profile_id.ok_or_else(|| {
            AppError::external_service("social profile did not include a numeric profile id")
        })
    }
}

#[async_trait]
impl GarminApi for GarminClient {
    async fn get_user_profile(&self) -> AppResult<Value> {
        self.api_get("userprofile-service/socialProfile").await
    }

    async fn get_user_settings(&self) -> AppResult<Value> {
        self.api_get("userprofile-service/userprofile/user-settings")
            .await
    }

    async fn get_activities(&self, start: usize, limit: usize) -> AppResult<Value> {
        let endpoint = format!(
            "activitylist-service/activities/search/activities?start={start}&limit={limit}"
        );
        self.api_get(&endpoint).await
    }

    async fn get_activity(&self, activity_id: &str) -> AppResult<Value> {
        let endpoint = format!("activity-service/activity/{activity_id}");
        self.api_get(&endpoint).await
    }

    async fn get_activity_splits(&self, activity_id: &str) -> AppResult<Value> {
        let endpoint = format!("activity-service/activity/{activity_id}/splits");
        self.api_get(&endpoint).await
    }

    async fn get_activities_by_date(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        activity_type: Option<&str>,
    ) -> AppResult<Value> {
        let mut endpoint = format!(
            "activitylist-service/activities/search/activities?startDate={start_date}&endDate={end_date}"
        );
        if let Some(activity_type) = activity_type {
            endpoint.push_str("&activityType=");
            endpoint.push_str(activity_type);
        }
        self.api_get(&endpoint).await
    }

    async fn get_steps(&self, date: NaiveDate) -> AppResult<Value> {
        let display_name = self.display_name().await?;
        let endpoint =
            format!("wellness-service/wellness/dailySummaryChart/{display_name}?date={date}");
        self.api_get(&endpoint).await
    }

    async fn get_daily_summary(&self, date: NaiveDate) -> AppResult<Value> {
        let display_name = self.display_name().await?;
        let endpoint =
            format!("usersummary-service/usersummary/daily/{display_name}?calendarDate={date}");
        self.api_get(&endpoint).await
    }

    async fn get_heart_rate(&self, date: NaiveDate) -> AppResult<Value> {
        let display_name = self.display_name().await?;
        let endpoint =
            format!("wellness-service/wellness/dailyHeartRate/{display_name}?date={date}");
        self.api_get(&endpoint).await
    }

    async fn get_sleep(&self, date: NaiveDate) -> AppResult<Value> {
        let display_name = self.display_name().await?;
        let endpoint = format!(
            "wellness-service/wellness/dailySleepData/{display_name}?date={date}&nonSleepBufferMinutes={}",
            garmin_api::SLEEP_BUFFER_MINUTES
        );
        self.api_get(&endpoint).await
    }

    async fn get_stress(&self, date: NaiveDate) -> AppResult<Value> {
        let endpoint = format!("wellness-service/wellness/dailyStress/{date}");
        self.api_get(&endpoint).await
    }

    async fn get_body_battery(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Value> {
        let endpoint = format!(
            "wellness-service/wellness/bodyBattery/reports/daily?startDate={start_date}&endDate={end_date}"
        );
        self.api_get(&endpoint).await
    }

    async fn get_hrv(&self, date: NaiveDate) -> AppResult<Value> {
        let endpoint = format!("hrv-service/hrv/{date}");
        self.api_get(&endpoint).await
    }

    async fn get_training_status(&self, date: NaiveDate) -> AppResult<Value> {
        let endpoint = format!("metrics-service/metrics/trainingstatus/aggregated?date={date}");
        self.api_get(&endpoint).await
    }

    async fn get_training_readiness(&self, date: NaiveDate) -> AppResult<Value> {
        let endpoint = format!("metrics-service/metrics/trainingreadiness/{date}");
        self.api_get(&endpoint).await
    }

    async fn get_max_metrics(&self, date: NaiveDate) -> AppResult<Value> {
        let endpoint = format!("metrics-service/metrics/maxmet/daily/{date}/{date}");
        self.api_get(&endpoint).await
    }

    async fn get_body_composition(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Value> {
        let endpoint =
            format!("weight-service/weight/dateRange?startDate={start_date}&endDate={end_date}");
        self.api_get(&endpoint).await
    }

    async fn get_weigh_ins(&self, start_date: NaiveDate, end_date: NaiveDate) -> AppResult<Value> {
        let endpoint =
            format!("weight-service/weight/range/{start_date}/{end_date}?includeAll=true");
        self.api_get(&endpoint).await
    }

    async fn get_devices(&self) -> AppResult<Value> {
        self.api_get("device-service/deviceregistration/devices")
            .await
    }

    async fn get_device_settings(&self, device_id: &str) -> AppResult<Value> {
        let endpoint = format!("device-service/deviceservice/device-info/settings/{device_id}");
        self.api_get(&endpoint).await
    }

    async fn get_device_last_used(&self) -> AppResult<Value> {
        self.api_get("device-service/deviceservice/mylastused").await
    }

    async fn get_workouts(&self, start: usize, limit: usize) -> AppResult<Value> {
        let endpoint = format!("workout-service/workouts?start={start}&limit={limit}");
        self.api_get(&endpoint).await
    }

    async fn get_workout(&self, workout_id: &str) -> AppResult<Value> {
        let endpoint = format!("workout-service/workout/{workout_id}");
        self.api_get(&endpoint).await
    }

    async fn get_gear(&self) -> AppResult<Value> {
        let profile_id = self.profile_id().await?;
        let endpoint = format!("gear-service/gear/filterGear?userProfilePk={profile_id}");
        self.api_get(&endpoint).await
    }

    async fn get_earned_badges(&self) -> AppResult<Value> {
        self.api_get("badge-service/badge/earned").await
    }
}
