// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the automation REST API.

use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, ProtocolError};
use crate::protocol::{ApiResponse, EntityState};
use crate::types::EntityId;

// ============================================================================
// HaConfig - Client configuration
// ============================================================================

/// Configuration for the automation API client.
///
/// The base URL points at the API root: either the relay's rewritten path
/// (`http://home.local:4000/ha/api`) or the upstream directly
/// (`http://homeassistant:8123/api`), in which case a bearer token must be
/// supplied.
///
/// # Examples
///
/// ```
/// use hausboard::protocol::HaConfig;
/// use std::time::Duration;
///
/// // Through the relay, no token on this leg
/// let config = HaConfig::new("http://home.local:4000/ha/api");
///
/// // Direct to the upstream
/// let config = HaConfig::new("http://homeassistant:8123/api")
///     .with_token("long-lived-access-token")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HaConfig {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl HaConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified API root.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a bearer token for direct upstream access.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the token if set.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an [`HaClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HaClient, ProtocolError> {
        let base_url = normalize_base_url(self.base_url);

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HaClient {
            base_url,
            client,
            token: self.token,
        })
    }
}

// ============================================================================
// HaClient - API client implementation
// ============================================================================

/// HTTP client for the `states` and `services` endpoints.
///
/// # Examples
///
/// ```no_run
/// use hausboard::protocol::HaClient;
/// use hausboard::types::EntityId;
///
/// # async fn example() -> hausboard::Result<()> {
/// let client = HaClient::new("http://home.local:4000/ha/api")?;
/// let state = client.entity_state(&EntityId::sensor("kitchen_temperature")).await?;
/// println!("{}", state.state);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HaClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl HaClient {
    /// Creates a new client for the specified API root with defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProtocolError> {
        HaConfig::new(base_url).into_client()
    }

    /// Returns the base URL of the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the raw state document of an entity.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport failure, authentication
    /// rejection, or a non-success status.
    pub async fn get_state(&self, entity: &EntityId) -> Result<ApiResponse, ProtocolError> {
        let url = format!(
            "{}/states/{}",
            self.base_url,
            urlencoding::encode(entity.as_str())
        );

        tracing::debug!(url = %url, "Fetching entity state");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let response = check_status(response)?;

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received entity state");

        Ok(ApiResponse::new(body))
    }

    /// Fetches and parses the state document of an entity.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or if the response body is not a
    /// valid state document.
    pub async fn entity_state(&self, entity: &EntityId) -> Result<EntityState, Error> {
        let response = self.get_state(entity).await?;
        Ok(response.parse()?)
    }

    /// Fetches the state of a `sensor.` entity by its bare object id.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or if the response body is not a
    /// valid state document.
    pub async fn sensor_state(&self, object_id: &str) -> Result<EntityState, Error> {
        self.entity_state(&EntityId::sensor(object_id)).await
    }

    /// Invokes a service with a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport failure, authentication
    /// rejection, or a non-success status.
    pub async fn call_service(
        &self,
        domain: &str,
        service: &str,
        payload: &serde_json::Value,
    ) -> Result<ApiResponse, ProtocolError> {
        let url = format!("{}/services/{domain}/{service}", self.base_url);

        tracing::debug!(url = %url, payload = %payload, "Calling service");

        let mut request = self.client.post(&url).json(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let response = check_status(response)?;

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Service call succeeded");

        Ok(ApiResponse::new(body))
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProtocolError> {
    if response.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ProtocolError::AuthenticationFailed);
    }

    if !response.status().is_success() {
        return Err(ProtocolError::UnexpectedStatus {
            status: response.status().as_u16(),
            reason: response
                .status()
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
        });
    }

    Ok(response)
}

fn normalize_base_url(base_url: String) -> String {
    let with_scheme = if base_url.starts_with("http://") || base_url.starts_with("https://") {
        base_url
    } else {
        format!("http://{base_url}")
    };
    with_scheme.trim_end_matches('/').to_string()
}
