// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client for the automation REST API.
//!
//! This module provides the HTTP client used for reading entity states and
//! invoking services. The client talks either to the authenticated relay
//! (no token needed on this leg) or directly to the upstream API with a
//! bearer token.
//!
//! # Types
//!
//! - [`HaClient`]: HTTP client for `states` and `services` endpoints
//! - [`HaConfig`]: builder-style client configuration
//! - [`EntityState`]: deserialized entity state document
//! - [`ApiResponse`]: raw response wrapper with typed parsing

mod http;

pub use http::{HaClient, HaConfig};

use chrono::{DateTime, Utc};

/// Response from an API call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The raw JSON response body.
    body: String,
}

impl ApiResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::error::ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// State document of a single entity.
///
/// The `state` field is always a string on the wire; sensors carry their
/// numeric reading in it, switches carry `"on"`/`"off"`.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct EntityState {
    /// The entity this document describes.
    pub entity_id: String,
    /// The raw state string.
    pub state: String,
    /// Free-form attribute map.
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    /// When the state last changed.
    #[serde(default)]
    pub last_changed: Option<DateTime<Utc>>,
    /// When the document was last written.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl EntityState {
    /// Whether the entity counts as switched on.
    ///
    /// Anything other than the literal `"off"` is on; dimmed lights report
    /// their mode strings and still count.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state != "off"
    }

    /// Parses the state string as a numeric reading.
    ///
    /// Returns `None` for `unavailable`, `unknown`, and anything else that
    /// does not parse as a finite number.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        self.state
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}
