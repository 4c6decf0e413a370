// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authenticated relay in front of the automation API.
//!
//! The dashboard never holds the API token. Requests under `/ha/` are
//! stripped of that prefix and forwarded to the upstream with the token
//! injected server-side; responses stream back without buffering.
//!
//! # Examples
//!
//! ```no_run
//! use hausboard::relay::{RelayState, router};
//!
//! # async fn example() -> hausboard::Result<()> {
//! let state = RelayState::new("http://homeassistant:8123", "token")?;
//! let app = router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # Ok(())
//! # }
//! ```

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{HeaderMap, HeaderName};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};

use crate::error::{ProtocolError, Result};

/// Shared state of the relay: the upstream base and the injected token.
#[derive(Debug, Clone)]
pub struct RelayState {
    client: reqwest::Client,
    upstream: String,
    token: String,
}

impl RelayState {
    /// Creates the relay state for one upstream.
    ///
    /// # Errors
    ///
    /// Returns an error when the forwarding HTTP client cannot be built.
    pub fn new(upstream: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ProtocolError::Http)?;
        Ok(Self {
            client,
            upstream: upstream.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }
}

/// Builds the relay router: `/ha/*` forwarding plus the health endpoint.
#[must_use]
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/ha", any(forward))
        .route("/ha/", any(forward))
        .route("/ha/*rest", any(forward))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn forward(State(state): State<RelayState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();

    let path = parts.uri.path().strip_prefix("/ha").unwrap_or("");
    let url = upstream_url(&state.upstream, path, parts.uri.query());
    tracing::debug!(method = %parts.method, url = %url, "forwarding request");

    let upstream = state
        .client
        .request(parts.method, &url)
        .headers(forwarded_headers(&parts.headers))
        .bearer_auth(&state.token)
        .body(reqwest::Body::wrap_stream(body.into_data_stream()))
        .send()
        .await;

    match upstream {
        Ok(response) => {
            let mut builder = Response::builder().status(response.status());
            if let Some(headers) = builder.headers_mut() {
                for (name, value) in response.headers() {
                    if !is_hop_header(name) {
                        headers.insert(name.clone(), value.clone());
                    }
                }
            }
            builder
                .body(Body::from_stream(response.bytes_stream()))
                .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
        }
        Err(err) => {
            tracing::warn!(url = %url, error = %err, "upstream request failed");
            (StatusCode::BAD_GATEWAY, "upstream unreachable").into_response()
        }
    }
}

fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{upstream}{path}?{query}"),
        None => format!("{upstream}{path}"),
    }
}

/// Copies client headers, dropping the ones the relay owns or the new
/// connection renders wrong.
fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::new();
    for (name, value) in headers {
        if name == header::HOST || name == header::AUTHORIZATION || is_hop_header(name) {
            continue;
        }
        forwarded.insert(name.clone(), value.clone());
    }
    forwarded
}

fn is_hop_header(name: &HeaderName) -> bool {
    name == header::CONNECTION
        || name == header::TRANSFER_ENCODING
        || name == header::CONTENT_LENGTH
        || name == header::UPGRADE
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn upstream_url_keeps_the_query_string() {
        assert_eq!(
            upstream_url("http://ha:8123", "/api/states/sensor.x", None),
            "http://ha:8123/api/states/sensor.x"
        );
        assert_eq!(
            upstream_url("http://ha:8123", "/api/states", Some("limit=5")),
            "http://ha:8123/api/states?limit=5"
        );
    }

    #[test]
    fn state_normalizes_a_trailing_slash() {
        let state = RelayState::new("http://ha:8123/", "token").expect("state");
        assert_eq!(state.upstream, "http://ha:8123");
    }

    #[test]
    fn client_authorization_never_reaches_the_upstream() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer no"));
        headers.insert(header::HOST, HeaderValue::from_static("home.local:4000"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let forwarded = forwarded_headers(&headers);
        assert!(forwarded.get(header::AUTHORIZATION).is_none());
        assert!(forwarded.get(header::HOST).is_none());
        assert_eq!(
            forwarded.get(header::ACCEPT),
            Some(&HeaderValue::from_static("application/json"))
        );
    }
}
