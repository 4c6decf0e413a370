// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the relay, using wiremock as the upstream.

#![cfg(feature = "relay")]

use hausboard::relay::{RelayState, router};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_relay(upstream: &str, token: &str) -> String {
    let state = RelayState::new(upstream, token).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let relay = serve_relay("http://127.0.0.1:1", "token").await;

    let response = reqwest::get(format!("{relay}/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn prefix_is_stripped_and_token_injected() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/states/sensor.office_temp"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "entity_id": "sensor.office_temp",
            "state": "21.4"
        })))
        .mount(&upstream)
        .await;

    let relay = serve_relay(&upstream.uri(), "secret-token").await;

    let response = reqwest::get(format!("{relay}/ha/api/states/sensor.office_temp"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["state"], "21.4");
}

#[tokio::test]
async fn client_supplied_authorization_is_replaced() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&upstream)
        .await;

    let relay = serve_relay(&upstream.uri(), "secret-token").await;

    let response = reqwest::Client::new()
        .get(format!("{relay}/ha/api/config"))
        .bearer_auth("spoofed")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn post_bodies_and_queries_pass_through() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/services/switch/turn_on"))
        .and(query_param("return_response", "false"))
        .and(body_json(serde_json::json!({"entity_id": "switch.desk"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&upstream)
        .await;

    let relay = serve_relay(&upstream.uri(), "secret-token").await;

    let response = reqwest::Client::new()
        .post(format!(
            "{relay}/ha/api/services/switch/turn_on?return_response=false"
        ))
        .json(&serde_json::json!({"entity_id": "switch.desk"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn upstream_status_codes_pass_through() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/states/switch.missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;

    let relay = serve_relay(&upstream.uri(), "secret-token").await;

    let response = reqwest::get(format!("{relay}/ha/api/states/switch.missing"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn unreachable_upstream_answers_bad_gateway() {
    let relay = serve_relay("http://127.0.0.1:1", "token").await;

    let response = reqwest::get(format!("{relay}/ha/api/states/sensor.x"))
        .await
        .unwrap();
    assert_eq!(response.status(), 502);
}

#[tokio::test]
async fn paths_outside_the_prefix_are_not_forwarded() {
    let upstream = MockServer::start().await;
    let relay = serve_relay(&upstream.uri(), "secret-token").await;

    let response = reqwest::get(format!("{relay}/api/states/sensor.x"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let requests = upstream.received_requests().await.unwrap();
    assert!(requests.is_empty());
}
