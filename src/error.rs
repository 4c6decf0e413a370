// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the hausboard library.
//!
//! This module provides an error hierarchy for handling failures across the
//! library: value validation, API communication, JSON parsing, and
//! configuration loading.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when classifying
/// sensor data or talking to the automation API.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during API communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while loading configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An entity identifier is not of the `domain.object` form.
    #[error("invalid entity id: {0}")]
    InvalidEntityId(String),

    /// A warning level is outside the 0-4 range.
    #[error("warning level {0} is out of range [0, 4]")]
    InvalidWarningLevel(u8),

    /// A brightness value is outside the valid range (0-255).
    #[error("brightness value {0} is out of range [0, 255]")]
    InvalidBrightness(u16),
}

/// Errors related to API communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("unexpected status: HTTP {status} - {reason}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors related to parsing API responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A threshold band violates its ordering invariant.
    #[error("inverted thresholds for {metric}/{category}: {detail}")]
    InvertedThresholds {
        /// The metric the band belongs to.
        metric: String,
        /// The room category the band belongs to.
        category: String,
        /// Which ordering constraint was violated.
        detail: String,
    },

    /// The configuration document could not be deserialized.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required setting is absent.
    #[error("missing required setting: {0}")]
    MissingSetting(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
