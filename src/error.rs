// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `modernforms` library.
//!
//! Transport failures are classified into connection failures, timeouts,
//! and everything else. Each variant keeps the original `reqwest` error as
//! its source so the full chain is available for diagnostics.

use std::time::Duration;

use thiserror::Error;

use crate::state::StateField;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the fan.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The fan answered with a body that is not a state object.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A state field was read before the fan ever reported it.
    ///
    /// Call [`FanClient::get_device_state`](crate::FanClient::get_device_state)
    /// first to populate the cache.
    #[error("state field `{0}` has not been populated yet")]
    NotPopulated(StateField),
}

/// Errors related to HTTP communication with the fan.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// No connection could be established to the fan.
    #[error("failed to connect to {endpoint}")]
    Connection {
        /// The endpoint that was being contacted.
        endpoint: String,
        /// The underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete within the configured timeout.
    #[error("request to {endpoint} timed out after {} ms", .timeout.as_millis())]
    Timeout {
        /// The endpoint that was being contacted.
        endpoint: String,
        /// The configured per-request timeout.
        timeout: Duration,
        /// The underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// Any other transport failure, left unclassified.
    #[error("request to {endpoint} failed")]
    Request {
        /// The endpoint that was being contacted.
        endpoint: String,
        /// The underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The fan answered with a non-success HTTP status.
    #[error("{endpoint} answered HTTP {status}: {body}")]
    Status {
        /// The endpoint that was contacted.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, kept for logging.
        body: String,
    },

    /// The HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Errors related to parsing fan responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
