// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Modern Forms fans.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::command::StateCommand;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Transport};

/// Path of the fan's JSON endpoint.
const API_PATH: &str = "/mf";

/// Extra time the overall request deadline allows past the connect deadline.
const CONNECT_GRACE: Duration = Duration::from_millis(50);

// ============================================================================
// HttpConfig - Connection parameters for a fan
// ============================================================================

/// Configuration for an HTTP connection to a fan.
///
/// # Examples
///
/// ```
/// use modernforms::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.40");
/// assert_eq!(config.endpoint(), "http://192.168.1.40/mf");
///
/// let config = HttpConfig::new("fan.local")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(2));
/// assert_eq!(config.endpoint(), "http://fan.local:8080/mf");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout, covering connect and read.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the fan, optionally with
    ///   a `:port` suffix
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the full endpoint URL from this configuration.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let host = self
            .host
            .strip_prefix("http://")
            .unwrap_or(&self.host)
            .trim_end_matches('/');
        let port_suffix = if self.port == Self::DEFAULT_PORT {
            String::new()
        } else {
            format!(":{}", self.port)
        };
        format!("http://{host}{port_suffix}{API_PATH}")
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// No request is made.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let endpoint = self.endpoint();

        // The connect deadline has to expire before the overall one so that a
        // connect that never completes surfaces as a connection failure.
        let client = Client::builder()
            .connect_timeout(self.timeout)
            .timeout(self.timeout.saturating_add(CONNECT_GRACE))
            .build()
            .map_err(ProtocolError::ClientBuild)?;

        Ok(HttpClient {
            endpoint,
            timeout: self.timeout,
            client,
        })
    }
}

// ============================================================================
// HttpClient - reqwest-backed transport
// ============================================================================

/// HTTP client for communicating with a fan.
///
/// Posts JSON commands to `http://<host>/mf`.
///
/// # Examples
///
/// ```no_run
/// use modernforms::command::StateCommand;
/// use modernforms::protocol::{HttpClient, Transport};
///
/// # async fn example() -> modernforms::Result<()> {
/// let client = HttpClient::new("192.168.1.40")?;
/// let response = client.send(&StateCommand::query_dynamic()).await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the endpoint URL of the fan.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Maps a transport failure onto the error taxonomy.
    fn classify(&self, err: reqwest::Error) -> ProtocolError {
        let endpoint = self.endpoint.clone();
        // A connect timeout reports both is_connect and is_timeout.
        if err.is_connect() {
            tracing::warn!(endpoint = %endpoint, error = %err, "Connection failed");
            ProtocolError::Connection {
                endpoint,
                source: err,
            }
        } else if err.is_timeout() {
            tracing::warn!(endpoint = %endpoint, error = %err, "Request timed out");
            ProtocolError::Timeout {
                endpoint,
                timeout: self.timeout,
                source: err,
            }
        } else {
            tracing::warn!(endpoint = %endpoint, error = %err, "Request failed");
            ProtocolError::Request {
                endpoint,
                source: err,
            }
        }
    }
}

impl Transport for HttpClient {
    async fn send(&self, command: &StateCommand) -> Result<CommandResponse, ProtocolError> {
        tracing::debug!(endpoint = %self.endpoint, ?command, "Sending HTTP command");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(command)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(ProtocolError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }
}
