// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for communicating with Modern Forms fans.
//!
//! The fan exposes a single JSON endpoint. [`HttpClient`] posts
//! [`StateCommand`]s to it with `reqwest`; anything else implementing
//! [`Transport`] can be plugged into [`FanClient`](crate::FanClient) instead.

mod http;

pub use http::{HttpClient, HttpConfig};

use crate::command::StateCommand;
use crate::error::{ParseError, ProtocolError};
use crate::state::DeviceState;

/// Response body from the fan.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    /// The raw JSON response body.
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
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
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Parses the response as a (partial) device state.
    ///
    /// # Errors
    ///
    /// Returns error if the body is not a JSON object of state fields.
    pub fn state(&self) -> Result<DeviceState, ParseError> {
        self.parse()
    }
}

/// Something that can deliver a [`StateCommand`] to a fan.
///
/// Each call is one request/response round trip.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a command and returns the fan's response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command fails to send or receive.
    async fn send(&self, command: &StateCommand) -> Result<CommandResponse, ProtocolError>;
}
