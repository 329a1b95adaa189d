// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for a single Modern Forms fan.
//!
//! [`FanClient`] keeps a local cache of the fan's state. The fan is always
//! the source of truth: every command is answered with the resulting state,
//! and only that answer is written to the cache. Reads never touch the
//! network.
//!
//! # Round trips
//!
//! Each operation makes one request, plus one extra request for static
//! shadow data as long as the fan has not reported `fanType` yet. Once
//! `fanType` is cached, no further static queries are made.
//!
//! # Failures
//!
//! The cache is only updated after a response has been received and parsed.
//! A failed request leaves it exactly as it was. Nothing is retried.

use crate::command::StateCommand;
use crate::error::{Error, Result};
use crate::protocol::{HttpClient, HttpConfig, Transport};
use crate::state::{DeviceState, StateField};
use crate::types::{FanDirection, Season};

/// Client for a Modern Forms fan with optional light kit.
///
/// Operations that talk to the fan take `&mut self`; share a client between
/// tasks by wrapping it in a mutex.
///
/// # Examples
///
/// ```no_run
/// use modernforms::FanClient;
///
/// # async fn example() -> modernforms::Result<()> {
/// let mut fan = FanClient::new("192.168.1.40")?;
///
/// // Populate the cache before reading from it
/// fan.get_device_state(None).await?;
/// println!("fan is on: {}", fan.fan_on()?);
///
/// fan.set_fan(true, Some(3), None).await?;
/// fan.toggle_light().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FanClient<T: Transport = HttpClient> {
    transport: T,
    state: DeviceState,
}

impl FanClient<HttpClient> {
    /// Creates a client for the fan at `host` with default settings.
    ///
    /// The fan is not contacted.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::with_config(HttpConfig::new(host))
    }

    /// Creates a client from an explicit HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_config(config: HttpConfig) -> Result<Self> {
        Ok(Self::with_transport(config.into_client()?))
    }
}

impl<T: Transport> FanClient<T> {
    /// Creates a client on top of any transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            state: DeviceState::new(),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the cached state.
    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    // ========== Cached reads ==========

    /// Returns whether the light is on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPopulated`] if the fan has not reported it yet.
    pub fn light_on(&self) -> Result<bool> {
        require(self.state.light_on(), StateField::LightOn)
    }

    /// Returns the light brightness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPopulated`] if the fan has not reported it yet.
    pub fn light_brightness(&self) -> Result<i64> {
        require(self.state.light_brightness(), StateField::LightBrightness)
    }

    /// Returns whether the fan is on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPopulated`] if the fan has not reported it yet.
    pub fn fan_on(&self) -> Result<bool> {
        require(self.state.fan_on(), StateField::FanOn)
    }

    /// Returns the fan speed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPopulated`] if the fan has not reported it yet.
    pub fn fan_speed(&self) -> Result<i64> {
        require(self.state.fan_speed(), StateField::FanSpeed)
    }

    /// Returns the blade direction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPopulated`] if the fan has not reported it yet.
    pub fn fan_direction(&self) -> Result<&FanDirection> {
        require(self.state.fan_direction(), StateField::FanDirection)
    }

    /// Returns the fan model descriptor from static shadow data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPopulated`] if the fan has not reported it yet.
    pub fn fan_type(&self) -> Result<&str> {
        require(self.state.fan_type(), StateField::FanType)
    }

    // ========== Light ==========

    /// Turns the light on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_light_on(&mut self, on: bool) -> Result<()> {
        self.apply(StateCommand::new().light_on(on)).await
    }

    /// Sets the light brightness.
    ///
    /// Values outside 0-100 are sent anyway; the fan ignores them.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_light_brightness(&mut self, brightness: i64) -> Result<()> {
        self.apply(StateCommand::new().light_brightness(brightness))
            .await
    }

    /// Inverts the cached light state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPopulated`] if the light state is unknown, or an
    /// error if the request fails.
    pub async fn toggle_light(&mut self) -> Result<()> {
        let on = !self.light_on()?;
        self.apply(StateCommand::new().light_on(on)).await
    }

    /// Sets the light state and, optionally, brightness in one request.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_light(&mut self, on: bool, brightness: Option<i64>) -> Result<()> {
        self.apply(
            StateCommand::new()
                .light_on(on)
                .maybe_light_brightness(brightness),
        )
        .await
    }

    // ========== Fan ==========

    /// Turns the fan on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_fan_on(&mut self, on: bool) -> Result<()> {
        self.apply(StateCommand::new().fan_on(on)).await
    }

    /// Sets the fan speed.
    ///
    /// Values outside 1-6 are sent anyway; the fan ignores them.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_fan_speed(&mut self, speed: i64) -> Result<()> {
        self.apply(StateCommand::new().fan_speed(speed)).await
    }

    /// Sets the blade direction.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_fan_direction(&mut self, direction: FanDirection) -> Result<()> {
        self.apply(StateCommand::new().fan_direction(direction))
            .await
    }

    /// Inverts the cached fan state and sets the blade direction.
    ///
    /// Without an explicit `direction`, the default for today's
    /// [`Season`] is used. The season is looked up on every call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPopulated`] if the fan state is unknown, or an
    /// error if the request fails.
    pub async fn toggle_fan(&mut self, direction: Option<FanDirection>) -> Result<()> {
        let on = !self.fan_on()?;
        let direction = direction.unwrap_or_else(|| Season::current().default_direction());
        self.apply(StateCommand::new().fan_on(on).fan_direction(direction))
            .await
    }

    /// Sets the fan state and, optionally, speed and direction in one request.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_fan(
        &mut self,
        on: bool,
        speed: Option<i64>,
        direction: Option<FanDirection>,
    ) -> Result<()> {
        self.apply(
            StateCommand::new()
                .fan_on(on)
                .maybe_fan_speed(speed)
                .maybe_fan_direction(direction),
        )
        .await
    }

    // ========== Synchronization ==========

    /// Refreshes the cache and returns it.
    ///
    /// With `None`, the fan's dynamic shadow data is queried. With
    /// `Some(data)`, `data` is merged without contacting the fan. In both
    /// cases static shadow data is fetched once more if `fanType` is still
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns error if a request fails. A failed static fetch keeps whatever
    /// was merged before it.
    pub async fn get_device_state(&mut self, data: Option<DeviceState>) -> Result<&DeviceState> {
        let update = match data {
            Some(data) => data,
            None => self.exchange(&StateCommand::query_dynamic()).await?,
        };
        self.state.merge(update);

        if !self.state.is_populated(StateField::FanType) {
            tracing::debug!("fanType unknown, fetching static shadow data");
            let statics = self.exchange(&StateCommand::query_static()).await?;
            self.state.merge(statics);
        }

        Ok(&self.state)
    }

    /// Sends a command and folds the fan's answer into the cache.
    async fn apply(&mut self, command: StateCommand) -> Result<()> {
        let reported = self.exchange(&command).await?;
        self.get_device_state(Some(reported)).await?;
        Ok(())
    }

    /// One round trip: send, then parse the reported state.
    async fn exchange(&self, command: &StateCommand) -> Result<DeviceState> {
        let response = self.transport.send(command).await?;
        Ok(response.state()?)
    }
}

fn require<V>(value: Option<V>, field: StateField) -> Result<V> {
    value.ok_or(Error::NotPopulated(field))
}
