// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Partial-state command.

use crate::types::FanDirection;

/// Query marker value expected by the fan.
const QUERY: u8 = 1;

/// A partial-state payload sent to the fan.
///
/// Only the fields that were set are serialized. Values are not range
/// checked: the fan silently ignores what it does not accept, and the
/// resulting state it echoes back is what the client caches.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    light_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    light_brightness: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fan_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fan_speed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fan_direction: Option<FanDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query_dynamic_shadow_data: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query_static_shadow_data: Option<u8>,
}

impl StateCommand {
    /// Creates an empty command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for the fan's live state.
    #[must_use]
    pub fn query_dynamic() -> Self {
        Self {
            query_dynamic_shadow_data: Some(QUERY),
            ..Self::default()
        }
    }

    /// Creates a query for the fan's static descriptors.
    #[must_use]
    pub fn query_static() -> Self {
        Self {
            query_static_shadow_data: Some(QUERY),
            ..Self::default()
        }
    }

    /// Sets the light power.
    #[must_use]
    pub fn light_on(mut self, on: bool) -> Self {
        self.light_on = Some(on);
        self
    }

    /// Sets the light brightness.
    #[must_use]
    pub fn light_brightness(mut self, brightness: i64) -> Self {
        self.light_brightness = Some(brightness);
        self
    }

    /// Sets the light brightness if one is given.
    #[must_use]
    pub fn maybe_light_brightness(mut self, brightness: Option<i64>) -> Self {
        if brightness.is_some() {
            self.light_brightness = brightness;
        }
        self
    }

    /// Sets the fan power.
    #[must_use]
    pub fn fan_on(mut self, on: bool) -> Self {
        self.fan_on = Some(on);
        self
    }

    /// Sets the fan speed.
    #[must_use]
    pub fn fan_speed(mut self, speed: i64) -> Self {
        self.fan_speed = Some(speed);
        self
    }

    /// Sets the fan speed if one is given.
    #[must_use]
    pub fn maybe_fan_speed(mut self, speed: Option<i64>) -> Self {
        if speed.is_some() {
            self.fan_speed = speed;
        }
        self
    }

    /// Sets the blade direction.
    #[must_use]
    pub fn fan_direction(mut self, direction: FanDirection) -> Self {
        self.fan_direction = Some(direction);
        self
    }

    /// Sets the blade direction if one is given.
    #[must_use]
    pub fn maybe_fan_direction(mut self, direction: Option<FanDirection>) -> Self {
        if direction.is_some() {
            self.fan_direction = direction;
        }
        self
    }
}
