// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use serde_json::{Map, Value};

use crate::types::FanDirection;

use super::StateField;

/// Last-known state of a Modern Forms fan.
///
/// Every field is optional because the fan only reports what it was asked
/// about. The same type is used for the fan's responses, which are partial
/// states, and for the client's accumulated cache.
///
/// Numbers are kept as `i64` and unknown direction strings as
/// [`FanDirection::Other`], so one odd value never discards the rest of a
/// report.
///
/// Keys the fan reports that have no typed field here (sleep timers, away
/// mode, firmware descriptors, ...) are kept verbatim and can be read with
/// [`extra`](Self::extra).
///
/// # Examples
///
/// ```
/// use modernforms::state::DeviceState;
/// use modernforms::types::FanDirection;
///
/// let state = DeviceState::new()
///     .with_fan_on(true)
///     .with_fan_direction(FanDirection::Reverse);
///
/// assert_eq!(state.fan_on(), Some(true));
/// assert_eq!(state.fan_speed(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    light_on: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    light_brightness: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fan_on: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fan_speed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fan_direction: Option<FanDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fan_type: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl DeviceState {
    /// Creates a new empty device state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the light is on.
    #[must_use]
    pub fn light_on(&self) -> Option<bool> {
        self.light_on
    }

    /// Returns the light brightness (nominally 0-100).
    #[must_use]
    pub fn light_brightness(&self) -> Option<i64> {
        self.light_brightness
    }

    /// Returns whether the fan is on.
    #[must_use]
    pub fn fan_on(&self) -> Option<bool> {
        self.fan_on
    }

    /// Returns the fan speed (nominally 1-6).
    #[must_use]
    pub fn fan_speed(&self) -> Option<i64> {
        self.fan_speed
    }

    /// Returns the blade direction.
    #[must_use]
    pub fn fan_direction(&self) -> Option<&FanDirection> {
        self.fan_direction.as_ref()
    }

    /// Returns the static fan model descriptor.
    #[must_use]
    pub fn fan_type(&self) -> Option<&str> {
        self.fan_type.as_deref()
    }

    /// Returns a reported key that has no typed accessor.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Returns whether a typed field has been reported.
    #[must_use]
    pub fn is_populated(&self, field: StateField) -> bool {
        match field {
            StateField::LightOn => self.light_on.is_some(),
            StateField::LightBrightness => self.light_brightness.is_some(),
            StateField::FanOn => self.fan_on.is_some(),
            StateField::FanSpeed => self.fan_speed.is_some(),
            StateField::FanDirection => self.fan_direction.is_some(),
            StateField::FanType => self.fan_type.is_some(),
        }
    }

    /// Returns `true` if nothing has been reported yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty() && !StateField::ALL.iter().any(|f| self.is_populated(*f))
    }

    /// Sets the light power.
    #[must_use]
    pub fn with_light_on(mut self, on: bool) -> Self {
        self.light_on = Some(on);
        self
    }

    /// Sets the light brightness.
    #[must_use]
    pub fn with_light_brightness(mut self, brightness: i64) -> Self {
        self.light_brightness = Some(brightness);
        self
    }

    /// Sets the fan power.
    #[must_use]
    pub fn with_fan_on(mut self, on: bool) -> Self {
        self.fan_on = Some(on);
        self
    }

    /// Sets the fan speed.
    #[must_use]
    pub fn with_fan_speed(mut self, speed: i64) -> Self {
        self.fan_speed = Some(speed);
        self
    }

    /// Sets the blade direction.
    #[must_use]
    pub fn with_fan_direction(mut self, direction: FanDirection) -> Self {
        self.fan_direction = Some(direction);
        self
    }

    /// Sets the fan model descriptor.
    #[must_use]
    pub fn with_fan_type(mut self, fan_type: impl Into<String>) -> Self {
        self.fan_type = Some(fan_type.into());
        self
    }

    /// Folds a reported state into this one.
    ///
    /// Fields present in `update` overwrite the current values; fields absent
    /// from `update` are left untouched. Nothing is ever cleared.
    pub fn merge(&mut self, update: DeviceState) {
        let DeviceState {
            light_on,
            light_brightness,
            fan_on,
            fan_speed,
            fan_direction,
            fan_type,
            extra,
        } = update;

        if light_on.is_some() {
            self.light_on = light_on;
        }
        if light_brightness.is_some() {
            self.light_brightness = light_brightness;
        }
        if fan_on.is_some() {
            self.fan_on = fan_on;
        }
        if fan_speed.is_some() {
            self.fan_speed = fan_speed;
        }
        if fan_direction.is_some() {
            self.fan_direction = fan_direction;
        }
        if fan_type.is_some() {
            self.fan_type = fan_type;
        }
        self.extra.extend(extra);
    }
}
