// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Names of the typed state fields and their JSON keys.

use std::fmt;

/// A typed field of the fan's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    /// Light power (`lightOn`).
    LightOn,
    /// Light brightness (`lightBrightness`).
    LightBrightness,
    /// Fan power (`fanOn`).
    FanOn,
    /// Fan speed (`fanSpeed`).
    FanSpeed,
    /// Blade direction (`fanDirection`).
    FanDirection,
    /// Static fan model descriptor (`fanType`).
    FanType,
}

impl StateField {
    /// All typed fields, in wire order.
    pub const ALL: [Self; 6] = [
        Self::LightOn,
        Self::LightBrightness,
        Self::FanOn,
        Self::FanSpeed,
        Self::FanDirection,
        Self::FanType,
    ];

    /// Returns the JSON key the fan uses for this field.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::LightOn => "lightOn",
            Self::LightBrightness => "lightBrightness",
            Self::FanOn => "fanOn",
            Self::FanSpeed => "fanSpeed",
            Self::FanDirection => "fanDirection",
            Self::FanType => "fanType",
        }
    }
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
