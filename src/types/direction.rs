// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan blade direction.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The direction the fan blades spin.
///
/// Serializes to the lowercase strings the fan uses on the wire. Any other
/// string is kept as [`Other`](Self::Other): the fan ignores directions it
/// does not know, and whatever it reports back is cached as-is.
///
/// # Examples
///
/// ```
/// use modernforms::types::FanDirection;
///
/// assert_eq!(FanDirection::Forward.as_str(), "forward");
/// assert_eq!(FanDirection::from("reverse"), FanDirection::Reverse);
/// assert_eq!(FanDirection::from(""), FanDirection::Other(String::new()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FanDirection {
    /// Blades push air down.
    Forward,
    /// Blades pull air up.
    Reverse,
    /// A direction string the fan does not document.
    Other(String),
}

impl FanDirection {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FanDirection {
    fn from(value: String) -> Self {
        match value.as_str() {
            "forward" => Self::Forward,
            "reverse" => Self::Reverse,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for FanDirection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl Serialize for FanDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FanDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
