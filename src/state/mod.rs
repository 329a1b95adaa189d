// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached fan state.
//!
//! [`DeviceState`] is the client's last-known view of the fan. It is sparse:
//! a field stays `None` until the fan reports it. Responses from the fan are
//! folded in with [`DeviceState::merge`].
//!
//! # Examples
//!
//! ```
//! use modernforms::state::DeviceState;
//!
//! let mut state = DeviceState::new();
//! assert_eq!(state.fan_on(), None);
//!
//! let report: DeviceState = serde_json::from_str(r#"{"fanOn": true, "fanSpeed": 3}"#).unwrap();
//! state.merge(report);
//!
//! assert_eq!(state.fan_on(), Some(true));
//! assert_eq!(state.fan_speed(), Some(3));
//! ```

mod device_state;
mod field;

pub use device_state::DeviceState;
pub use field::StateField;
