// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Modern Forms command payloads.
//!
//! Every request to the fan is a JSON object posted to `/mf`. A request
//! either changes one or more state fields or asks for shadow data:
//!
//! | Payload | Purpose |
//! |---------|---------|
//! | `{"fanOn": true, "fanSpeed": 3}` | Change any subset of state fields |
//! | `{"queryDynamicShadowData": 1}` | Read the live, mutable state |
//! | `{"queryStaticShadowData": 1}` | Read immutable descriptors such as `fanType` |
//!
//! # Examples
//!
//! ```
//! use modernforms::command::StateCommand;
//! use modernforms::types::FanDirection;
//!
//! let cmd = StateCommand::new()
//!     .fan_on(true)
//!     .fan_direction(FanDirection::Forward);
//!
//! assert_eq!(
//!     serde_json::to_value(&cmd).unwrap(),
//!     serde_json::json!({"fanOn": true, "fanDirection": "forward"})
//! );
//! ```

mod state;

pub use state::StateCommand;
