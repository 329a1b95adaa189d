// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `modernforms` - A Rust library to control Modern Forms smart fans.
//!
//! The fan (and its optional light kit) is driven through the local JSON
//! API at `http://<host>/mf`. Every command is answered with the fan's
//! resulting state, which the client caches.
//!
//! # Supported Features
//!
//! - **Fan control**: On/off, speed, blade direction, seasonal toggling
//! - **Light control**: On/off, brightness
//! - **State queries**: Dynamic and static shadow data
//!
//! # Quick Start
//!
//! ```no_run
//! use modernforms::{FanClient, FanDirection};
//!
//! #[tokio::main]
//! async fn main() -> modernforms::Result<()> {
//!     let mut fan = FanClient::new("192.168.1.40")?;
//!
//!     // Fill the cache (dynamic + static shadow data)
//!     fan.get_device_state(None).await?;
//!     println!("{} at speed {}", fan.fan_type()?, fan.fan_speed()?);
//!
//!     // Several fields, one request
//!     fan.set_fan(true, Some(4), Some(FanDirection::Forward)).await?;
//!
//!     // Flip the fan, spinning in the direction suited to the season
//!     fan.toggle_fan(None).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! Requests and responses are logged through [`tracing`] at `debug` level;
//! transport failures at `warn`. Install a subscriber to see them.

pub mod command;
pub mod error;
mod fan;
pub mod protocol;
pub mod state;
pub mod types;

pub use command::StateCommand;
pub use error::{Error, ParseError, ProtocolError, Result};
pub use fan::FanClient;
pub use protocol::{CommandResponse, HttpClient, HttpConfig, Transport};
pub use state::{DeviceState, StateField};
pub use types::{FanDirection, Season};
