// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Modern Forms fan control.
//!
//! # Types
//!
//! - [`FanDirection`] - Forward/reverse blade direction
//! - [`Season`] - Calendar season and its default fan direction

mod direction;
mod season;

pub use direction::FanDirection;
pub use season::Season;
