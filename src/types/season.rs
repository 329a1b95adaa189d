// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calendar seasons and their default fan direction.
//!
//! Season boundaries are fixed calendar dates compared as `(month, day)`
//! pairs, so the lookup works the same in leap and non-leap years:
//!
//! | Season | From | To |
//! |--------|------|----|
//! | Winter | Jan 1 | Mar 20 |
//! | Spring | Mar 21 | Jun 20 |
//! | Summer | Jun 21 | Sep 22 |
//! | Autumn | Sep 23 | Dec 20 |
//! | Winter | Dec 21 | Dec 31 |
//!
//! [`Season::current`] reads the local clock every time it is called.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::types::FanDirection;

/// A season of the (northern hemisphere) calendar year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use modernforms::types::{FanDirection, Season};
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// assert_eq!(Season::from_date(date), Season::Summer);
/// assert_eq!(Season::Summer.default_direction(), FanDirection::Reverse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// December 21 to March 20.
    Winter,
    /// March 21 to June 20.
    Spring,
    /// June 21 to September 22.
    Summer,
    /// September 23 to December 20.
    Autumn,
}

impl Season {
    /// Returns the season a calendar date falls in.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        match (date.month(), date.day()) {
            (3, 21..) | (4 | 5, _) | (6, ..=20) => Self::Spring,
            (6, _) | (7 | 8, _) | (9, ..=22) => Self::Summer,
            (9, _) | (10 | 11, _) | (12, ..=20) => Self::Autumn,
            // Dec 21 through Mar 20
            _ => Self::Winter,
        }
    }

    /// Returns the season for today's local date.
    #[must_use]
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Returns the blade direction used when toggling the fan in this season.
    #[must_use]
    pub fn default_direction(&self) -> FanDirection {
        match self {
            Self::Winter | Self::Summer => FanDirection::Reverse,
            Self::Spring | Self::Autumn => FanDirection::Forward,
        }
    }

    /// Returns the lowercase name of the season.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
