// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discrete warning levels produced by the classifiers.

use std::fmt;

use crate::error::ValueError;

/// Severity of a sensor reading, from no data to critical.
///
/// Levels are totally ordered so per-metric levels can be combined with
/// [`WarningLevel::max`] into a room-wide severity.
///
/// # Examples
///
/// ```
/// use hausboard::types::WarningLevel;
///
/// assert!(WarningLevel::Critical > WarningLevel::Normal);
/// assert_eq!(WarningLevel::Normal.max(WarningLevel::High), WarningLevel::High);
/// assert_eq!(WarningLevel::High.as_num(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WarningLevel {
    /// No reading is available.
    #[default]
    Unknown,
    /// Reading is within the comfortable band.
    Normal,
    /// Reading has left the comfortable band.
    Elevated,
    /// Reading crossed a warning threshold.
    High,
    /// Reading crossed an alert threshold.
    Critical,
}

impl WarningLevel {
    /// Returns the numeric level (0-4).
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Normal => 1,
            Self::Elevated => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Creates a level from its numeric form.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidWarningLevel` if `num` is greater than 4.
    pub const fn from_num(num: u8) -> Result<Self, ValueError> {
        match num {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Elevated),
            3 => Ok(Self::High),
            4 => Ok(Self::Critical),
            other => Err(ValueError::InvalidWarningLevel(other)),
        }
    }

    /// Returns the more severe of two levels.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    /// Whether readouts at this level render with emphasized (bold) text.
    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.as_num() >= 3
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{name}")
    }
}
