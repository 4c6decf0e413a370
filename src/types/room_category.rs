// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room categories used for threshold selection.

use std::fmt;

/// The kind of room a sensor belongs to.
///
/// Categories select which threshold band applies to a reading. Unrecognized
/// category strings deserialize to [`RoomCategory::Default`], so a new room
/// type in a configuration document degrades to the default bands instead of
/// failing the load.
///
/// # Examples
///
/// ```
/// use hausboard::types::RoomCategory;
///
/// assert_eq!(RoomCategory::Bedroom.as_str(), "bedroom");
/// let parsed: RoomCategory = serde_json::from_str("\"sauna\"").unwrap();
/// assert_eq!(parsed, RoomCategory::Default);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    /// Sleeping room, cooler comfort band.
    Bedroom,
    /// Work room.
    Office,
    /// Wet room, warmer comfort band and higher humidity tolerance.
    Bathroom,
    /// Outdoor area, wide tolerance bands.
    Outdoors,
    /// Fallback category with the general-purpose bands.
    #[default]
    #[serde(other)]
    Default,
}

impl RoomCategory {
    /// Returns the configuration string for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bedroom => "bedroom",
            Self::Office => "office",
            Self::Bathroom => "bathroom",
            Self::Outdoors => "outdoors",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
