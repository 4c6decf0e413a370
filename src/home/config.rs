// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The home configuration document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::control::ActionCase;
use crate::error::ConfigError;
use crate::types::{EntityId, Metric, RoomCategory};

/// Pixel dimensions of the floorplan drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApartmentDims {
    /// Drawing width in pixels.
    pub width: f64,
    /// Drawing height in pixels.
    pub height: f64,
}

/// A point in floorplan pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

/// One rectangular piece of a room's outline.
///
/// `borders` flags which of the four edges draw a line, in top, right,
/// bottom, left order. Irregular rooms are stitched from several regions
/// with the shared edges left open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomRegion {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Region width in pixels.
    pub width: f64,
    /// Region height in pixels.
    pub height: f64,
    /// Edge visibility as top, right, bottom, left.
    pub borders: [bool; 4],
}

/// One room of the floorplan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Display name.
    pub name: String,
    /// Threshold category. Unknown strings fold to the default bands.
    #[serde(rename = "type", default)]
    pub category: RoomCategory,
    /// Outline geometry, one or more rectangles.
    #[serde(alias = "coordinates", default)]
    pub regions: Vec<RoomRegion>,
    /// Metric to sensor object id. Rooms without sensors render neutral
    /// and never poll.
    #[serde(default)]
    pub sensors: HashMap<Metric, String>,
}

/// One dashboard action badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Display name, also the menu heading.
    pub name: String,
    /// Icon tag the embedding UI resolves.
    pub icon: String,
    /// Badge center in floorplan pixels.
    pub position: PixelPoint,
    /// Entity whose state the badge reflects. Absent for actions that only
    /// dispatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityId>,
    /// Executable cases in menu order.
    #[serde(default)]
    pub cases: Vec<ActionCase>,
}

/// The whole home document: floorplan dimensions, rooms, and actions.
///
/// # Examples
///
/// ```
/// use hausboard::home::HomeConfig;
///
/// let config = HomeConfig::from_json(
///     r#"{
///         "apt": {"width": 851, "height": 1138},
///         "rooms": [],
///         "actions": []
///     }"#,
/// ).unwrap();
/// assert_eq!(config.apartment.width, 851.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Floorplan pixel dimensions.
    #[serde(alias = "apt")]
    pub apartment: ApartmentDims,
    /// Rooms in draw order.
    #[serde(default)]
    pub rooms: Vec<RoomConfig>,
    /// Action badges in draw order.
    #[serde(default)]
    pub actions: Vec<ActionConfig>,
}

impl HomeConfig {
    /// Parses a home document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] when the document does not
    /// deserialize.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
