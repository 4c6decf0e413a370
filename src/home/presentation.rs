// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Render-ready composition of room geometry and sensor state.

use crate::classify::palette;
use crate::home::{
    ApartmentDims, PercentPoint, RegionPlacement, RoomConfig, readout_anchor, region_placement,
};
use crate::state::RoomState;
use crate::types::{Metric, RgbColor};

/// One metric line of a room's sensor readout.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReadout {
    /// Which metric this line shows.
    pub metric: Metric,
    /// Reading with its unit, as rendered.
    pub text: String,
    /// Text color for the metric's warning level.
    pub color: RgbColor,
    /// Bold when the level is high or critical.
    pub bold: bool,
}

/// Everything the embedding UI needs to draw one room.
///
/// Composed from the room's configured geometry and its latest
/// [`RoomState`] snapshot, so every color on screen describes the same
/// poll.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomPresentation {
    /// Display name.
    pub name: String,
    /// Temperature-driven fill color.
    pub background: RgbColor,
    /// Outline color for the room-wide warning level.
    pub border_color: RgbColor,
    /// Placed outline rectangles.
    pub regions: Vec<RegionPlacement>,
    /// Where the readout block anchors, if the room has geometry.
    pub anchor: Option<PercentPoint>,
    /// Readout lines in display order, one per metric with a reading.
    pub readouts: Vec<MetricReadout>,
}

impl RoomPresentation {
    /// Composes the render model for one room.
    #[must_use]
    pub fn compose(room: &RoomConfig, state: &RoomState, apt: &ApartmentDims) -> Self {
        let readouts = Metric::ALL
            .into_iter()
            .filter_map(|metric| {
                let text = state.readings.display(metric)?;
                let level = state.warnings.level(metric);
                Some(MetricReadout {
                    metric,
                    text,
                    color: palette::text_color(level),
                    bold: level.is_bold(),
                })
            })
            .collect();

        Self {
            name: room.name.clone(),
            background: state.background,
            border_color: state
                .warnings
                .border_color
                .unwrap_or(palette::border::GRAY),
            regions: room
                .regions
                .iter()
                .map(|region| region_placement(region, apt))
                .collect(),
            anchor: readout_anchor(&room.regions, apt),
            readouts,
        }
    }
}
