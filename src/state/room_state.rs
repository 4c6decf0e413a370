// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Atomic room snapshot published by the room monitor.

use crate::classify::{self, palette};
use crate::state::{SensorReadings, WarningState};
use crate::thresholds::ThresholdTable;
use crate::types::{Metric, RgbColor, RoomCategory};

/// One coherent snapshot of a room: readings, warning levels, and the
/// derived background color.
///
/// Snapshots are recomputed as a unit, so consumers never observe a
/// background color from one poll combined with warning levels from
/// another.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomState {
    /// Merged raw readings.
    pub readings: SensorReadings,
    /// Per-metric warning levels and room-wide severity.
    pub warnings: WarningState,
    /// Temperature-driven background fill.
    pub background: RgbColor,
}

impl RoomState {
    /// Computes a snapshot from merged readings.
    #[must_use]
    pub fn compute(
        readings: SensorReadings,
        category: RoomCategory,
        table: &ThresholdTable,
    ) -> Self {
        let warnings = WarningState::compute(&readings, category, table);
        let background =
            classify::temperature_color(readings.numeric(Metric::Temperature), category, table);

        Self {
            readings,
            warnings,
            background,
        }
    }
}

impl Default for RoomState {
    fn default() -> Self {
        Self {
            readings: SensorReadings::new(),
            warnings: WarningState::default(),
            background: palette::background::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WarningLevel;
    use std::collections::HashMap;

    #[test]
    fn empty_room_renders_neutral() {
        let state = RoomState::default();
        assert_eq!(state.background, palette::background::GRAY);
        assert_eq!(state.warnings.max, WarningLevel::Unknown);
    }

    #[test]
    fn compute_joins_color_and_levels() {
        let table = ThresholdTable::builtin();
        let mut readings = SensorReadings::new();
        readings.merge(HashMap::from([
            (Metric::Temperature, "21.0".to_string()),
            (Metric::Co2, "2100".to_string()),
        ]));

        let state = RoomState::compute(readings, RoomCategory::Default, &table);
        assert_eq!(state.background, palette::background::GREEN);
        assert_eq!(state.warnings.co2, WarningLevel::Critical);
        assert_eq!(state.warnings.max, WarningLevel::Critical);
    }
}
