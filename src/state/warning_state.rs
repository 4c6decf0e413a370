// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aggregated warning state of a room.

use crate::classify::{self, palette};
use crate::state::SensorReadings;
use crate::thresholds::ThresholdTable;
use crate::types::{Metric, RgbColor, RoomCategory, WarningLevel};

/// Per-metric warning levels and the derived room-wide severity.
///
/// Recomputed as a whole from the merged readings after every poll, so the
/// individual levels, the maximum, and the border color always describe the
/// same snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WarningState {
    /// Humidity warning level.
    pub humidity: WarningLevel,
    /// CO₂ warning level.
    pub co2: WarningLevel,
    /// The more severe of the two.
    pub max: WarningLevel,
    /// Room outline color for the maximum level.
    pub border_color: Option<RgbColor>,
}

impl WarningState {
    /// Computes the warning state from merged readings.
    #[must_use]
    pub fn compute(
        readings: &SensorReadings,
        category: RoomCategory,
        table: &ThresholdTable,
    ) -> Self {
        let humidity = classify::humidity_level(readings.numeric(Metric::Humidity), category, table);
        let co2 = classify::co2_level(readings.numeric(Metric::Co2), table);
        let max = humidity.max(co2);

        Self {
            humidity,
            co2,
            max,
            border_color: Some(palette::border_color(max)),
        }
    }

    /// Returns the warning level for a metric. Metrics without a classifier
    /// report [`WarningLevel::Unknown`].
    #[must_use]
    pub fn level(&self, metric: Metric) -> WarningLevel {
        match metric {
            Metric::Humidity => self.humidity,
            Metric::Co2 => self.co2,
            Metric::Temperature | Metric::Pressure => WarningLevel::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn readings(pairs: &[(Metric, &str)]) -> SensorReadings {
        let mut readings = SensorReadings::new();
        readings.merge(
            pairs
                .iter()
                .map(|(m, v)| (*m, (*v).to_string()))
                .collect::<HashMap<_, _>>(),
        );
        readings
    }

    #[test]
    fn max_takes_the_worse_level() {
        let table = ThresholdTable::builtin();
        let state = WarningState::compute(
            &readings(&[(Metric::Humidity, "50"), (Metric::Co2, "1500")]),
            RoomCategory::Default,
            &table,
        );

        assert_eq!(state.humidity, WarningLevel::Normal);
        assert_eq!(state.co2, WarningLevel::High);
        assert_eq!(state.max, WarningLevel::High);
        assert_eq!(state.border_color, Some(palette::border_color(WarningLevel::High)));
    }

    #[test]
    fn missing_metrics_stay_unknown() {
        let table = ThresholdTable::builtin();
        let state = WarningState::compute(
            &readings(&[(Metric::Temperature, "21")]),
            RoomCategory::Default,
            &table,
        );

        assert_eq!(state.humidity, WarningLevel::Unknown);
        assert_eq!(state.co2, WarningLevel::Unknown);
        assert_eq!(state.max, WarningLevel::Unknown);
        assert_eq!(state.border_color, Some(palette::border::GRAY));
    }

    #[test]
    fn level_accessor_covers_classified_metrics() {
        let table = ThresholdTable::builtin();
        let state = WarningState::compute(
            &readings(&[(Metric::Humidity, "72")]),
            RoomCategory::Default,
            &table,
        );

        assert_eq!(state.level(Metric::Humidity), WarningLevel::Critical);
        assert_eq!(state.level(Metric::Temperature), WarningLevel::Unknown);
    }
}
