// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Latest raw readings of a room's sensors.

use std::collections::HashMap;

use crate::types::Metric;

/// The most recent raw reading per metric.
///
/// Readings arrive as strings from the wire and are kept verbatim; numeric
/// interpretation happens on access. Merging a partial batch only touches
/// the metrics present in the batch, so a failed fetch for one metric never
/// discards another metric's last known value.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use hausboard::state::SensorReadings;
/// use hausboard::types::Metric;
///
/// let mut readings = SensorReadings::new();
/// readings.merge(HashMap::from([(Metric::Temperature, "21.4".to_string())]));
///
/// assert_eq!(readings.numeric(Metric::Temperature), Some(21.4));
/// assert_eq!(readings.raw(Metric::Humidity), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorReadings {
    values: HashMap<Metric, String>,
}

impl SensorReadings {
    /// Creates an empty set of readings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a batch of fresh readings, keeping previous values for metrics
    /// absent from the batch.
    ///
    /// Returns true if any stored value changed.
    pub fn merge(&mut self, batch: HashMap<Metric, String>) -> bool {
        let mut changed = false;
        for (metric, value) in batch {
            if self.values.get(&metric) != Some(&value) {
                self.values.insert(metric, value);
                changed = true;
            }
        }
        changed
    }

    /// Returns the raw reading for a metric, if one has ever arrived.
    #[must_use]
    pub fn raw(&self, metric: Metric) -> Option<&str> {
        self.values.get(&metric).map(String::as_str)
    }

    /// Parses the reading for a metric as a finite number.
    ///
    /// `unavailable`, `unknown`, and other non-numeric states read as
    /// absent.
    #[must_use]
    pub fn numeric(&self, metric: Metric) -> Option<f64> {
        self.raw(metric)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Returns true if no reading has ever arrived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Renders the reading for a metric together with its display unit.
    #[must_use]
    pub fn display(&self, metric: Metric) -> Option<String> {
        self.raw(metric)
            .map(|value| format!("{value} {}", metric.unit()))
    }
}
