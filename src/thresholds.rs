// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-room-category threshold bands for sensor classification.
//!
//! Every room category maps to a set of numeric bands per metric. The
//! built-in table covers common household rooms; deployments can override it
//! with a JSON document, which is validated against the band ordering
//! invariant on load.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::types::{Metric, RoomCategory};

/// Two-sided threshold band for temperature and humidity.
///
/// Values must satisfy
/// `alert_low <= warning_low <= okay_min <= okay_max <= warning_high <= alert_high`.
/// The band partitions readings into a comfortable middle, graded excursions
/// on either side, and saturated alert zones beyond the outer bounds.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BandThresholds {
    /// Lower edge of the comfortable band.
    pub okay_min: f64,
    /// Upper edge of the comfortable band.
    pub okay_max: f64,
    /// Upper warning threshold.
    pub warning_high: f64,
    /// Upper alert threshold; readings at or above saturate.
    pub alert_high: f64,
    /// Lower warning threshold.
    pub warning_low: f64,
    /// Lower alert threshold; readings at or below saturate.
    pub alert_low: f64,
}

impl BandThresholds {
    /// Creates a band. Ordering is checked by [`ThresholdTable::validate`]
    /// when the band is part of a loaded table.
    #[must_use]
    pub const fn new(
        okay_min: f64,
        okay_max: f64,
        warning_high: f64,
        alert_high: f64,
        warning_low: f64,
        alert_low: f64,
    ) -> Self {
        Self {
            okay_min,
            okay_max,
            warning_high,
            alert_high,
            warning_low,
            alert_low,
        }
    }

    fn ordering_violation(&self) -> Option<&'static str> {
        if self.alert_low > self.warning_low {
            Some("alert_low > warning_low")
        } else if self.warning_low > self.okay_min {
            Some("warning_low > okay_min")
        } else if self.okay_min > self.okay_max {
            Some("okay_min > okay_max")
        } else if self.okay_max > self.warning_high {
            Some("okay_max > warning_high")
        } else if self.warning_high > self.alert_high {
            Some("warning_high > alert_high")
        } else {
            None
        }
    }
}

/// One-sided threshold scale for CO₂.
///
/// Values must satisfy `okay <= warning <= alert`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleThresholds {
    /// Upper edge of the comfortable range.
    pub okay: f64,
    /// Warning threshold.
    pub warning: f64,
    /// Alert threshold; readings above saturate.
    pub alert: f64,
}

impl ScaleThresholds {
    /// Creates a scale. Ordering is checked by [`ThresholdTable::validate`]
    /// when the scale is part of a loaded table.
    #[must_use]
    pub const fn new(okay: f64, warning: f64, alert: f64) -> Self {
        Self {
            okay,
            warning,
            alert,
        }
    }

    fn ordering_violation(&self) -> Option<&'static str> {
        if self.okay > self.warning {
            Some("okay > warning")
        } else if self.warning > self.alert {
            Some("warning > alert")
        } else {
            None
        }
    }
}

/// A default band plus per-category overrides for one metric.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategoryBands {
    /// Band applied when no override matches.
    pub default: BandThresholds,
    /// Category-specific overrides.
    #[serde(default)]
    pub overrides: HashMap<RoomCategory, BandThresholds>,
}

impl CategoryBands {
    /// Returns the band for a category, falling back to the default band.
    #[must_use]
    pub fn for_category(&self, category: RoomCategory) -> &BandThresholds {
        self.overrides.get(&category).unwrap_or(&self.default)
    }
}

/// The complete threshold configuration: bands per metric and category.
///
/// # Examples
///
/// ```
/// use hausboard::thresholds::ThresholdTable;
/// use hausboard::types::RoomCategory;
///
/// let table = ThresholdTable::builtin();
/// let band = table.temperature(RoomCategory::Bedroom);
/// assert_eq!(band.okay_min, 18.0);
///
/// // Unknown categories fall back to the default band.
/// let band = table.temperature(RoomCategory::Default);
/// assert_eq!(band.okay_min, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThresholdTable {
    temperature: CategoryBands,
    humidity: CategoryBands,
    co2: ScaleThresholds,
}

const TEMPERATURE_DEFAULT: BandThresholds = BandThresholds::new(20.0, 22.0, 25.0, 30.0, 18.0, 16.0);
const TEMPERATURE_BEDROOM: BandThresholds = BandThresholds::new(18.0, 20.0, 24.0, 28.0, 16.0, 14.0);
const TEMPERATURE_OFFICE: BandThresholds = BandThresholds::new(20.0, 22.0, 24.0, 28.0, 18.0, 16.0);
const TEMPERATURE_BATHROOM: BandThresholds =
    BandThresholds::new(22.0, 24.0, 28.0, 32.0, 20.0, 16.0);
const TEMPERATURE_OUTDOORS: BandThresholds = BandThresholds::new(18.0, 25.0, 27.0, 32.0, 12.0, 0.0);

const HUMIDITY_DEFAULT: BandThresholds = BandThresholds::new(45.0, 55.0, 60.0, 70.0, 40.0, 30.0);
const HUMIDITY_BATHROOM: BandThresholds = BandThresholds::new(45.0, 60.0, 65.0, 80.0, 30.0, 20.0);
const HUMIDITY_OUTDOORS: BandThresholds = BandThresholds::new(0.0, 100.0, 101.0, 101.0, -1.0, -1.0);

const CO2_DEFAULT: ScaleThresholds = ScaleThresholds::new(1000.0, 1400.0, 1980.0);

impl ThresholdTable {
    /// Returns the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let temperature = CategoryBands {
            default: TEMPERATURE_DEFAULT,
            overrides: HashMap::from([
                (RoomCategory::Bedroom, TEMPERATURE_BEDROOM),
                (RoomCategory::Office, TEMPERATURE_OFFICE),
                (RoomCategory::Bathroom, TEMPERATURE_BATHROOM),
                (RoomCategory::Outdoors, TEMPERATURE_OUTDOORS),
            ]),
        };
        let humidity = CategoryBands {
            default: HUMIDITY_DEFAULT,
            overrides: HashMap::from([
                (RoomCategory::Bathroom, HUMIDITY_BATHROOM),
                (RoomCategory::Outdoors, HUMIDITY_OUTDOORS),
            ]),
        };
        Self {
            temperature,
            humidity,
            co2: CO2_DEFAULT,
        }
    }

    /// Loads a table from a JSON document and validates every band.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` if the document cannot be
    /// deserialized, or `ConfigError::InvertedThresholds` if any band
    /// violates its ordering invariant.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Checks every band against its ordering invariant.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvertedThresholds` naming the first violating
    /// band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (metric, bands) in [
            (Metric::Temperature, &self.temperature),
            (Metric::Humidity, &self.humidity),
        ] {
            if let Some(detail) = bands.default.ordering_violation() {
                return Err(inverted(metric, RoomCategory::Default, detail));
            }
            for (category, band) in &bands.overrides {
                if let Some(detail) = band.ordering_violation() {
                    return Err(inverted(metric, *category, detail));
                }
            }
        }
        if let Some(detail) = self.co2.ordering_violation() {
            return Err(inverted(Metric::Co2, RoomCategory::Default, detail));
        }
        Ok(())
    }

    /// Returns the temperature band for a category.
    #[must_use]
    pub fn temperature(&self, category: RoomCategory) -> &BandThresholds {
        self.temperature.for_category(category)
    }

    /// Returns the humidity band for a category.
    #[must_use]
    pub fn humidity(&self, category: RoomCategory) -> &BandThresholds {
        self.humidity.for_category(category)
    }

    /// Returns the CO₂ scale. The scale is category-independent.
    #[must_use]
    pub fn co2(&self) -> &ScaleThresholds {
        &self.co2
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn inverted(metric: Metric, category: RoomCategory, detail: &str) -> ConfigError {
    ConfigError::InvertedThresholds {
        metric: metric.to_string(),
        category: category.to_string(),
        detail: detail.to_string(),
    }
}
