// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor metrics tracked per room.

use std::fmt;

/// A measurable quantity reported by room sensors.
///
/// # Examples
///
/// ```
/// use hausboard::types::Metric;
///
/// assert_eq!(Metric::Temperature.unit(), "°C");
/// assert_eq!(Metric::Co2.as_str(), "co2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Air temperature in degrees Celsius.
    Temperature,
    /// Relative humidity in percent.
    Humidity,
    /// Carbon dioxide concentration in parts per million.
    Co2,
    /// Barometric pressure in hectopascal.
    Pressure,
}

impl Metric {
    /// All metrics, in readout display order.
    pub const ALL: [Self; 4] = [Self::Temperature, Self::Humidity, Self::Co2, Self::Pressure];

    /// Returns the configuration string for this metric.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Co2 => "co2",
            Self::Pressure => "pressure",
        }
    }

    /// Returns the display unit for readouts.
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity => "%",
            Self::Co2 => "ppm",
            Self::Pressure => "hPa",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Metric::Co2).unwrap(), "\"co2\"");
        let back: Metric = serde_json::from_str("\"pressure\"").unwrap();
        assert_eq!(back, Metric::Pressure);
    }

    #[test]
    fn units() {
        assert_eq!(Metric::Temperature.unit(), "°C");
        assert_eq!(Metric::Humidity.unit(), "%");
        assert_eq!(Metric::Co2.unit(), "ppm");
        assert_eq!(Metric::Pressure.unit(), "hPa");
    }

    #[test]
    fn all_covers_every_metric() {
        assert_eq!(Metric::ALL.len(), 4);
    }
}
