// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of raw sensor readings into colors and warning levels.
//!
//! Temperature maps to a continuous background color: solid green inside the
//! comfortable band, interpolated gradients through the warning zones, and
//! saturated red/purple beyond the alert bounds. Humidity and CO₂ map to
//! discrete [`WarningLevel`]s; humidity grades excursions on both sides of
//! its band, CO₂ only upward.
//!
//! # Examples
//!
//! ```
//! use hausboard::classify::{self, palette};
//! use hausboard::thresholds::ThresholdTable;
//! use hausboard::types::{RoomCategory, WarningLevel};
//!
//! let table = ThresholdTable::builtin();
//!
//! // 19 °C sits inside the bedroom comfort band.
//! let color = classify::temperature_color(Some(19.0), RoomCategory::Bedroom, &table);
//! assert_eq!(color, palette::background::GREEN);
//!
//! let level = classify::co2_level(Some(1500.0), &table);
//! assert_eq!(level, WarningLevel::High);
//! ```

pub mod palette;

use crate::thresholds::ThresholdTable;
use crate::types::{RgbColor, RoomCategory, WarningLevel};

use palette::background;

/// Maps a temperature reading to its background color.
///
/// A missing or non-numeric reading yields the neutral gray. Branches are
/// evaluated outermost first: the saturated alert zones win over the
/// interpolated warning zones, which win over the comfort-adjacent
/// gradients. Comparisons against the alert bounds are inclusive, the inner
/// ones strict.
#[must_use]
pub fn temperature_color(
    value: Option<f64>,
    category: RoomCategory,
    table: &ThresholdTable,
) -> RgbColor {
    let Some(temp) = value.filter(|v| !v.is_nan()) else {
        return background::GRAY;
    };
    let th = table.temperature(category);

    if temp >= th.alert_high {
        background::RED
    } else if temp <= th.alert_low {
        background::PURPLE
    } else if temp > th.warning_high {
        let t = (temp - th.warning_high) / (th.alert_high - th.warning_high);
        RgbColor::lerp(background::YELLOW, background::RED, t)
    } else if temp < th.warning_low {
        let t = (temp - th.alert_low) / (th.warning_low - th.alert_low);
        RgbColor::lerp(background::PURPLE, background::BLUE, t)
    } else if temp > th.okay_max {
        let t = (temp - th.okay_max) / (th.warning_high - th.okay_max);
        RgbColor::lerp(background::GREEN, background::YELLOW, t)
    } else if temp < th.okay_min {
        let t = (temp - th.warning_low) / (th.okay_min - th.warning_low);
        RgbColor::lerp(background::BLUE, background::GREEN, t)
    } else {
        background::GREEN
    }
}

/// Maps a humidity reading to its warning level.
///
/// Excursions below the band grade through the elevated and high tiers
/// like excursions above it; only damp air past `alert_high` escalates to
/// critical.
#[must_use]
pub fn humidity_level(
    value: Option<f64>,
    category: RoomCategory,
    table: &ThresholdTable,
) -> WarningLevel {
    let Some(humidity) = value.filter(|v| !v.is_nan()) else {
        return WarningLevel::Unknown;
    };
    let th = table.humidity(category);

    if humidity > th.alert_high {
        WarningLevel::Critical
    } else if humidity > th.warning_high || humidity < th.warning_low {
        WarningLevel::High
    } else if humidity > th.okay_max || humidity < th.okay_min {
        WarningLevel::Elevated
    } else {
        WarningLevel::Normal
    }
}

/// Maps a CO₂ reading to its warning level. The scale is one-sided; low
/// concentrations are always normal.
#[must_use]
pub fn co2_level(value: Option<f64>, table: &ThresholdTable) -> WarningLevel {
    let Some(co2) = value.filter(|v| !v.is_nan()) else {
        return WarningLevel::Unknown;
    };
    let th = table.co2();

    if co2 > th.alert {
        WarningLevel::Critical
    } else if co2 > th.warning {
        WarningLevel::High
    } else if co2 > th.okay {
        WarningLevel::Elevated
    } else {
        WarningLevel::Normal
    }
}
