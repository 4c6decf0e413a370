// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fixed color palettes used by the classifier.
//!
//! Three palettes exist: `background` for room fills, `border` for room
//! outlines, and `text` for sensor readouts. Warning levels map onto the
//! border and text palettes through [`border_color`] and [`text_color`].

use crate::types::{RgbColor, WarningLevel};

/// Room fill colors.
pub mod background {
    use crate::types::RgbColor;

    /// Neutral fill for rooms without data.
    pub const GRAY: RgbColor = RgbColor::new(209, 213, 220);
    /// Comfortable band.
    pub const GREEN: RgbColor = RgbColor::new(0, 130, 54);
    /// Warm excursion.
    pub const YELLOW: RgbColor = RgbColor::new(137, 75, 0);
    /// Hot excursion.
    pub const ORANGE: RgbColor = RgbColor::new(202, 53, 0);
    /// Saturated hot alert.
    pub const RED: RgbColor = RgbColor::new(193, 0, 7);
    /// Cool excursion.
    pub const BLUE: RgbColor = RgbColor::new(20, 71, 230);
    /// Saturated cold alert.
    pub const PURPLE: RgbColor = RgbColor::new(130, 0, 219);
}

/// Room outline colors.
pub mod border {
    use crate::types::RgbColor;

    /// No data.
    pub const GRAY: RgbColor = RgbColor::new(74, 85, 101);
    /// Normal.
    pub const GREEN: RgbColor = RgbColor::new(0, 166, 62);
    /// Elevated.
    pub const YELLOW: RgbColor = RgbColor::new(208, 135, 0);
    /// High.
    pub const ORANGE: RgbColor = RgbColor::new(245, 74, 0);
    /// Critical.
    pub const RED: RgbColor = RgbColor::new(231, 0, 11);
}

/// Sensor readout colors.
pub mod text {
    use crate::types::RgbColor;

    /// No data.
    pub const GRAY: RgbColor = RgbColor::new(209, 213, 220);
    /// Normal.
    pub const GREEN: RgbColor = RgbColor::new(123, 241, 168);
    /// Elevated.
    pub const YELLOW: RgbColor = RgbColor::new(255, 223, 32);
    /// High.
    pub const ORANGE: RgbColor = RgbColor::new(255, 137, 4);
    /// Critical.
    pub const RED: RgbColor = RgbColor::new(251, 44, 54);
}

/// Returns the room outline color for a warning level.
#[must_use]
pub const fn border_color(level: WarningLevel) -> RgbColor {
    match level {
        WarningLevel::Unknown => border::GRAY,
        WarningLevel::Normal => border::GREEN,
        WarningLevel::Elevated => border::YELLOW,
        WarningLevel::High => border::ORANGE,
        WarningLevel::Critical => border::RED,
    }
}

/// Returns the readout text color for a warning level.
#[must_use]
pub const fn text_color(level: WarningLevel) -> RgbColor {
    match level {
        WarningLevel::Unknown => text::GRAY,
        WarningLevel::Normal => text::GREEN,
        WarningLevel::Elevated => text::YELLOW,
        WarningLevel::High => text::ORANGE,
        WarningLevel::Critical => text::RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_level_table() {
        assert_eq!(border_color(WarningLevel::Unknown), border::GRAY);
        assert_eq!(border_color(WarningLevel::Normal), border::GREEN);
        assert_eq!(border_color(WarningLevel::Elevated), border::YELLOW);
        assert_eq!(border_color(WarningLevel::High), border::ORANGE);
        assert_eq!(border_color(WarningLevel::Critical), border::RED);
    }

    #[test]
    fn text_level_table() {
        assert_eq!(text_color(WarningLevel::Unknown), text::GRAY);
        assert_eq!(text_color(WarningLevel::Normal), text::GREEN);
        assert_eq!(text_color(WarningLevel::Elevated), text::YELLOW);
        assert_eq!(text_color(WarningLevel::High), text::ORANGE);
        assert_eq!(text_color(WarningLevel::Critical), text::RED);
    }
}
