// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with channel interpolation and CSS rendering.
//!
//! This module provides the color representation used by the classifier.
//! Colors are produced either as fixed palette entries or by interpolating
//! between two palette entries along a normalized position.

use std::fmt;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use hausboard::types::RgbColor;
///
/// let color = RgbColor::new(0, 130, 54);
/// assert_eq!(color.red(), 0);
/// assert_eq!(color.green(), 130);
/// assert_eq!(color.blue(), 54);
/// assert_eq!(color.to_string(), "rgb(0, 130, 54)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    ///
    /// # Arguments
    ///
    /// * `red` - Red component (0-255)
    /// * `green` - Green component (0-255)
    /// * `blue` - Blue component (0-255)
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Linearly interpolates between two colors, per channel.
    ///
    /// Each channel is computed as `round(a + (b - a) * t)`. The position `t`
    /// is expected to be in `[0, 1]`; `t = 0` yields `a` and `t = 1` yields
    /// `b`. Values outside that range extrapolate and saturate at the channel
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use hausboard::types::RgbColor;
    ///
    /// let a = RgbColor::new(0, 130, 54);
    /// let b = RgbColor::new(137, 75, 0);
    ///
    /// assert_eq!(RgbColor::lerp(a, b, 0.0), a);
    /// assert_eq!(RgbColor::lerp(a, b, 1.0), b);
    /// assert_eq!(RgbColor::lerp(a, b, 0.5), RgbColor::new(69, 103, 27));
    /// ```
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self::new(
            lerp_channel(a.red, b.red, t),
            lerp_channel(a.green, b.green, t),
            lerp_channel(a.blue, b.blue, t),
        )
    }

    /// Returns the color as a CSS `rgb(r, g, b)` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use hausboard::types::RgbColor;
    ///
    /// let color = RgbColor::new(209, 213, 220);
    /// assert_eq!(color.to_css(), "rgb(209, 213, 220)");
    /// ```
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

// Float-to-int casts saturate, so extrapolated positions clip to 0/255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}
