// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percent-relative placement of floorplan geometry.

use crate::home::{ApartmentDims, PixelPoint, RoomRegion};

/// A rectangle in percent of the floorplan, ready for absolute positioning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentRect {
    /// Left offset in percent of the floorplan width.
    pub left: f64,
    /// Top offset in percent of the floorplan height.
    pub top: f64,
    /// Width in percent of the floorplan width.
    pub width: f64,
    /// Height in percent of the floorplan height.
    pub height: f64,
}

/// A point in percent of the floorplan.
///
/// Action badges center themselves on this point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentPoint {
    /// Left offset in percent of the floorplan width.
    pub left: f64,
    /// Top offset in percent of the floorplan height.
    pub top: f64,
}

/// A placed room region: its percent rectangle and which edges draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionPlacement {
    /// Where the region sits.
    pub rect: PercentRect,
    /// Edge visibility as top, right, bottom, left.
    pub borders: [bool; 4],
}

impl ApartmentDims {
    /// Converts a horizontal pixel offset into percent of the width.
    #[must_use]
    pub fn percent_x(&self, x: f64) -> f64 {
        x / self.width * 100.0
    }

    /// Converts a vertical pixel offset into percent of the height.
    #[must_use]
    pub fn percent_y(&self, y: f64) -> f64 {
        y / self.height * 100.0
    }
}

/// Places one room region on the floorplan.
#[must_use]
pub fn region_placement(region: &RoomRegion, apt: &ApartmentDims) -> RegionPlacement {
    RegionPlacement {
        rect: PercentRect {
            left: apt.percent_x(region.x),
            top: apt.percent_y(region.y),
            width: apt.percent_x(region.width),
            height: apt.percent_y(region.height),
        },
        borders: region.borders,
    }
}

/// Places an action badge's center point on the floorplan.
#[must_use]
pub fn action_placement(position: &PixelPoint, apt: &ApartmentDims) -> PercentPoint {
    PercentPoint {
        left: apt.percent_x(position.x),
        top: apt.percent_y(position.y),
    }
}

/// Places a room's sensor readout at the corner of its first region.
///
/// Rooms without geometry have nowhere to anchor.
#[must_use]
pub fn readout_anchor(regions: &[RoomRegion], apt: &ApartmentDims) -> Option<PercentPoint> {
    regions.first().map(|region| PercentPoint {
        left: apt.percent_x(region.x),
        top: apt.percent_y(region.y),
    })
}

/// Renders edge flags as a four-value CSS `border-style`.
///
/// # Examples
///
/// ```
/// use hausboard::home::borders_css;
///
/// assert_eq!(borders_css([true, true, false, true]), "solid solid none solid");
/// ```
#[must_use]
pub fn borders_css(borders: [bool; 4]) -> String {
    let styles: Vec<&str> = borders
        .iter()
        .map(|&edge| if edge { "solid" } else { "none" })
        .collect();
    styles.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const APT: ApartmentDims = ApartmentDims {
        width: 851.0,
        height: 1138.0,
    };

    #[test]
    fn region_scales_against_both_axes() {
        let region = RoomRegion {
            x: 449.0,
            y: 347.0,
            width: 402.0,
            height: 641.0,
            borders: [true, true, true, true],
        };

        let placed = region_placement(&region, &APT);
        assert!((placed.rect.left - 52.76).abs() < 0.01);
        assert!((placed.rect.top - 30.49).abs() < 0.01);
        assert!((placed.rect.width - 47.24).abs() < 0.01);
        assert!((placed.rect.height - 56.33).abs() < 0.01);
    }

    #[test]
    fn full_span_region_covers_one_hundred_percent() {
        let region = RoomRegion {
            x: 0.0,
            y: 1003.0,
            width: 851.0,
            height: 135.0,
            borders: [true, true, true, true],
        };

        let placed = region_placement(&region, &APT);
        assert!((placed.rect.left - 0.0).abs() < f64::EPSILON);
        assert!((placed.rect.width - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn action_point_scales_like_a_region_corner() {
        let point = PixelPoint { x: 650.0, y: 600.0 };
        let placed = action_placement(&point, &APT);
        assert!((placed.left - 76.38).abs() < 0.01);
        assert!((placed.top - 52.72).abs() < 0.01);
    }

    #[test]
    fn readout_anchors_to_the_first_region() {
        let regions = [
            RoomRegion {
                x: 297.0,
                y: 0.0,
                width: 112.0,
                height: 185.0,
                borders: [true, true, false, true],
            },
            RoomRegion {
                x: 297.0,
                y: 185.0,
                width: 112.0,
                height: 123.0,
                borders: [false, false, false, true],
            },
        ];

        let anchor = readout_anchor(&regions, &APT).expect("anchored");
        assert!((anchor.left - 34.9).abs() < 0.01);
        assert!((anchor.top - 0.0).abs() < f64::EPSILON);

        assert!(readout_anchor(&[], &APT).is_none());
    }

    #[test]
    fn border_styles_follow_edge_order() {
        assert_eq!(borders_css([true, true, true, true]), "solid solid solid solid");
        assert_eq!(borders_css([false, true, false, false]), "none solid none none");
    }
}
