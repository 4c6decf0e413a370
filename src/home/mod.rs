// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home configuration and the floorplan presentation binding.
//!
//! # Types
//!
//! - [`HomeConfig`]: the serde document describing the apartment, its
//!   rooms, and its action badges.
//! - [`RegionPlacement`], [`PercentRect`], [`PercentPoint`]: pixel
//!   geometry converted to percent of the floorplan.
//! - [`RoomPresentation`]: one room's render model, joining geometry with
//!   the latest sensor snapshot.

mod config;
mod layout;
mod presentation;

pub use config::{ActionConfig, ApartmentDims, HomeConfig, PixelPoint, RoomConfig, RoomRegion};
pub use layout::{
    PercentPoint, PercentRect, RegionPlacement, action_placement, borders_css, readout_anchor,
    region_placement,
};
pub use presentation::{MetricReadout, RoomPresentation};
