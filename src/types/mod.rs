// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared across the library.
//!
//! This module provides type-safe representations of the values the
//! classifier and controller operate on. Constrained types validate at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`RgbColor`] - 8-bit RGB color with channel interpolation
//! - [`WarningLevel`] - Discrete 0-4 severity of a reading
//! - [`RoomCategory`] - Room kind selecting the threshold bands
//! - [`Metric`] - Measurable quantity (temperature, humidity, CO₂, pressure)
//! - [`EntityId`] - Validated `domain.object` entity identifier

mod entity_id;
mod metric;
mod rgb_color;
mod room_category;
mod warning_level;

pub use entity_id::EntityId;
pub use metric::Metric;
pub use rgb_color::RgbColor;
pub use room_category::RoomCategory;
pub use warning_level::WarningLevel;
