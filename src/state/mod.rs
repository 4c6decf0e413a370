// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State snapshots maintained by the monitors and controllers.
//!
//! This module provides the mutable room and device state the polling tasks
//! maintain, and the atomic snapshots they publish.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use hausboard::state::{RoomState, SensorReadings};
//! use hausboard::thresholds::ThresholdTable;
//! use hausboard::types::{Metric, RoomCategory};
//!
//! let mut readings = SensorReadings::new();
//! readings.merge(HashMap::from([(Metric::Temperature, "19.0".to_string())]));
//!
//! let table = ThresholdTable::builtin();
//! let snapshot = RoomState::compute(readings, RoomCategory::Bedroom, &table);
//! assert_eq!(snapshot.background.to_css(), "rgb(0, 130, 54)");
//! ```

mod room_state;
mod sensor_readings;
mod switch_status;
mod warning_state;

pub use room_state::RoomState;
pub use sensor_readings::SensorReadings;
pub use switch_status::{CommandPhase, SwitchStatus};
pub use warning_state::WarningState;
