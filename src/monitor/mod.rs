// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Background polling of room sensors.
//!
//! # Types
//!
//! - [`PollTask`]: a repeating task bound to the lifetime of its handle.
//! - [`RoomMonitor`]: per-room sensor poller publishing [`RoomState`]
//!   snapshots on a watch channel.
//!
//! [`RoomState`]: crate::state::RoomState

mod poll_task;
mod room_monitor;

pub use poll_task::PollTask;
pub use room_monitor::{DEFAULT_PERIOD, RoomMonitor};
