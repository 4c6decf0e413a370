// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dashboard actions and the controllers that execute them.
//!
//! # Types
//!
//! - [`ActionCase`], [`ActionKind`], [`TargetDescriptor`]: the declarative
//!   action model parsed from the home configuration.
//! - [`PressTracker`]: the short-press/long-press interaction machine.
//! - [`SwitchController`]: status polling plus optimistic command dispatch.
//!
//! # Examples
//!
//! ```no_run
//! use hausboard::control::{ActionOutcome, SwitchController, DEFAULT_STATUS_PERIOD};
//! use hausboard::protocol::HaConfig;
//!
//! # async fn example() -> hausboard::Result<()> {
//! let client = HaConfig::new("http://home.local:4000/ha/api").into_client()?;
//! let controller = SwitchController::spawn(client, None, Vec::new(), DEFAULT_STATUS_PERIOD);
//!
//! if let Some(case) = controller.action_for_state() {
//!     match controller.execute(&case.clone()).await? {
//!         ActionOutcome::OpenLink(url) => println!("open {url}"),
//!         _ => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod action;
mod press;
mod switch_controller;

pub use action::{ActionCase, ActionKind, TargetDescriptor, TargetKind};
pub use press::{LONG_PRESS, PressOutcome, PressTracker};
pub use switch_controller::{ActionOutcome, DEFAULT_STATUS_PERIOD, SwitchController};
