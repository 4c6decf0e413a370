// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hausboard - sensor classification and device control for a household
//! floorplan dashboard.
//!
//! The library talks to a Home Assistant style REST API, keeps per-room
//! sensor snapshots fresh, classifies readings into colors and warning
//! levels, and executes dashboard actions with optimistic feedback.
//!
//! # Supported Features
//!
//! - **Classification**: temperature gradients, humidity and CO₂ warning
//!   levels, per-category threshold bands
//! - **Polling**: periodic room and device refresh with partial-failure
//!   tolerance
//! - **Control**: toggle/on/off/script/link actions with optimistic state
//!   and reconciliation on failure
//! - **Presentation**: percent-relative floorplan placement and
//!   render-ready room snapshots
//! - **Relay** (feature `relay`): authenticated pass-through server that
//!   keeps the API token out of the dashboard
//!
//! # Quick Start
//!
//! ## Watching a room
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use hausboard::monitor::{DEFAULT_PERIOD, RoomMonitor};
//! use hausboard::protocol::HaConfig;
//! use hausboard::thresholds::ThresholdTable;
//! use hausboard::types::{Metric, RoomCategory};
//!
//! #[tokio::main]
//! async fn main() -> hausboard::Result<()> {
//!     let client = HaConfig::new("http://home.local:4000/ha/api").into_client()?;
//!
//!     let monitor = RoomMonitor::spawn(
//!         client,
//!         RoomCategory::Office,
//!         HashMap::from([(Metric::Temperature, "esp_01_temperature".to_string())]),
//!         Arc::new(ThresholdTable::builtin()),
//!         DEFAULT_PERIOD,
//!     );
//!
//!     let mut state = monitor.state();
//!     state.changed().await.ok();
//!     println!("background: {}", state.borrow().background);
//!     Ok(())
//! }
//! ```
//!
//! ## Executing a dashboard action
//!
//! ```no_run
//! use hausboard::control::{ActionOutcome, DEFAULT_STATUS_PERIOD, SwitchController};
//! use hausboard::home::HomeConfig;
//! use hausboard::protocol::HaConfig;
//!
//! #[tokio::main]
//! async fn main() -> hausboard::Result<()> {
//!     let config = HomeConfig::from_json(include_str!("../demos/home.json"))?;
//!     let action = &config.actions[0];
//!
//!     let client = HaConfig::new("http://home.local:4000/ha/api").into_client()?;
//!     let controller = SwitchController::spawn(
//!         client,
//!         action.state.clone(),
//!         action.cases.clone(),
//!         DEFAULT_STATUS_PERIOD,
//!     );
//!
//!     if let Some(case) = controller.action_for_state().cloned() {
//!         match controller.execute(&case).await? {
//!             ActionOutcome::OpenLink(url) => println!("open {url}"),
//!             outcome => println!("{outcome:?}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod control;
pub mod error;
pub mod home;
pub mod monitor;
pub mod protocol;
#[cfg(feature = "relay")]
pub mod relay;
pub mod state;
pub mod thresholds;
pub mod types;

pub use classify::{co2_level, humidity_level, temperature_color};
pub use control::{
    ActionCase, ActionKind, ActionOutcome, PressOutcome, PressTracker, SwitchController,
    TargetDescriptor, TargetKind,
};
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use home::{HomeConfig, RoomPresentation};
pub use monitor::{PollTask, RoomMonitor};
pub use protocol::{ApiResponse, EntityState, HaClient, HaConfig};
pub use state::{CommandPhase, RoomState, SensorReadings, SwitchStatus, WarningState};
pub use thresholds::{BandThresholds, ScaleThresholds, ThresholdTable};
pub use types::{EntityId, Metric, RgbColor, RoomCategory, WarningLevel};
