// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic sensor poller for one room.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::monitor::PollTask;
use crate::protocol::HaClient;
use crate::state::{RoomState, SensorReadings};
use crate::thresholds::ThresholdTable;
use crate::types::{Metric, RoomCategory};

/// Default refresh period for room sensors.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(30);

/// Background poller that keeps one room's [`RoomState`] current.
///
/// The monitor fetches every mapped sensor once per period, merges whatever
/// answered into the room's readings, and publishes a freshly computed
/// snapshot on a watch channel. Sensors that fail to answer are skipped for
/// that round; their previous readings stay in place. A round in which no
/// sensor answers publishes nothing.
///
/// A room with no mapped sensors never spawns a task and stays at
/// [`RoomState::default`].
///
/// Dropping the monitor stops the polling loop.
#[derive(Debug)]
pub struct RoomMonitor {
    state_rx: watch::Receiver<RoomState>,
    task: Option<PollTask>,
}

struct TickCtx {
    client: HaClient,
    sensors: Vec<(Metric, String)>,
    category: RoomCategory,
    table: Arc<ThresholdTable>,
    readings: Mutex<SensorReadings>,
    tx: watch::Sender<RoomState>,
}

impl RoomMonitor {
    /// Spawns a monitor polling `sensors` (metric to object id) every
    /// `period`.
    #[must_use]
    pub fn spawn(
        client: HaClient,
        category: RoomCategory,
        sensors: HashMap<Metric, String>,
        table: Arc<ThresholdTable>,
        period: Duration,
    ) -> Self {
        let (tx, state_rx) = watch::channel(RoomState::default());

        if sensors.is_empty() {
            return Self {
                state_rx,
                task: None,
            };
        }

        // Fetch in display order so logs read the same way every round.
        let mut ordered: Vec<(Metric, String)> = Vec::with_capacity(sensors.len());
        for metric in Metric::ALL {
            if let Some(object_id) = sensors.get(&metric) {
                ordered.push((metric, object_id.clone()));
            }
        }

        let ctx = Arc::new(TickCtx {
            client,
            sensors: ordered,
            category,
            table,
            readings: Mutex::new(SensorReadings::new()),
            tx,
        });

        let task = PollTask::spawn(period, move || {
            let ctx = Arc::clone(&ctx);
            async move { ctx.tick().await }
        });

        Self {
            state_rx,
            task: Some(task),
        }
    }

    /// Returns a receiver that observes every published snapshot.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<RoomState> {
        self.state_rx.clone()
    }

    /// Returns the latest published snapshot.
    #[must_use]
    pub fn current(&self) -> RoomState {
        self.state_rx.borrow().clone()
    }

    /// Returns true if the monitor is polling. A room without sensors is
    /// never active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl TickCtx {
    async fn tick(&self) {
        let mut batch: HashMap<Metric, String> = HashMap::new();

        for (metric, object_id) in &self.sensors {
            match self.client.sensor_state(object_id).await {
                Ok(entity) => {
                    batch.insert(*metric, entity.state);
                }
                Err(err) => {
                    tracing::warn!(
                        sensor = %object_id,
                        metric = %metric,
                        error = %err,
                        "sensor fetch failed, keeping previous reading"
                    );
                }
            }
        }

        if batch.is_empty() {
            return;
        }

        let snapshot = {
            let mut readings = self.readings.lock();
            readings.merge(batch);
            RoomState::compute(readings.clone(), self.category, &self.table)
        };
        // Receivers may all be gone; the next tick still keeps readings fresh.
        let _ = self.tx.send(snapshot);
    }
}
