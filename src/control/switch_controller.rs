// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device controller with status polling and optimistic command dispatch.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::watch;

use crate::control::{ActionCase, ActionKind, TargetDescriptor};
use crate::error::{Error, ProtocolError, Result, ValueError};
use crate::monitor::PollTask;
use crate::protocol::HaClient;
use crate::state::SwitchStatus;
use crate::types::EntityId;

/// Default refresh period for device status.
pub const DEFAULT_STATUS_PERIOD: Duration = Duration::from_secs(10);

/// What executing a case produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ActionOutcome {
    /// The service call succeeded.
    Dispatched,
    /// No device was called; the embedding UI should open this URL.
    OpenLink(String),
    /// The case had nothing executable and was skipped.
    Ignored,
}

/// Controller for one dashboard action and its monitored device.
///
/// The controller polls the device's state entity on its own schedule and
/// publishes a [`SwitchStatus`] on a watch channel. Commands flip the
/// displayed state optimistically before the call resolves; a failed
/// command triggers one authoritative re-fetch and is never retried.
///
/// A controller without a state entity never polls and reports its power
/// as unknown.
#[derive(Debug)]
pub struct SwitchController {
    ctx: Arc<ControllerCtx>,
    cases: Vec<ActionCase>,
    status_rx: watch::Receiver<SwitchStatus>,
    task: Option<PollTask>,
}

#[derive(Debug)]
struct ControllerCtx {
    client: HaClient,
    entity: Option<EntityId>,
    status: Mutex<SwitchStatus>,
    tx: watch::Sender<SwitchStatus>,
}

impl SwitchController {
    /// Spawns a controller polling `entity` every `period`.
    ///
    /// Passing no entity produces a controller that only dispatches
    /// commands.
    #[must_use]
    pub fn spawn(
        client: HaClient,
        entity: Option<EntityId>,
        cases: Vec<ActionCase>,
        period: Duration,
    ) -> Self {
        let (tx, status_rx) = watch::channel(SwitchStatus::new());
        let ctx = Arc::new(ControllerCtx {
            client,
            entity,
            status: Mutex::new(SwitchStatus::new()),
            tx,
        });

        let task = ctx.entity.as_ref().map(|_| {
            let tick_ctx = Arc::clone(&ctx);
            PollTask::spawn(period, move || {
                let ctx = Arc::clone(&tick_ctx);
                async move { ctx.refresh().await }
            })
        });

        Self {
            ctx,
            cases,
            status_rx,
            task,
        }
    }

    /// Returns the configured cases in menu order.
    #[must_use]
    pub fn cases(&self) -> &[ActionCase] {
        &self.cases
    }

    /// Returns a receiver that observes every status update.
    #[must_use]
    pub fn status(&self) -> watch::Receiver<SwitchStatus> {
        self.status_rx.clone()
    }

    /// Returns the latest status.
    #[must_use]
    pub fn current(&self) -> SwitchStatus {
        self.status_rx.borrow().clone()
    }

    /// Returns true while the status poll is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Picks the case a short press executes.
    ///
    /// One configured case is always it. With two or more, the first case
    /// answers the off state and the second the on state; later cases are
    /// reachable only through the menu. No cases, no action.
    #[must_use]
    pub fn action_for_state(&self) -> Option<&ActionCase> {
        match self.cases.len() {
            0 => None,
            1 => self.cases.first(),
            _ => self.cases.get(usize::from(self.current().is_on())),
        }
    }

    /// Executes one case.
    ///
    /// Device-facing kinds flip the displayed state before the call
    /// resolves. On failure the error is returned, the status enters
    /// reconciliation, and the device's true state is re-fetched once.
    ///
    /// # Errors
    ///
    /// Returns the protocol error of a failed service call, or a value
    /// error for a brightness above 255.
    pub async fn execute(&self, case: &ActionCase) -> Result<ActionOutcome> {
        match case.kind {
            ActionKind::Toggle => {
                let Some(target) = &case.target else {
                    return Ok(self.skip_unconfigured(case, "target"));
                };
                let turn_on = !self.ctx.status.lock().is_on();
                self.dispatch_power(target, turn_on, None).await
            }
            ActionKind::TurnOn => {
                if let Some(brightness) = case.brightness {
                    if brightness > 255 {
                        return Err(Error::Value(ValueError::InvalidBrightness(brightness)));
                    }
                }
                let Some(target) = &case.target else {
                    return Ok(self.skip_unconfigured(case, "target"));
                };
                self.dispatch_power(target, true, case.brightness).await
            }
            ActionKind::TurnOff => {
                let Some(target) = &case.target else {
                    return Ok(self.skip_unconfigured(case, "target"));
                };
                self.dispatch_power(target, false, None).await
            }
            ActionKind::OpenLink => match &case.link {
                Some(url) => Ok(ActionOutcome::OpenLink(url.clone())),
                None => Ok(self.skip_unconfigured(case, "link")),
            },
            ActionKind::Script => {
                let Some(target) = &case.target else {
                    return Ok(self.skip_unconfigured(case, "target"));
                };
                self.run_script(target).await
            }
            ActionKind::Unsupported => {
                tracing::warn!(case = %case.name, "unsupported action kind, skipping");
                Ok(ActionOutcome::Ignored)
            }
        }
    }

    async fn dispatch_power(
        &self,
        target: &TargetDescriptor,
        turn_on: bool,
        brightness: Option<u16>,
    ) -> Result<ActionOutcome> {
        let Some(domain) = target.service_domain() else {
            tracing::warn!(id = %target.id, "target has no service domain, skipping");
            return Ok(ActionOutcome::Ignored);
        };
        let domain = domain.to_string();
        let service = if turn_on { "turn_on" } else { "turn_off" };

        let mut payload = serde_json::Map::new();
        payload.insert(
            target.kind.payload_key().to_string(),
            Value::String(target.service_id().to_string()),
        );
        if turn_on && domain == "light" {
            if let Some(brightness) = brightness {
                payload.insert("brightness".to_string(), Value::from(brightness));
            }
        }

        self.ctx.set_optimistic(turn_on);
        match self
            .ctx
            .client
            .call_service(&domain, service, &Value::Object(payload))
            .await
        {
            Ok(_) => {
                self.ctx.confirm();
                Ok(ActionOutcome::Dispatched)
            }
            Err(err) => {
                self.ctx.command_failed(&err);
                self.ctx.refresh().await;
                Err(Error::Protocol(err))
            }
        }
    }

    async fn run_script(&self, target: &TargetDescriptor) -> Result<ActionOutcome> {
        let payload = serde_json::json!({ "entity_id": target.service_id() });
        self.ctx
            .client
            .call_service("script", "turn_on", &payload)
            .await?;
        Ok(ActionOutcome::Dispatched)
    }

    fn skip_unconfigured(&self, case: &ActionCase, field: &str) -> ActionOutcome {
        tracing::warn!(case = %case.name, field, "case is missing its {field}, skipping");
        ActionOutcome::Ignored
    }
}

impl ControllerCtx {
    async fn refresh(&self) {
        let Some(entity) = &self.entity else {
            return;
        };

        match self.client.entity_state(entity).await {
            Ok(state) => {
                let mut status = self.status.lock();
                status.apply_fetch(state.is_on());
                let _ = self.tx.send(status.clone());
            }
            Err(err) => {
                tracing::warn!(
                    entity = %entity,
                    error = %err,
                    "status fetch failed, keeping previous power"
                );
                let mut status = self.status.lock();
                status.fetch_failed(err.to_string());
                let _ = self.tx.send(status.clone());
            }
        }
    }

    fn set_optimistic(&self, turn_on: bool) {
        let mut status = self.status.lock();
        status.begin_optimistic(turn_on);
        let _ = self.tx.send(status.clone());
    }

    fn confirm(&self) {
        let mut status = self.status.lock();
        status.confirm();
        let _ = self.tx.send(status.clone());
    }

    fn command_failed(&self, err: &ProtocolError) {
        let mut status = self.status.lock();
        status.command_failed(err.to_string());
        let _ = self.tx.send(status.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::TargetKind;
    use crate::protocol::HaConfig;

    fn client() -> HaClient {
        HaConfig::new("http://127.0.0.1:1")
            .into_client()
            .expect("client")
    }

    fn toggle_case(name: &str) -> ActionCase {
        ActionCase {
            name: name.to_string(),
            kind: ActionKind::Toggle,
            target: Some(TargetDescriptor {
                domain: None,
                kind: TargetKind::Entity,
                id: "switch.desk".to_string(),
            }),
            link: None,
            brightness: None,
        }
    }

    fn controller(cases: Vec<ActionCase>) -> SwitchController {
        SwitchController::spawn(client(), None, cases, DEFAULT_STATUS_PERIOD)
    }

    #[tokio::test]
    async fn controller_without_entity_never_polls() {
        let ctl = controller(vec![toggle_case("Lamp")]);
        assert!(!ctl.is_active());
        assert_eq!(ctl.current().power(), None);
    }

    #[tokio::test]
    async fn single_case_is_always_primary() {
        let ctl = controller(vec![toggle_case("Lamp")]);
        assert_eq!(ctl.action_for_state().map(|c| c.name.as_str()), Some("Lamp"));
    }

    #[tokio::test]
    async fn no_cases_means_no_action() {
        let ctl = controller(Vec::new());
        assert!(ctl.action_for_state().is_none());
    }

    #[tokio::test]
    async fn case_selection_follows_displayed_power() {
        let ctl = controller(vec![
            toggle_case("On"),
            toggle_case("Off"),
            toggle_case("Menu only"),
        ]);

        // Unknown power counts as off.
        assert_eq!(ctl.action_for_state().map(|c| c.name.as_str()), Some("On"));

        {
            let mut status = ctl.ctx.status.lock();
            status.apply_fetch(true);
            let _ = ctl.ctx.tx.send(status.clone());
        }
        assert_eq!(ctl.action_for_state().map(|c| c.name.as_str()), Some("Off"));
    }

    #[tokio::test]
    async fn open_link_returns_the_url_without_calling_out() {
        let ctl = controller(Vec::new());
        let case = ActionCase {
            name: "Camera".to_string(),
            kind: ActionKind::OpenLink,
            target: None,
            link: Some("http://cam.local/stream".to_string()),
            brightness: None,
        };

        let outcome = ctl.execute(&case).await.expect("no network involved");
        assert_eq!(
            outcome,
            ActionOutcome::OpenLink("http://cam.local/stream".to_string())
        );
    }

    #[tokio::test]
    async fn unsupported_and_unconfigured_cases_are_ignored() {
        let ctl = controller(Vec::new());

        let unsupported = ActionCase {
            name: "Mystery".to_string(),
            kind: ActionKind::Unsupported,
            target: None,
            link: None,
            brightness: None,
        };
        assert_eq!(
            ctl.execute(&unsupported).await.expect("skipped"),
            ActionOutcome::Ignored
        );

        let missing_target = ActionCase {
            name: "Lamp".to_string(),
            kind: ActionKind::Toggle,
            target: None,
            link: None,
            brightness: None,
        };
        assert_eq!(
            ctl.execute(&missing_target).await.expect("skipped"),
            ActionOutcome::Ignored
        );
    }

    #[tokio::test]
    async fn overlarge_brightness_is_rejected_before_any_call() {
        let ctl = controller(Vec::new());
        let case = ActionCase {
            name: "Spot".to_string(),
            kind: ActionKind::TurnOn,
            target: Some(TargetDescriptor {
                domain: None,
                kind: TargetKind::Entity,
                id: "light.spot".to_string(),
            }),
            link: None,
            brightness: Some(999),
        };

        let err = ctl.execute(&case).await.expect_err("brightness overflow");
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidBrightness(999))
        ));
        // The displayed state never flipped.
        assert_eq!(ctl.current().power(), None);
    }
}
