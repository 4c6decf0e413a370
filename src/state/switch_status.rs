// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observed and optimistic power state of a controlled device.

/// Where the displayed power state stands relative to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandPhase {
    /// Displayed state matches the last authoritative answer.
    #[default]
    Confirmed,
    /// Displayed state was flipped optimistically; the command is in flight.
    OptimisticPending,
    /// A command failed; an authoritative re-fetch is underway.
    Reconciling,
}

/// Power state of a controlled device as the dashboard shows it.
///
/// The displayed state flips before a command resolves. On success the flip
/// is confirmed; on failure the status enters [`CommandPhase::Reconciling`]
/// until a re-fetch reports the device's true state. Fetch failures keep
/// the previous power so a flaky poll does not blank the badge.
///
/// # Examples
///
/// ```
/// use hausboard::state::{CommandPhase, SwitchStatus};
///
/// let mut status = SwitchStatus::new();
/// status.apply_fetch(false);
///
/// status.begin_optimistic(true);
/// assert_eq!(status.power(), Some(true));
/// assert_eq!(status.phase(), CommandPhase::OptimisticPending);
///
/// status.command_failed("HTTP 500");
/// assert_eq!(status.phase(), CommandPhase::Reconciling);
///
/// status.apply_fetch(false);
/// assert_eq!(status.power(), Some(false));
/// assert_eq!(status.phase(), CommandPhase::Confirmed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchStatus {
    power: Option<bool>,
    phase: CommandPhase,
    last_error: Option<String>,
}

impl SwitchStatus {
    /// Creates a status with no known power state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the displayed power state, if any answer ever arrived.
    #[must_use]
    pub fn power(&self) -> Option<bool> {
        self.power
    }

    /// Returns the displayed power state, treating unknown as off.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power.unwrap_or(false)
    }

    /// Returns the current command phase.
    #[must_use]
    pub fn phase(&self) -> CommandPhase {
        self.phase
    }

    /// Returns the most recent error, if the last operation failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Records an authoritative answer from a status fetch.
    pub fn apply_fetch(&mut self, power: bool) {
        self.power = Some(power);
        self.phase = CommandPhase::Confirmed;
        self.last_error = None;
    }

    /// Records a failed status fetch. The previous power is retained.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Flips the displayed state ahead of the command resolving.
    pub fn begin_optimistic(&mut self, target: bool) {
        self.power = Some(target);
        self.phase = CommandPhase::OptimisticPending;
        self.last_error = None;
    }

    /// Confirms the optimistic flip after a successful command.
    pub fn confirm(&mut self) {
        self.phase = CommandPhase::Confirmed;
        self.last_error = None;
    }

    /// Records a failed command. The displayed state is left as-is until a
    /// re-fetch answers; the inverse is never assumed.
    pub fn command_failed(&mut self, message: impl Into<String>) {
        self.phase = CommandPhase::Reconciling;
        self.last_error = Some(message.into());
    }
}
