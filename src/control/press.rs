// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Short-press and long-press interaction model for a control.

use std::time::{Duration, Instant};

/// Hold duration at which a press counts as long.
pub const LONG_PRESS: Duration = Duration::from_millis(500);

/// What the embedding UI should do after a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PressOutcome {
    /// Execute the control's primary case.
    Primary,
    /// The hold crossed the threshold; the case menu is now open.
    MenuOpened,
    /// Nothing to do. The release had no matching press, or the menu
    /// swallowed it.
    Ignored,
}

/// Synchronous press state machine for one control.
///
/// Every transition takes the current instant as an argument, so tests
/// drive the machine with fabricated timestamps instead of sleeping.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use hausboard::control::{PressOutcome, PressTracker};
///
/// let mut tracker = PressTracker::new();
/// let t0 = Instant::now();
///
/// tracker.press(t0);
/// assert_eq!(tracker.release(t0 + Duration::from_millis(120)), PressOutcome::Primary);
///
/// tracker.press(t0);
/// assert_eq!(tracker.release(t0 + Duration::from_millis(700)), PressOutcome::MenuOpened);
/// assert!(tracker.is_menu_open());
///
/// assert!(tracker.select(2));
/// assert!(!tracker.is_menu_open());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PressTracker {
    pressed_at: Option<Instant>,
    menu_open: bool,
}

impl PressTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a press. Ignored while the menu is open.
    pub fn press(&mut self, now: Instant) {
        if !self.menu_open {
            self.pressed_at = Some(now);
        }
    }

    /// Records the release and decides what the press meant.
    ///
    /// A hold of [`LONG_PRESS`] or more opens the case menu; anything
    /// shorter asks for the primary case.
    pub fn release(&mut self, now: Instant) -> PressOutcome {
        let Some(pressed_at) = self.pressed_at.take() else {
            return PressOutcome::Ignored;
        };

        if now.saturating_duration_since(pressed_at) >= LONG_PRESS {
            self.menu_open = true;
            PressOutcome::MenuOpened
        } else {
            PressOutcome::Primary
        }
    }

    /// Returns true while the case menu is showing.
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Closes the menu after the user picked a case. Returns false if the
    /// menu was not open, in which case nothing should execute.
    pub fn select(&mut self, _index: usize) -> bool {
        let was_open = self.menu_open;
        self.menu_open = false;
        was_open
    }

    /// Closes the menu without executing anything.
    pub fn dismiss(&mut self) {
        self.menu_open = false;
    }
}
