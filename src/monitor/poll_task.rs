// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scoped periodic background task.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A repeating background task bound to the lifetime of its handle.
///
/// The task runs its tick immediately, then re-schedules itself after each
/// period. Dropping the handle aborts the task, so no tick runs past the
/// owner's teardown and nothing the task exclusively owns outlives it.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use hausboard::monitor::PollTask;
///
/// # async fn example() {
/// let task = PollTask::spawn(Duration::from_secs(30), || async {
///     // fetch and publish
/// });
/// // dropping `task` stops the loop
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct PollTask {
    handle: JoinHandle<()>,
}

impl PollTask {
    /// Spawns a task that runs `tick` immediately and then once per period.
    pub fn spawn<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let handle = tokio::spawn(async move {
            loop {
                tick().await;
                tokio::time::sleep(period).await;
            }
        });
        Self { handle }
    }

    /// Returns true if the task has stopped running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PollTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn first_tick_runs_immediately() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&counter);
        let _task = PollTask::spawn(Duration::from_secs(30), move || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&counter);
        let _task = PollTask::spawn(Duration::from_secs(30), move || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
            }
        });

        // Ticks land at 0 s, 30 s, 60 s, and 90 s.
        tokio::time::sleep(Duration::from_secs(95)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_the_loop() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&counter);
        let task = PollTask::spawn(Duration::from_secs(10), move || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_secs(25)).await;
        drop(task);
        let before = counter.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(counter.load(Ordering::SeqCst), before);
    }
}
