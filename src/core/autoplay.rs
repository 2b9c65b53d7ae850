//! Auto-play of seeded console commands.
//!
//! A console may be mounted with commands that submit themselves one after
//! another. The sequence runs as a single task: wait, check the handle,
//! submit, repeat. Cancelling the [`AutoPlayHandle`] (on view teardown or
//! session reset) guarantees that no further command is submitted, even if
//! a timer is already in flight.
//!
//! The runner is generic over the sleep function so the browser can drive
//! it with `gloo_timers` while tests drive it with ready futures.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::logging::log;

use crate::config::autoplay::{INITIAL_DELAY_MS, INTERVAL_MS};

// ============================================================================
// AutoPlayHandle
// ============================================================================

/// Cancellation handle shared between a session and its auto-play task.
#[derive(Clone, Debug, Default)]
pub struct AutoPlayHandle {
    cancelled: Arc<AtomicBool>,
}

impl AutoPlayHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the sequence. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

// ============================================================================
// AutoPlay
// ============================================================================

/// An ordered list of commands and the delays between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoPlay {
    commands: Vec<String>,
    initial_delay: Duration,
    interval: Duration,
}

/// How an auto-play run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoPlayOutcome {
    /// Every command was submitted.
    Completed { fired: usize },
    /// The handle was cancelled after `fired` submissions.
    Cancelled { fired: usize },
}

impl AutoPlay {
    /// Sequence with the default timing: first command immediately, then
    /// one per second.
    pub fn new(commands: Vec<String>) -> Self {
        Self {
            commands,
            initial_delay: Duration::from_millis(INITIAL_DELAY_MS),
            interval: Duration::from_millis(INTERVAL_MS),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Wait before the command at `index`.
    pub fn delay_before(&self, index: usize) -> Duration {
        if index == 0 {
            self.initial_delay
        } else {
            self.interval
        }
    }

    /// Run the sequence.
    ///
    /// For each command: await `sleep(delay)`, then submit it with `submit`
    /// unless `handle` was cancelled meanwhile. Commands fire strictly in
    /// order and never overlap.
    pub async fn run<S, Fut, F>(
        &self,
        handle: &AutoPlayHandle,
        mut sleep: S,
        mut submit: F,
    ) -> AutoPlayOutcome
    where
        S: FnMut(Duration) -> Fut,
        Fut: Future<Output = ()>,
        F: FnMut(&str),
    {
        let mut fired = 0;
        for (index, command) in self.commands.iter().enumerate() {
            if handle.is_cancelled() {
                break;
            }
            sleep(self.delay_before(index)).await;
            if handle.is_cancelled() {
                break;
            }
            submit(command);
            fired += 1;
        }

        if fired == self.commands.len() {
            AutoPlayOutcome::Completed { fired }
        } else {
            log!("auto-play cancelled after {} of {} commands", fired, self.commands.len());
            AutoPlayOutcome::Cancelled { fired }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
