//! Tick timer bookkeeping.
//!
//! The session never waits on a clock itself. It asks a [`Scheduler`] for a
//! repeating timer and remembers the handle; the runtime delivers ticks
//! tagged with that handle. Cancelling or rescheduling invalidates the old
//! handle, so a tick already in flight for it is dropped.

use std::time::Duration;

/// Identifies one scheduled repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Start a repeating timer firing every `interval`.
    fn schedule(&mut self, interval: Duration) -> TimerHandle;

    /// Stop the timer behind `handle`. Unknown or stale handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Single-timer scheduler: scheduling replaces whatever was active.
///
/// The async runtime polls [`TickSchedule::active`] and drives a real
/// interval for it.
#[derive(Debug, Default)]
pub struct TickSchedule {
    next_id: u64,
    active: Option<(TimerHandle, Duration)>,
}

impl TickSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// The timer that should currently be firing, if any
    pub fn active(&self) -> Option<(TimerHandle, Duration)> {
        self.active
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        matches!(self.active, Some((current, _)) if current == handle)
    }
}

impl Scheduler for TickSchedule {
    fn schedule(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.active = Some((handle, interval));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.is_active(handle) {
            self.active = None;
        }
    }
}
