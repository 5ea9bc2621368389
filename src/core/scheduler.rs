// Deferred Work Scheduling
// Single-slot cells for timer-driven and after-paint work
//
// Time is always passed in by the caller, so the debounce and collapse
// behaviour can be driven deterministically:
//   let mut slot = TimerSlot::default();
//   slot.arm(now, Duration::ZERO);
//   if slot.fire(now) { /* run */ }

use std::time::{Duration, Instant};

/// A cancellable timer holding at most one pending deadline.
///
/// Arming while a deadline is pending replaces it (last write wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSlot {
    due: Option<Instant>,
}

impl TimerSlot {
    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline.
    /// Returns true if a pending deadline was replaced.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> bool {
        self.due.replace(now + delay).is_some()
    }

    /// Cancel the pending deadline. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.due.take().is_some()
    }

    /// Deadline of the pending timer, if any
    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Consume the deadline if it has elapsed at `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// Work waiting for the next paint commit.
///
/// Any number of requests before the paint collapse into a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintSlot {
    pending: bool,
}

impl PaintSlot {
    /// Request a run after the next paint. Returns false if one was already queued.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Take the queued run, leaving the slot empty
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
