use alloc::vec::Vec;
use core::fmt;

use portable_atomic::{AtomicBool, Ordering};
use simlink_utils_core_rs::{ArcShared, SpinSyncMutex, SyncMutexLike};

use super::{ScheduleError, ScheduledCallback, SimScheduler};
use crate::time::{AtomicSimTime, SimDuration, SimTime};

#[cfg(test)]
mod tests;

struct PendingCallback {
  at:       SimTime,
  seq:      u64,
  callback: ScheduledCallback,
}

struct ManualState {
  next_seq: u64,
  pending:  Vec<PendingCallback>,
}

struct ManualInner {
  now:     AtomicSimTime,
  stopped: AtomicBool,
  state:   SpinSyncMutex<ManualState>,
}

/// Hand-cranked [`SimScheduler`].
///
/// Time only moves when the owner calls [`ManualScheduler::advance_to`] or
/// [`ManualScheduler::advance_by`]; queued callbacks only run from those calls or from
/// [`ManualScheduler::run_due`]. Callbacks with equal times run in the order they were queued.
///
/// Useful on targets that embed the mailboxes in their own loop, and for driving bridged
/// mailboxes step by step.
#[derive(Clone)]
pub struct ManualScheduler {
  inner: ArcShared<ManualInner>,
}

impl ManualScheduler {
  /// Creates a scheduler at [`SimTime::ZERO`].
  #[must_use]
  pub fn new() -> Self {
    Self::starting_at(SimTime::ZERO)
  }

  /// Creates a scheduler whose clock starts at `start`.
  #[must_use]
  pub fn starting_at(start: SimTime) -> Self {
    Self {
      inner: ArcShared::new(ManualInner {
        now:     AtomicSimTime::new(start),
        stopped: AtomicBool::new(false),
        state:   SpinSyncMutex::new(ManualState { next_seq: 0, pending: Vec::new() }),
      }),
    }
  }

  /// Number of queued callbacks.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.inner.state.with_lock(|state| state.pending.len())
  }

  /// Runs every callback due at or before the current time and returns how many ran.
  pub fn run_due(&self) -> usize {
    self.advance_to(self.now())
  }

  /// Advances the clock by `duration`, running due callbacks on the way.
  pub fn advance_by(&self, duration: SimDuration) -> usize {
    self.advance_to(self.now() + duration)
  }

  /// Advances the clock to `target`, running every callback due at or before it.
  ///
  /// The clock is moved to each callback's time before that callback runs, so a callback that
  /// queues more work observes its own time stamp. Returns the number of callbacks run.
  pub fn advance_to(&self, target: SimTime) -> usize {
    let mut ran = 0;
    while let Some(next) = self.pop_due(target) {
      self.inner.now.advance_to(next.at);
      (next.callback)();
      ran += 1;
    }
    self.inner.now.advance_to(target);
    ran
  }

  /// Stops accepting callbacks and drops the queued ones.
  pub fn stop(&self) {
    self.inner.stopped.store(true, Ordering::Release);
    let dropped = self.inner.state.with_lock(|state| core::mem::take(&mut state.pending));
    tracing::debug!(dropped = dropped.len(), "manual scheduler stopped");
  }

  /// Returns `true` after [`ManualScheduler::stop`].
  #[must_use]
  pub fn is_stopped(&self) -> bool {
    self.inner.stopped.load(Ordering::Acquire)
  }

  fn pop_due(&self, target: SimTime) -> Option<PendingCallback> {
    self.inner.state.with_lock(|state| {
      let index = state
        .pending
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.at <= target)
        .min_by_key(|(_, entry)| (entry.at, entry.seq))
        .map(|(index, _)| index)?;
      Some(state.pending.swap_remove(index))
    })
  }
}

impl Default for ManualScheduler {
  fn default() -> Self {
    Self::new()
  }
}

impl SimScheduler for ManualScheduler {
  fn now(&self) -> SimTime {
    self.inner.now.load()
  }

  fn schedule_at(&self, at: SimTime, callback: ScheduledCallback) -> Result<(), ScheduleError> {
    if self.is_stopped() {
      return Err(ScheduleError::Stopped);
    }
    let at = at.max(self.now());
    self.inner.state.with_lock(|state| {
      let seq = state.next_seq;
      state.next_seq += 1;
      state.pending.push(PendingCallback { at, seq, callback });
    });
    Ok(())
  }
}

impl fmt::Debug for ManualScheduler {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ManualScheduler").field("now", &self.now()).field("pending", &self.pending()).finish()
  }
}
