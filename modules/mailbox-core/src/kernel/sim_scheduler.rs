use alloc::boxed::Box;

use super::ScheduleError;
use crate::time::SimTime;

/// Callback queued on the simulated timeline.
///
/// Callbacks are handed over from arbitrary threads, hence `Send`.
pub type ScheduledCallback = Box<dyn FnOnce() + Send + 'static>;

/// The part of a simulation kernel that mailboxes depend on.
///
/// Bridged wait strategies use it to replay a notification raised outside the simulation onto the
/// simulated timeline: they read [`SimScheduler::now`] and queue a callback for that instant. The
/// kernel runs the callback from its own context, never from the caller's.
pub trait SimScheduler {
  /// Current simulated time.
  fn now(&self) -> SimTime;

  /// Queues `callback` to run on the kernel at `at`.
  ///
  /// A time earlier than the kernel's current time is treated as "as soon as possible"; the
  /// callback never observes a clock value earlier than the one current when it was queued.
  ///
  /// # Errors
  ///
  /// Returns [`ScheduleError::Stopped`] when the kernel no longer accepts callbacks.
  fn schedule_at(&self, at: SimTime, callback: ScheduledCallback) -> Result<(), ScheduleError>;
}

impl<S: SimScheduler + ?Sized> SimScheduler for &S {
  fn now(&self) -> SimTime {
    (**self).now()
  }

  fn schedule_at(&self, at: SimTime, callback: ScheduledCallback) -> Result<(), ScheduleError> {
    (**self).schedule_at(at, callback)
  }
}
