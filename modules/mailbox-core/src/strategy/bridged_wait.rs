use alloc::boxed::Box;

use simlink_utils_core_rs::{SpinSyncMutex, SyncMutexLike};

use crate::{
  kernel::{EventWait, SimEvent, SimScheduler},
  strategy::WaitStrategy,
  time::SimTime,
};


/// Strategy for a side touched from outside the simulation domain.
///
/// A notification does not fire its event directly. It reads the scheduler's current time and
/// queues a callback at that time which fires the event, so the waiter resumes from the kernel,
/// never earlier than the notification on the simulated timeline.
///
/// If the scheduler refuses the callback the notification is logged and dropped.
pub struct BridgedWait<S> {
  readable:    SimEvent,
  writable:    SimEvent,
  scheduler:   S,
  last_replay: SpinSyncMutex<Option<SimTime>>,
}

impl<S> BridgedWait<S> {
  /// Creates a strategy replaying notifications through `scheduler`.
  #[must_use]
  pub fn new(scheduler: S) -> Self {
    Self { readable: SimEvent::new(), writable: SimEvent::new(), scheduler, last_replay: SpinSyncMutex::new(None) }
  }

  /// Scheduler used as the time-stamp source.
  #[must_use]
  pub const fn scheduler(&self) -> &S {
    &self.scheduler
  }

  /// Simulated time of the most recently scheduled replay.
  #[must_use]
  pub fn last_replay_at(&self) -> Option<SimTime> {
    self.last_replay.with_lock(|last| *last)
  }
}

impl<S: SimScheduler> BridgedWait<S> {
  fn replay(&self, event: &SimEvent, side: &'static str) {
    let at = self.scheduler.now();
    let event = event.clone();
    match self.scheduler.schedule_at(at, Box::new(move || event.notify())) {
      | Ok(()) => {
        self.last_replay.with_lock(|last| *last = Some(at));
        tracing::trace!(side, %at, "bridged notification scheduled");
      },
      | Err(error) => {
        tracing::warn!(side, %at, %error, "bridged notification dropped");
      },
    }
  }
}

impl<S: SimScheduler> WaitStrategy for BridgedWait<S> {
  type Wait = EventWait;

  fn wait_for_readable(&self) -> Self::Wait {
    self.readable.listen()
  }

  fn wait_for_writable(&self) -> Self::Wait {
    self.writable.listen()
  }

  fn notify_readable(&self) {
    self.replay(&self.readable, "readable");
  }

  fn notify_writable(&self) {
    self.replay(&self.writable, "writable");
  }
}

impl<S> core::fmt::Debug for BridgedWait<S> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("BridgedWait")
      .field("readable", &self.readable)
      .field("writable", &self.writable)
      .field("last_replay_at", &self.last_replay_at())
      .finish()
  }
}
