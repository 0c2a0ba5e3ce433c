use super::{BridgedWait, WaitStrategy};
use crate::{
  kernel::{EventWait, SimScheduler},
  observer::{AccessAnnouncement, AccessObserver, MailboxAccess},
  time::SimTime,
};


/// Bridged strategy that also tells an external observer about every access.
///
/// Waits and notifications behave as in [`BridgedWait`]. Before the mailbox acts,
/// [`WaitStrategy::announce`] hands the observer an [`AccessAnnouncement`] stamped with the
/// scheduler's current time.
pub struct AnnouncedWait<S, O> {
  bridge:   BridgedWait<S>,
  observer: O,
}

impl<S, O> AnnouncedWait<S, O> {
  /// Creates a strategy announcing to `observer` and replaying through `scheduler`.
  #[must_use]
  pub fn new(scheduler: S, observer: O) -> Self {
    Self { bridge: BridgedWait::new(scheduler), observer }
  }

  /// Observer receiving announcements.
  #[must_use]
  pub const fn observer(&self) -> &O {
    &self.observer
  }

  /// Underlying bridged strategy.
  #[must_use]
  pub const fn bridge(&self) -> &BridgedWait<S> {
    &self.bridge
  }

  /// Simulated time of the most recently scheduled replay.
  #[must_use]
  pub fn last_replay_at(&self) -> Option<SimTime> {
    self.bridge.last_replay_at()
  }
}

impl<S, O> WaitStrategy for AnnouncedWait<S, O>
where
  S: SimScheduler,
  O: AccessObserver,
{
  type Wait = EventWait;

  fn wait_for_readable(&self) -> Self::Wait {
    self.bridge.wait_for_readable()
  }

  fn wait_for_writable(&self) -> Self::Wait {
    self.bridge.wait_for_writable()
  }

  fn notify_readable(&self) {
    self.bridge.notify_readable();
  }

  fn notify_writable(&self) {
    self.bridge.notify_writable();
  }

  fn announce(&self, access: MailboxAccess) {
    let at = self.bridge.scheduler().now();
    tracing::trace!(%access, %at, "announcing mailbox access");
    self.observer.on_access(AccessAnnouncement::new(access, at));
  }
}

impl<S, O: core::fmt::Debug> core::fmt::Debug for AnnouncedWait<S, O> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("AnnouncedWait").field("bridge", &self.bridge).field("observer", &self.observer).finish()
  }
}
