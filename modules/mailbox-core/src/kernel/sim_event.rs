use alloc::vec::Vec;
use core::{
  fmt,
  future::Future,
  mem,
  pin::Pin,
  task::{Context, Poll, Waker},
};

use simlink_utils_core_rs::{ArcShared, SpinSyncMutex, SyncMutexLike};

#[cfg(test)]
mod tests;

struct EventState {
  epoch:   u64,
  next_id: u64,
  waiters: Vec<(u64, Waker)>,
}

/// Notification event processes suspend on.
///
/// [`SimEvent::listen`] is the suspend half and [`SimEvent::notify`] the resume half of the
/// kernel's suspension interface. A wait is armed when it is created, so a notification raised
/// between `listen` and the first poll still completes it.
///
/// `notify` wakes every registered waiter. Waiters are expected to re-check the condition they
/// were waiting for.
#[derive(Clone)]
pub struct SimEvent {
  state: ArcShared<SpinSyncMutex<EventState>>,
}

impl SimEvent {
  /// Creates an event with no waiters.
  #[must_use]
  pub fn new() -> Self {
    Self { state: ArcShared::new(SpinSyncMutex::new(EventState { epoch: 0, next_id: 0, waiters: Vec::new() })) }
  }

  /// Returns a future completing on the next [`SimEvent::notify`].
  #[must_use]
  pub fn listen(&self) -> EventWait {
    let armed_at = self.state.with_lock(|state| state.epoch);
    EventWait { event: self.clone(), armed_at, slot: None }
  }

  /// Wakes every waiter registered so far.
  pub fn notify(&self) {
    let waiters = self.state.with_lock(|state| {
      state.epoch = state.epoch.wrapping_add(1);
      mem::take(&mut state.waiters)
    });
    if !waiters.is_empty() {
      tracing::trace!(waiters = waiters.len(), "sim event notified");
    }
    for (_, waker) in waiters {
      waker.wake();
    }
  }

  /// Number of notifications issued so far.
  #[must_use]
  pub fn epoch(&self) -> u64 {
    self.state.with_lock(|state| state.epoch)
  }

  /// Number of suspended waiters.
  #[must_use]
  pub fn waiter_count(&self) -> usize {
    self.state.with_lock(|state| state.waiters.len())
  }
}

impl Default for SimEvent {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for SimEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.state.with_lock(|state| {
      f.debug_struct("SimEvent").field("epoch", &state.epoch).field("waiters", &state.waiters.len()).finish()
    })
  }
}

/// Armed wait returned by [`SimEvent::listen`].
///
/// Dropping a pending wait removes its registration.
#[must_use = "futures do nothing unless polled"]
pub struct EventWait {
  event:    SimEvent,
  armed_at: u64,
  slot:     Option<u64>,
}

impl EventWait {
  /// Returns `true` once the event has been notified since this wait was armed.
  #[must_use]
  pub fn is_notified(&self) -> bool {
    self.event.epoch() != self.armed_at
  }
}

impl Future for EventWait {
  type Output = ();

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    let armed_at = this.armed_at;
    let slot = this.slot;
    let registration = this.event.state.with_lock(|state| {
      if state.epoch != armed_at {
        return None;
      }
      if let Some((id, waker)) = slot.and_then(|id| state.waiters.iter_mut().find(|(waiter, _)| *waiter == id)) {
        if !waker.will_wake(cx.waker()) {
          *waker = cx.waker().clone();
        }
        return Some(*id);
      }
      let id = state.next_id;
      state.next_id = state.next_id.wrapping_add(1);
      state.waiters.push((id, cx.waker().clone()));
      Some(id)
    });
    this.slot = registration;
    match registration {
      | Some(_) => Poll::Pending,
      | None => Poll::Ready(()),
    }
  }
}

impl Drop for EventWait {
  fn drop(&mut self) {
    if let Some(id) = self.slot.take() {
      self.event.state.with_lock(|state| state.waiters.retain(|(waiter, _)| *waiter != id));
    }
  }
}

impl fmt::Debug for EventWait {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EventWait").field("armed_at", &self.armed_at).field("registered", &self.slot.is_some()).finish()
  }
}
