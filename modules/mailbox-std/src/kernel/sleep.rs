use std::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use simlink_mailbox_core_rs::{EventWait, SimTime};

/// Future returned by [`KernelHandle::sleep`](super::KernelHandle::sleep) and
/// [`KernelHandle::sleep_until`](super::KernelHandle::sleep_until).
///
/// Completes when the kernel reaches the deadline. A sleep started after the kernel was stopped
/// never completes.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct Sleep {
  wait:     EventWait,
  deadline: SimTime,
}

impl Sleep {
  pub(crate) fn new(wait: EventWait, deadline: SimTime) -> Self {
    Self { wait, deadline }
  }

  /// Simulated time the sleep ends at.
  #[must_use]
  pub const fn deadline(&self) -> SimTime {
    self.deadline
  }
}

impl Future for Sleep {
  type Output = ();

  fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    Pin::new(&mut self.wait).poll(cx)
  }
}
