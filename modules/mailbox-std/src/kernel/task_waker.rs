use std::{
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Weak,
  },
  task::Wake,
};

use super::shared::KernelShared;

/// Waker of one kernel process.
///
/// Holds the kernel weakly: wakers parked in mailbox events must not keep a dropped kernel alive.
pub(crate) struct TaskWaker {
  id:     usize,
  queued: AtomicBool,
  shared: Weak<KernelShared>,
}

impl TaskWaker {
  pub(crate) fn new(id: usize, shared: &Arc<KernelShared>) -> Self {
    Self { id, queued: AtomicBool::new(false), shared: Arc::downgrade(shared) }
  }

  /// Clears the queued flag right before the process is polled.
  pub(crate) fn begin_poll(&self) {
    self.queued.store(false, Ordering::Release);
  }
}

impl Wake for TaskWaker {
  fn wake(self: Arc<Self>) {
    self.wake_by_ref();
  }

  fn wake_by_ref(self: &Arc<Self>) {
    if self.queued.swap(true, Ordering::AcqRel) {
      return;
    }
    if let Some(shared) = self.shared.upgrade() {
      shared.wake(self.id);
    }
  }
}
