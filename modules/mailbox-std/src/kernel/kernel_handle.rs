use std::{future::Future, sync::Arc};

use simlink_mailbox_core_rs::{
  MailboxFactory, ScheduleError, ScheduledCallback, SimDuration, SimEvent, SimScheduler, SimTime,
};

use super::{shared::KernelShared, ProcessId, Sleep};

/// Thread-safe handle to a [`SimKernel`](super::SimKernel).
///
/// This is the [`SimScheduler`] handed to bridged mailboxes. Any thread may read the clock, queue
/// callbacks, spawn `Send` processes or stop the kernel; only the thread owning the kernel runs
/// them.
#[derive(Clone)]
pub struct KernelHandle {
  shared: Arc<KernelShared>,
}

impl KernelHandle {
  pub(crate) const fn new(shared: Arc<KernelShared>) -> Self {
    Self { shared }
  }

  /// Current simulated time.
  #[must_use]
  pub fn now(&self) -> SimTime {
    self.shared.now.load()
  }

  /// Queues a `Send` process. It starts on the kernel's next step.
  pub fn spawn<F>(&self, process: F) -> ProcessId
  where
    F: Future<Output = ()> + Send + 'static, {
    let id = self.shared.spawn(Box::pin(process));
    tracing::trace!(process = id, "process queued from handle");
    ProcessId(id)
  }

  /// Suspends the calling process for `duration` of simulated time.
  pub fn sleep(&self, duration: SimDuration) -> Sleep {
    self.sleep_until(self.now() + duration)
  }

  /// Suspends the calling process until the simulated clock reaches `deadline`.
  pub fn sleep_until(&self, deadline: SimTime) -> Sleep {
    let event = SimEvent::new();
    let wait = event.listen();
    if let Err(error) = self.shared.schedule(deadline, Box::new(move || event.notify())) {
      tracing::warn!(%deadline, %error, "sleep will never complete");
    }
    Sleep::new(wait, deadline)
  }

  /// Stops the kernel: queued timers are dropped, new callbacks are refused, and a running
  /// [`SimKernel::run`](super::SimKernel::run) returns.
  pub fn stop(&self) {
    self.shared.stop();
  }

  /// Returns `true` once the kernel was stopped or dropped.
  #[must_use]
  pub fn is_stopped(&self) -> bool {
    self.shared.is_stopped()
  }

  /// Mailbox factory whose bridged strategies replay through this kernel.
  #[must_use]
  pub fn mailbox_factory(&self) -> MailboxFactory<Self> {
    MailboxFactory::new(self.clone())
  }
}

impl SimScheduler for KernelHandle {
  fn now(&self) -> SimTime {
    KernelHandle::now(self)
  }

  fn schedule_at(&self, at: SimTime, callback: ScheduledCallback) -> Result<(), ScheduleError> {
    self.shared.schedule(at, callback)
  }
}

impl std::fmt::Debug for KernelHandle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("KernelHandle").field("now", &self.now()).field("stopped", &self.is_stopped()).finish()
  }
}
