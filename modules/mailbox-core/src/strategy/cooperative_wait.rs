use crate::{
  kernel::{EventWait, SimEvent},
  strategy::WaitStrategy,
};

/// Strategy for a side used only from inside the cooperative simulation domain.
///
/// Notifications fire their event immediately; the woken process resumes at the current
/// simulated time the next time the kernel polls it.
#[derive(Debug, Clone, Default)]
pub struct CooperativeWait {
  readable: SimEvent,
  writable: SimEvent,
}

impl CooperativeWait {
  /// Creates a strategy with fresh events.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

impl WaitStrategy for CooperativeWait {
  type Wait = EventWait;

  fn wait_for_readable(&self) -> Self::Wait {
    self.readable.listen()
  }

  fn wait_for_writable(&self) -> Self::Wait {
    self.writable.listen()
  }

  fn notify_readable(&self) {
    self.readable.notify();
  }

  fn notify_writable(&self) {
    self.writable.notify();
  }
}
