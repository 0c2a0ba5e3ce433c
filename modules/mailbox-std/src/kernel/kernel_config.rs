use std::time::Duration;

/// Default wall-clock time [`SimKernel::run`](super::SimKernel::run) waits for an external wake-up.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Runtime limits of a [`SimKernel`](super::SimKernel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelConfig {
  /// How long `run` blocks, in wall-clock time, waiting for another thread to wake a process
  /// once nothing is runnable and no timer is queued.
  pub idle_timeout: Duration,
  /// Upper bound on executed steps, `None` for no limit.
  pub max_steps:    Option<u64>,
}

impl KernelConfig {
  /// Default configuration.
  #[must_use]
  pub const fn new() -> Self {
    Self { idle_timeout: DEFAULT_IDLE_TIMEOUT, max_steps: None }
  }

  /// Sets the idle timeout.
  #[must_use]
  pub const fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
    self.idle_timeout = idle_timeout;
    self
  }

  /// Sets the step limit.
  #[must_use]
  pub const fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
    self.max_steps = max_steps;
    self
  }
}

impl Default for KernelConfig {
  fn default() -> Self {
    Self::new()
  }
}
