use std::fmt;

use simlink_mailbox_core_rs::SimTime;

/// Reasons a kernel run ends without completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
  /// Processes are still suspended, nothing is scheduled, and no external wake-up arrived within
  /// the idle timeout.
  Stalled {
    /// Number of unfinished processes.
    pending: usize,
    /// Simulated time at which the kernel gave up.
    at:      SimTime,
  },
  /// The configured step limit was reached.
  StepLimit {
    /// Steps executed.
    steps: u64,
  },
}

impl fmt::Display for KernelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Stalled { pending, at } => write!(f, "simulation stalled at {at} with {pending} suspended processes"),
      | Self::StepLimit { steps } => write!(f, "simulation exceeded its step limit after {steps} steps"),
    }
  }
}

impl std::error::Error for KernelError {}
