use core::fmt;

/// Reasons a kernel refuses to queue a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
  /// The kernel has been stopped and drops new work.
  Stopped,
}

impl fmt::Display for ScheduleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Stopped => f.write_str("simulation kernel is stopped"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for ScheduleError {}
