use std::fmt;

/// Identifier of a process spawned on a [`SimKernel`](super::SimKernel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub(crate) usize);

impl ProcessId {
  /// Spawn order index, starting at zero.
  #[must_use]
  pub const fn index(self) -> usize {
    self.0
  }
}

impl fmt::Display for ProcessId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "process#{}", self.0)
  }
}
