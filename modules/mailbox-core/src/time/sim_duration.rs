use core::{fmt, ops::Add};

/// Span of simulated time, measured in kernel ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimDuration(u64);

impl SimDuration {
  /// Zero-length span.
  pub const ZERO: Self = Self(0);

  /// Creates a span of `ticks` ticks.
  #[must_use]
  pub const fn from_ticks(ticks: u64) -> Self {
    Self(ticks)
  }

  /// Number of ticks in the span.
  #[must_use]
  pub const fn ticks(self) -> u64 {
    self.0
  }

  /// Returns `true` for the zero-length span.
  #[must_use]
  pub const fn is_zero(self) -> bool {
    self.0 == 0
  }
}

impl Add for SimDuration {
  type Output = Self;

  fn add(self, rhs: Self) -> Self::Output {
    Self(self.0.saturating_add(rhs.0))
  }
}

impl fmt::Display for SimDuration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ticks", self.0)
  }
}
