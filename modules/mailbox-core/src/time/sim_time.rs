use core::{
  fmt,
  ops::{Add, Sub},
};

use super::SimDuration;

/// Point on the simulated timeline, measured in kernel ticks since the start of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimTime(u64);

impl SimTime {
  /// Start of the simulation.
  pub const ZERO: Self = Self(0);
  /// Latest representable time.
  pub const MAX: Self = Self(u64::MAX);

  /// Creates the time `ticks` ticks after the start of the run.
  #[must_use]
  pub const fn from_ticks(ticks: u64) -> Self {
    Self(ticks)
  }

  /// Ticks elapsed since the start of the run.
  #[must_use]
  pub const fn ticks(self) -> u64 {
    self.0
  }

  /// Adds `duration`, clamping at [`SimTime::MAX`].
  #[must_use]
  pub const fn saturating_add(self, duration: SimDuration) -> Self {
    Self(self.0.saturating_add(duration.ticks()))
  }

  /// Span from `earlier` to `self`, or zero when `earlier` is later.
  #[must_use]
  pub const fn saturating_since(self, earlier: Self) -> SimDuration {
    SimDuration::from_ticks(self.0.saturating_sub(earlier.0))
  }
}

impl Add<SimDuration> for SimTime {
  type Output = Self;

  fn add(self, rhs: SimDuration) -> Self::Output {
    self.saturating_add(rhs)
  }
}

impl Sub for SimTime {
  type Output = SimDuration;

  fn sub(self, rhs: Self) -> Self::Output {
    self.saturating_since(rhs)
  }
}

impl fmt::Display for SimTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "@{}", self.0)
  }
}
