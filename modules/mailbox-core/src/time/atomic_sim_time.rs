use portable_atomic::{AtomicU64, Ordering};

use super::SimTime;

/// Simulated clock cell readable from any thread.
///
/// The kernel owns the only writer; external domains read it to time-stamp the notifications they
/// bridge back onto the timeline. The value never moves backwards.
#[derive(Debug, Default)]
pub struct AtomicSimTime(AtomicU64);

impl AtomicSimTime {
  /// Creates a clock cell set to `time`.
  #[must_use]
  pub const fn new(time: SimTime) -> Self {
    Self(AtomicU64::new(time.ticks()))
  }

  /// Reads the current value.
  #[must_use]
  pub fn load(&self) -> SimTime {
    SimTime::from_ticks(self.0.load(Ordering::Acquire))
  }

  /// Moves the clock forward to `time` and returns the value now stored.
  ///
  /// A `time` earlier than the stored value leaves the clock untouched.
  pub fn advance_to(&self, time: SimTime) -> SimTime {
    let previous = self.0.fetch_max(time.ticks(), Ordering::AcqRel);
    SimTime::from_ticks(previous.max(time.ticks()))
  }
}
