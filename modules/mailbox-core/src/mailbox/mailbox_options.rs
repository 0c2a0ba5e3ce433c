use simlink_utils_core_rs::{RingBuffer, DEFAULT_CAPACITY};

use super::MailboxKind;

/// Construction-time mailbox configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MailboxOptions {
  /// Maximum number of buffered elements; `0` makes the mailbox growable.
  pub bound:            usize,
  /// Starting slot count of a growable mailbox. Ignored when `bound > 0`.
  pub initial_capacity: usize,
  /// Strategy selection used by [`MailboxFactory::build`](super::MailboxFactory::build).
  pub kind:             MailboxKind,
}

impl MailboxOptions {
  /// Options for a bounded synchronous mailbox holding at most `bound` elements.
  ///
  /// A `bound` of `0` yields a growable mailbox.
  #[must_use]
  pub const fn with_capacity(bound: usize) -> Self {
    Self { bound, initial_capacity: DEFAULT_CAPACITY, kind: MailboxKind::Sync }
  }

  /// Options for a growable synchronous mailbox.
  #[must_use]
  pub const fn unbounded() -> Self {
    Self::with_capacity(0)
  }

  /// Sets the strategy selection.
  #[must_use]
  pub const fn with_kind(mut self, kind: MailboxKind) -> Self {
    self.kind = kind;
    self
  }

  /// Sets the starting slot count of a growable mailbox (clamped to at least one).
  #[must_use]
  pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }

  /// Returns `true` when putters may be suspended.
  #[must_use]
  pub const fn is_bounded(&self) -> bool {
    self.bound > 0
  }

  /// Returns the bound, or `None` for a growable mailbox.
  #[must_use]
  pub const fn capacity_limit(&self) -> Option<usize> {
    if self.bound == 0 {
      None
    } else {
      Some(self.bound)
    }
  }

  /// Allocates an empty buffer matching these options.
  #[must_use]
  pub fn ring_buffer<T>(&self) -> RingBuffer<T> {
    match self.capacity_limit() {
      | Some(bound) => RingBuffer::bounded(bound),
      | None => RingBuffer::growable(self.initial_capacity),
    }
  }
}

impl Default for MailboxOptions {
  fn default() -> Self {
    Self::unbounded()
  }
}
