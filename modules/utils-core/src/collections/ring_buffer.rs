use alloc::vec::Vec;
use core::{cmp, fmt};


/// Initial slot count of a growable buffer when none is requested explicitly.
pub const DEFAULT_CAPACITY: usize = 16;

/// Circular buffer with explicit read/write cursors.
///
/// A buffer is either *bounded* (`bound > 0`, capacity fixed at `bound`) or *growable*
/// (`bound == 0`, capacity doubles on demand through [`RingBuffer::grow`]).
///
/// `filled() + free() == capacity()` holds after every operation and both cursors stay inside
/// `[0, capacity)`.
///
/// The buffer does not decide when to block or grow; the owning mailbox does. Calling
/// [`RingBuffer::write`] on a full buffer or [`RingBuffer::read`] on an empty one means the
/// caller broke the wait/notify protocol, and the buffer panics instead of returning a sentinel.
pub struct RingBuffer<T> {
  slots: Vec<Option<T>>,
  head:  usize,
  tail:  usize,
  free:  usize,
  bound: usize,
}

impl<T> RingBuffer<T> {
  /// Creates a buffer for the given bound: `0` yields a growable buffer with
  /// [`DEFAULT_CAPACITY`] slots, anything else a bounded buffer of exactly `bound` slots.
  #[must_use]
  pub fn new(bound: usize) -> Self {
    if bound == 0 {
      Self::growable(DEFAULT_CAPACITY)
    } else {
      Self::with_slots(bound, bound)
    }
  }

  /// Creates a bounded buffer.
  ///
  /// # Panics
  ///
  /// Panics when `bound` is zero; use [`RingBuffer::growable`] for unbounded storage.
  #[must_use]
  pub fn bounded(bound: usize) -> Self {
    assert!(bound > 0, "a bounded ring buffer needs at least one slot");
    Self::with_slots(bound, bound)
  }

  /// Creates a growable buffer starting at `initial_capacity` slots (at least one).
  #[must_use]
  pub fn growable(initial_capacity: usize) -> Self {
    Self::with_slots(cmp::max(1, initial_capacity), 0)
  }

  fn with_slots(capacity: usize, bound: usize) -> Self {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    Self { slots, head: 0, tail: 0, free: capacity, bound }
  }

  /// Number of buffered elements.
  #[must_use]
  pub fn filled(&self) -> usize {
    self.capacity() - self.free
  }

  /// Number of free slots.
  #[must_use]
  pub const fn free(&self) -> usize {
    self.free
  }

  /// Current slot count.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Configured bound; `0` means growable.
  #[must_use]
  pub const fn bound(&self) -> usize {
    self.bound
  }

  /// Returns `true` when [`RingBuffer::grow`] is permitted.
  #[must_use]
  pub const fn is_growable(&self) -> bool {
    self.bound == 0
  }

  /// Returns `true` when nothing is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.filled() == 0
  }

  /// Returns `true` when no slot is free.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    self.free == 0
  }

  /// Alias of [`RingBuffer::filled`].
  #[must_use]
  pub fn len(&self) -> usize {
    self.filled()
  }

  /// Stores `value` at the write cursor.
  ///
  /// # Panics
  ///
  /// Panics when no slot is free.
  pub fn write(&mut self, value: T) {
    assert!(self.free > 0, "ring buffer write with no free slot (capacity {})", self.capacity());
    debug_assert!(self.slots[self.tail].is_none(), "write cursor points at an occupied slot");
    self.slots[self.tail] = Some(value);
    self.tail = (self.tail + 1) % self.capacity();
    self.free -= 1;
  }

  /// Removes and returns the element at the read cursor.
  ///
  /// # Panics
  ///
  /// Panics when the buffer is empty.
  pub fn read(&mut self) -> T {
    assert!(!self.is_empty(), "ring buffer read with nothing buffered (capacity {})", self.capacity());
    let head = self.head;
    let slot = self.slots[head].take();
    self.head = (head + 1) % self.capacity();
    self.free += 1;
    match slot {
      | Some(value) => value,
      | None => panic!("read cursor {head} points at an empty slot"),
    }
  }

  /// Returns the element at the read cursor without consuming it.
  ///
  /// # Panics
  ///
  /// Panics when the buffer is empty.
  #[must_use]
  pub fn peek(&self) -> &T {
    assert!(!self.is_empty(), "ring buffer peek with nothing buffered (capacity {})", self.capacity());
    match &self.slots[self.head] {
      | Some(value) => value,
      | None => panic!("read cursor {} points at an empty slot", self.head),
    }
  }

  /// Doubles the capacity, moving the buffered elements to the front of the new storage in FIFO
  /// order. Afterwards the read cursor is `0` and the write cursor is `filled()`.
  ///
  /// # Panics
  ///
  /// Panics on a bounded buffer.
  pub fn grow(&mut self) {
    assert!(self.is_growable(), "ring buffer bounded to {} slots cannot grow", self.bound);
    let old_capacity = self.capacity();
    let filled = self.filled();
    let new_capacity = cmp::max(1, old_capacity.saturating_mul(2));

    let mut slots = Vec::with_capacity(new_capacity);
    for offset in 0..filled {
      slots.push(self.slots[(self.head + offset) % old_capacity].take());
    }
    slots.resize_with(new_capacity, || None);

    self.slots = slots;
    self.head = 0;
    self.tail = filled % new_capacity;
    self.free = new_capacity - filled;
    tracing::debug!(from = old_capacity, to = new_capacity, filled, "ring buffer grew");
  }

  /// Iterates over the buffered elements oldest-first.
  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    let capacity = self.capacity();
    (0..self.filled()).filter_map(move |offset| self.slots[(self.head + offset) % capacity].as_ref())
  }
}

impl<T> Default for RingBuffer<T> {
  fn default() -> Self {
    Self::new(0)
  }
}

impl<T> fmt::Debug for RingBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RingBuffer")
      .field("capacity", &self.capacity())
      .field("filled", &self.filled())
      .field("bound", &self.bound)
      .field("head", &self.head)
      .field("tail", &self.tail)
      .finish()
  }
}
