use futures::executor::block_on;
use simlink_mailbox_core_rs::{Mailbox, RingBuffer, SpinSyncMutex, SyncMutexLike, WaitStrategy};

/// Blocking access to a mailbox from a thread outside the simulation.
///
/// The blocking operations park the calling OS thread until the mailbox side it waits on is
/// notified. Pair it with the bridged side of a mailbox: notifications raised here are replayed
/// onto the simulated timeline, while notifications raised by simulation processes wake this
/// thread directly.
///
/// Never use the blocking operations from the thread running the kernel; they would wait for a
/// step that can no longer happen.
pub struct ExternalPort<T, R, W, M = SpinSyncMutex<RingBuffer<T>>> {
  mailbox: Mailbox<T, R, W, M>,
}

impl<T, R, W, M> ExternalPort<T, R, W, M>
where
  M: SyncMutexLike<RingBuffer<T>>,
  R: WaitStrategy,
  W: WaitStrategy,
{
  /// Wraps a mailbox handle.
  #[must_use]
  pub const fn new(mailbox: Mailbox<T, R, W, M>) -> Self {
    Self { mailbox }
  }

  /// Inserts `value`, blocking the thread while a bounded mailbox is full.
  pub fn put(&self, value: T) {
    block_on(self.mailbox.put(value));
  }

  /// Removes the oldest element, blocking the thread while the mailbox is empty.
  #[must_use]
  pub fn get(&self) -> T {
    block_on(self.mailbox.get())
  }

  /// Copies the oldest element, blocking the thread while the mailbox is empty.
  #[must_use]
  pub fn peek(&self) -> T
  where
    T: Clone, {
    block_on(self.mailbox.peek())
  }

  /// Inserts `value` without blocking.
  ///
  /// # Errors
  ///
  /// Returns the value back when a bounded mailbox is full.
  pub fn try_put(&self, value: T) -> Result<(), T> {
    self.mailbox.try_put(value)
  }

  /// Removes the oldest element without blocking.
  #[must_use]
  pub fn try_get(&self) -> Option<T> {
    self.mailbox.try_get()
  }

  /// Copies the oldest element without blocking.
  #[must_use]
  pub fn try_peek(&self) -> Option<T>
  where
    T: Clone, {
    self.mailbox.try_peek()
  }

  /// Underlying mailbox handle.
  #[must_use]
  pub const fn mailbox(&self) -> &Mailbox<T, R, W, M> {
    &self.mailbox
  }

  /// Returns the underlying mailbox handle.
  #[must_use]
  pub fn into_mailbox(self) -> Mailbox<T, R, W, M> {
    self.mailbox
  }
}

impl<T, R, W, M> Clone for ExternalPort<T, R, W, M> {
  fn clone(&self) -> Self {
    Self { mailbox: self.mailbox.clone() }
  }
}

impl<T, R, W, M> From<Mailbox<T, R, W, M>> for ExternalPort<T, R, W, M>
where
  M: SyncMutexLike<RingBuffer<T>>,
  R: WaitStrategy,
  W: WaitStrategy,
{
  fn from(mailbox: Mailbox<T, R, W, M>) -> Self {
    Self::new(mailbox)
  }
}

impl<T, R, W, M> std::fmt::Debug for ExternalPort<T, R, W, M>
where
  M: SyncMutexLike<RingBuffer<T>>,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ExternalPort").field("mailbox", &self.mailbox).finish()
  }
}
