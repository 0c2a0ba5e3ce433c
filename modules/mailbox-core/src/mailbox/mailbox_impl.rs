use core::{fmt, marker::PhantomData};

use simlink_utils_core_rs::{ArcShared, RingBuffer, SpinSyncMutex, SyncMutexLike};

use crate::{observer::MailboxAccess, strategy::WaitStrategy};

#[cfg(test)]
mod tests;

struct MailboxInner<M, R, W> {
  buffer: M,
  reader: R,
  writer: W,
}

/// Blocking FIFO mailbox shared between simulation processes and external domains.
///
/// Every clone of a handle refers to the same buffer and strategies. The read side `R` decides how
/// getters are suspended and woken, the write side `W` does the same for putters.
///
/// A mailbox with bound `0` grows instead of blocking putters; its readers may still wait forever
/// on an empty buffer.
///
/// Buffer access always happens inside a short critical section on `M`; the lock is never held
/// while a caller is suspended. A woken caller re-checks the buffer and waits again if another
/// caller got there first.
pub struct Mailbox<T, R, W, M = SpinSyncMutex<RingBuffer<T>>> {
  inner: ArcShared<MailboxInner<M, R, W>>,
  _pd:   PhantomData<fn(T) -> T>,
}

impl<T, R, W, M> Mailbox<T, R, W, M>
where
  M: SyncMutexLike<RingBuffer<T>>,
  R: WaitStrategy,
  W: WaitStrategy,
{
  /// Creates a mailbox over an empty buffer for `bound` (`0` = growable).
  #[must_use]
  pub fn new(bound: usize, reader: R, writer: W) -> Self {
    Self::with_buffer(RingBuffer::new(bound), reader, writer)
  }

  /// Creates a mailbox over `buffer`, which may already hold elements.
  #[must_use]
  pub fn with_buffer(buffer: RingBuffer<T>, reader: R, writer: W) -> Self {
    Self { inner: ArcShared::new(MailboxInner { buffer: M::new(buffer), reader, writer }), _pd: PhantomData }
  }

  /// Inserts `value`, suspending while a bounded mailbox is full.
  ///
  /// Never suspends on a growable mailbox.
  pub async fn put(&self, value: T) {
    self.inner.writer.announce(MailboxAccess::Put);
    let mut pending = value;
    loop {
      let writable = self.inner.writer.wait_for_writable();
      match self.offer(pending) {
        | Ok(()) => {
          self.inner.reader.notify_readable();
          return;
        },
        | Err(value) => {
          pending = value;
          tracing::trace!(capacity = self.capacity(), "put waiting for space");
          writable.await;
        },
      }
    }
  }

  /// Inserts `value` without suspending.
  ///
  /// # Errors
  ///
  /// Returns the value back when a bounded mailbox is full.
  pub fn try_put(&self, value: T) -> Result<(), T> {
    self.inner.writer.announce(MailboxAccess::TryPut);
    self.offer(value)?;
    self.inner.reader.notify_readable();
    Ok(())
  }

  /// Removes the oldest element, suspending while the mailbox is empty.
  pub async fn get(&self) -> T {
    self.inner.reader.announce(MailboxAccess::Get);
    loop {
      let readable = self.inner.reader.wait_for_readable();
      if let Some(value) = self.take() {
        self.inner.writer.notify_writable();
        return value;
      }
      tracing::trace!("get waiting for data");
      readable.await;
    }
  }

  /// Removes the oldest element without suspending.
  pub fn try_get(&self) -> Option<T> {
    self.inner.reader.announce(MailboxAccess::TryGet);
    let value = self.take()?;
    self.inner.writer.notify_writable();
    Some(value)
  }

  /// Returns a copy of the oldest element, suspending while the mailbox is empty.
  pub async fn peek(&self) -> T
  where
    T: Clone, {
    self.inner.reader.announce(MailboxAccess::Peek);
    loop {
      let readable = self.inner.reader.wait_for_readable();
      if let Some(value) = self.copy_front() {
        return value;
      }
      tracing::trace!("peek waiting for data");
      readable.await;
    }
  }

  /// Returns a copy of the oldest element without suspending.
  pub fn try_peek(&self) -> Option<T>
  where
    T: Clone, {
    self.inner.reader.announce(MailboxAccess::TryPeek);
    self.copy_front()
  }

  /// Number of buffered elements.
  #[must_use]
  pub fn filled(&self) -> usize {
    self.inner.buffer.with_lock(|buffer| buffer.filled())
  }

  /// Alias of [`Mailbox::filled`].
  #[must_use]
  pub fn len(&self) -> usize {
    self.filled()
  }

  /// Number of free slots in the current storage.
  #[must_use]
  pub fn free(&self) -> usize {
    self.inner.buffer.with_lock(|buffer| buffer.free())
  }

  /// Current slot count.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.buffer.with_lock(|buffer| buffer.capacity())
  }

  /// Configured bound; `0` means growable.
  #[must_use]
  pub fn bound(&self) -> usize {
    self.inner.buffer.with_lock(|buffer| buffer.bound())
  }

  /// Returns `true` when nothing is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.filled() == 0
  }

  /// Returns `true` when a bounded mailbox has no free slot. Always `false` for growable ones.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.inner.buffer.with_lock(|buffer| buffer.is_full() && !buffer.is_growable())
  }

  /// Read-side strategy.
  #[must_use]
  pub fn reader(&self) -> &R {
    &self.inner.reader
  }

  /// Write-side strategy.
  #[must_use]
  pub fn writer(&self) -> &W {
    &self.inner.writer
  }

  fn offer(&self, value: T) -> Result<(), T> {
    self.inner.buffer.with_lock(|buffer| {
      if buffer.is_full() {
        if !buffer.is_growable() {
          return Err(value);
        }
        buffer.grow();
      }
      buffer.write(value);
      Ok(())
    })
  }

  fn take(&self) -> Option<T> {
    self.inner.buffer.with_lock(|buffer| if buffer.is_empty() { None } else { Some(buffer.read()) })
  }

  fn copy_front(&self) -> Option<T>
  where
    T: Clone, {
    self.inner.buffer.with_lock(|buffer| if buffer.is_empty() { None } else { Some(buffer.peek().clone()) })
  }
}

impl<T, R, W, M> Clone for Mailbox<T, R, W, M> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}

impl<T, R, W, M> fmt::Debug for Mailbox<T, R, W, M>
where
  M: SyncMutexLike<RingBuffer<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.inner.buffer.with_lock(|buffer| {
      f.debug_struct("Mailbox")
        .field("filled", &buffer.filled())
        .field("capacity", &buffer.capacity())
        .field("bound", &buffer.bound())
        .finish()
    })
  }
}
