use core::ops::{Deref, DerefMut};

/// Blocking mutex abstraction for runtime-agnostic code.
///
/// Mailboxes only ever touch their buffer through [`SyncMutexLike::with_lock`], so a guard can
/// never be held across a suspension point.
pub trait SyncMutexLike<T> {
  /// Guard type returned by [`SyncMutexLike::lock`].
  type Guard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new mutex instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the mutex and returns the inner value.
  fn into_inner(self) -> T;

  /// Locks the mutex and returns a guard to the protected value.
  fn lock(&self) -> Self::Guard<'_>;

  /// Runs `f` with exclusive access to the protected value.
  fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.lock();
    f(&mut guard)
  }
}
