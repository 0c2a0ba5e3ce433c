use std::sync::{Mutex, MutexGuard};

use simlink_utils_core_rs::SyncMutexLike;

#[cfg(test)]
mod tests;

/// [`std::sync::Mutex`] behind [`SyncMutexLike`].
///
/// A poisoned lock is recovered, not propagated.
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex guarding `value`.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Consumes the mutex and returns the guarded value.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  /// Locks the mutex, recovering from poisoning.
  pub fn lock(&self) -> MutexGuard<'_, T> {
    self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl<T: Default> Default for StdSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdSyncMutex::lock(self)
  }
}

impl<T> std::fmt::Debug for StdSyncMutex<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StdSyncMutex").finish_non_exhaustive()
  }
}
