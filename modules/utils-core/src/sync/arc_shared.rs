use alloc::sync::Arc;
use core::ops::Deref;

#[cfg(test)]
mod tests;

/// `Arc`-backed shared handle.
///
/// Every mailbox handle clones one of these; all clones observe the same buffer and wait
/// strategies.
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T: ?Sized> core::fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ArcShared").field("strong", &Arc::strong_count(&self.0)).finish()
  }
}

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` containing the given value.
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }

  /// Returns the value when this is the last handle.
  ///
  /// # Errors
  ///
  /// Returns the handle back while other clones are alive.
  pub fn try_unwrap(self) -> Result<T, Self> {
    Arc::try_unwrap(self.0).map_err(Self)
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Number of live handles sharing the value.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    Arc::strong_count(&self.0)
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}
