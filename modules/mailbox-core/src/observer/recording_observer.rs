use alloc::vec::Vec;
use core::mem;

use simlink_utils_core_rs::{ArcShared, SpinSyncMutex, SyncMutexLike};

use super::{AccessAnnouncement, AccessObserver, MailboxAccess};

#[cfg(test)]
mod tests;

/// Observer that keeps every announcement for later inspection.
///
/// Clones share one log.
#[derive(Clone)]
pub struct RecordingObserver {
  log: ArcShared<SpinSyncMutex<Vec<AccessAnnouncement>>>,
}

impl RecordingObserver {
  /// Creates an observer with an empty log.
  #[must_use]
  pub fn new() -> Self {
    Self { log: ArcShared::new(SpinSyncMutex::new(Vec::new())) }
  }

  /// Copy of the log, oldest first.
  #[must_use]
  pub fn announcements(&self) -> Vec<AccessAnnouncement> {
    self.log.with_lock(|log| log.clone())
  }

  /// Operations in the log, oldest first.
  #[must_use]
  pub fn accesses(&self) -> Vec<MailboxAccess> {
    self.log.with_lock(|log| log.iter().map(|announcement| announcement.access).collect())
  }

  /// Empties the log and returns its previous contents.
  pub fn take(&self) -> Vec<AccessAnnouncement> {
    self.log.with_lock(mem::take)
  }

  /// Number of recorded announcements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.log.with_lock(|log| log.len())
  }

  /// Returns `true` when nothing was recorded.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for RecordingObserver {
  fn default() -> Self {
    Self::new()
  }
}

impl AccessObserver for RecordingObserver {
  fn on_access(&self, announcement: AccessAnnouncement) {
    self.log.with_lock(|log| log.push(announcement));
  }
}

impl core::fmt::Debug for RecordingObserver {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RecordingObserver").field("recorded", &self.len()).finish()
  }
}
