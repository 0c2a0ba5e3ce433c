use super::{AccessAnnouncement, AccessObserver};

/// Observer that ignores every announcement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoObserver;

impl AccessObserver for NoObserver {
  fn on_access(&self, _announcement: AccessAnnouncement) {}
}
