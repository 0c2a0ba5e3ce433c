use simlink_utils_core_rs::ArcShared;

use super::AccessAnnouncement;

/// External party told about every access to an observed mailbox.
///
/// Called synchronously from the accessing context, before the mailbox acts. Implementations
/// must not block and must not call back into the same mailbox.
pub trait AccessObserver {
  /// Receives one announcement.
  fn on_access(&self, announcement: AccessAnnouncement);
}

impl<O: AccessObserver + ?Sized> AccessObserver for ArcShared<O> {
  fn on_access(&self, announcement: AccessAnnouncement) {
    (**self).on_access(announcement);
  }
}

impl<O: AccessObserver + ?Sized> AccessObserver for &O {
  fn on_access(&self, announcement: AccessAnnouncement) {
    (**self).on_access(announcement);
  }
}
