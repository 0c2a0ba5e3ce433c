use super::MailboxAccess;
use crate::time::SimTime;

/// Notice that a mailbox operation is about to act, emitted before the buffer is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessAnnouncement {
  /// Operation being performed.
  pub access: MailboxAccess,
  /// Simulated time at which the operation started.
  pub at:     SimTime,
}

impl AccessAnnouncement {
  /// Creates an announcement.
  #[must_use]
  pub const fn new(access: MailboxAccess, at: SimTime) -> Self {
    Self { access, at }
  }
}
