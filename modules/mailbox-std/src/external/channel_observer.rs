use simlink_mailbox_core_rs::{AccessAnnouncement, AccessObserver};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[cfg(test)]
mod tests;

/// Forwards access announcements to a tokio task, typically a co-simulating engine that mirrors
/// the mailbox state.
///
/// Sending never blocks. Announcements made after the receiver was dropped are discarded.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
  sender: UnboundedSender<AccessAnnouncement>,
}

impl ChannelObserver {
  /// Wraps an existing sender.
  #[must_use]
  pub const fn new(sender: UnboundedSender<AccessAnnouncement>) -> Self {
    Self { sender }
  }

  /// Creates an observer together with the receiving end.
  #[must_use]
  pub fn channel() -> (Self, UnboundedReceiver<AccessAnnouncement>) {
    let (sender, receiver) = unbounded_channel();
    (Self::new(sender), receiver)
  }

  /// Returns `true` once the receiver has been dropped.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.sender.is_closed()
  }
}

impl AccessObserver for ChannelObserver {
  fn on_access(&self, announcement: AccessAnnouncement) {
    if self.sender.send(announcement).is_err() {
      tracing::debug!(access = %announcement.access, at = %announcement.at, "announcement receiver dropped");
    }
  }
}
