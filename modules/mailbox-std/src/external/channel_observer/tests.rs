use simlink_mailbox_core_rs::{MailboxAccess, SimTime};

use super::*;

#[tokio::test(flavor = "current_thread")]
async fn announcements_reach_the_receiver_in_order() {
  let (observer, mut receiver) = ChannelObserver::channel();

  observer.on_access(AccessAnnouncement::new(MailboxAccess::Put, SimTime::from_ticks(1)));
  observer.on_access(AccessAnnouncement::new(MailboxAccess::Get, SimTime::from_ticks(2)));

  assert_eq!(receiver.recv().await.map(|announcement| announcement.access), Some(MailboxAccess::Put));
  assert_eq!(receiver.recv().await.map(|announcement| announcement.at), Some(SimTime::from_ticks(2)));
}

#[test]
fn dropped_receiver_discards_announcements() {
  let (observer, receiver) = ChannelObserver::channel();
  drop(receiver);

  assert!(observer.is_closed());
  observer.on_access(AccessAnnouncement::new(MailboxAccess::TryPut, SimTime::ZERO));
}
