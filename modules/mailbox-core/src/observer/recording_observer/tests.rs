use super::*;
use crate::time::SimTime;

#[test]
fn clones_share_one_log() {
  let observer = RecordingObserver::new();
  let clone = observer.clone();

  clone.on_access(AccessAnnouncement::new(MailboxAccess::Put, SimTime::from_ticks(3)));
  observer.on_access(AccessAnnouncement::new(MailboxAccess::TryGet, SimTime::from_ticks(4)));

  assert_eq!(observer.accesses(), [MailboxAccess::Put, MailboxAccess::TryGet]);
  assert_eq!(clone.len(), 2);
}

#[test]
fn take_drains_the_log() {
  let observer = RecordingObserver::new();
  observer.on_access(AccessAnnouncement::new(MailboxAccess::Peek, SimTime::ZERO));

  let drained = observer.take();
  assert_eq!(drained.len(), 1);
  assert_eq!(drained[0].access, MailboxAccess::Peek);
  assert!(observer.is_empty());
}

#[test]
fn access_classification() {
  assert!(MailboxAccess::TryPeek.is_read());
  assert!(!MailboxAccess::TryPut.is_read());
  assert!(MailboxAccess::Put.is_blocking());
  assert!(!MailboxAccess::TryGet.is_blocking());
  assert_eq!(alloc::format!("{}", MailboxAccess::TryPut), "try_put");
}
