use core::future::Future;

use crate::observer::MailboxAccess;

/// Wait/notify policy for one side of a mailbox.
///
/// A mailbox holds one strategy for its read side and one for its write side. Putters wait on the
/// write side and notify the read side; getters do the opposite. The strategy decides which
/// domain a notification is delivered in.
///
/// Waits are armed when they are created: a notification issued after
/// [`WaitStrategy::wait_for_readable`] returned completes the returned future even if it has not
/// been polled yet. Callers create the wait, re-check the buffer, and only then await.
pub trait WaitStrategy {
  /// Future returned by the wait operations.
  type Wait: Future<Output = ()>;

  /// Arms a wait for data to become available.
  fn wait_for_readable(&self) -> Self::Wait;

  /// Arms a wait for space to become available.
  fn wait_for_writable(&self) -> Self::Wait;

  /// Signals that data became available.
  fn notify_readable(&self);

  /// Signals that space became available.
  fn notify_writable(&self);

  /// Called before the mailbox performs `access` through this side.
  fn announce(&self, _access: MailboxAccess) {}
}
