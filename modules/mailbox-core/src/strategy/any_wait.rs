use super::{AnnouncedWait, BridgedWait, CooperativeWait, WaitStrategy};
use crate::{
  kernel::{EventWait, SimScheduler},
  observer::{AccessObserver, MailboxAccess},
};

/// Strategy chosen at construction time rather than by type.
///
/// Lets [`MailboxFactory::build`](crate::mailbox::MailboxFactory::build) return one mailbox type
/// for every [`MailboxKind`](crate::mailbox::MailboxKind).
#[derive(Debug)]
pub enum AnyWait<S, O> {
  /// Same-domain notifications.
  Cooperative(CooperativeWait),
  /// Notifications replayed through the scheduler.
  Bridged(BridgedWait<S>),
  /// Bridged notifications plus access announcements.
  Announced(AnnouncedWait<S, O>),
}

impl<S, O> AnyWait<S, O> {
  /// Short name of the selected strategy.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      | Self::Cooperative(_) => "cooperative",
      | Self::Bridged(_) => "bridged",
      | Self::Announced(_) => "announced",
    }
  }
}

impl<S, O> From<CooperativeWait> for AnyWait<S, O> {
  fn from(strategy: CooperativeWait) -> Self {
    Self::Cooperative(strategy)
  }
}

impl<S, O> From<BridgedWait<S>> for AnyWait<S, O> {
  fn from(strategy: BridgedWait<S>) -> Self {
    Self::Bridged(strategy)
  }
}

impl<S, O> From<AnnouncedWait<S, O>> for AnyWait<S, O> {
  fn from(strategy: AnnouncedWait<S, O>) -> Self {
    Self::Announced(strategy)
  }
}

impl<S, O> WaitStrategy for AnyWait<S, O>
where
  S: SimScheduler,
  O: AccessObserver,
{
  type Wait = EventWait;

  fn wait_for_readable(&self) -> Self::Wait {
    match self {
      | Self::Cooperative(strategy) => strategy.wait_for_readable(),
      | Self::Bridged(strategy) => strategy.wait_for_readable(),
      | Self::Announced(strategy) => strategy.wait_for_readable(),
    }
  }

  fn wait_for_writable(&self) -> Self::Wait {
    match self {
      | Self::Cooperative(strategy) => strategy.wait_for_writable(),
      | Self::Bridged(strategy) => strategy.wait_for_writable(),
      | Self::Announced(strategy) => strategy.wait_for_writable(),
    }
  }

  fn notify_readable(&self) {
    match self {
      | Self::Cooperative(strategy) => strategy.notify_readable(),
      | Self::Bridged(strategy) => strategy.notify_readable(),
      | Self::Announced(strategy) => strategy.notify_readable(),
    }
  }

  fn notify_writable(&self) {
    match self {
      | Self::Cooperative(strategy) => strategy.notify_writable(),
      | Self::Bridged(strategy) => strategy.notify_writable(),
      | Self::Announced(strategy) => strategy.notify_writable(),
    }
  }

  fn announce(&self, access: MailboxAccess) {
    if let Self::Announced(strategy) = self {
      strategy.announce(access);
    }
  }
}
