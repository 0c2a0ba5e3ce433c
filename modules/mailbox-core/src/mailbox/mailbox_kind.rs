use core::fmt;

/// Which domains touch each side of a mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MailboxKind {
  /// Both sides used from inside the simulation.
  #[default]
  Sync,
  /// Producers live outside the simulation; consumers inside.
  ProducerExternal,
  /// Consumers live outside the simulation; producers inside.
  ConsumerExternal,
  /// Both sides bridged, with every access announced to an observer.
  ExternallyObserved,
}

impl MailboxKind {
  /// Returns `true` when construction needs an access observer.
  #[must_use]
  pub const fn requires_observer(self) -> bool {
    matches!(self, Self::ExternallyObserved)
  }
}

impl fmt::Display for MailboxKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Sync => f.write_str("sync"),
      | Self::ProducerExternal => f.write_str("producer-external"),
      | Self::ConsumerExternal => f.write_str("consumer-external"),
      | Self::ExternallyObserved => f.write_str("externally-observed"),
    }
  }
}
