use core::fmt;

use super::MailboxKind;

/// Errors raised while building a mailbox from options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailboxConfigError {
  /// The requested kind announces accesses but the factory has no observer.
  MissingObserver {
    /// Kind that was requested.
    kind: MailboxKind,
  },
}

impl fmt::Display for MailboxConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::MissingObserver { kind } => write!(f, "{kind} mailbox requires an access observer"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for MailboxConfigError {}
