use core::fmt;

/// Mailbox operation being announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailboxAccess {
  /// Blocking removal.
  Get,
  /// Non-blocking removal.
  TryGet,
  /// Blocking inspection of the oldest element.
  Peek,
  /// Non-blocking inspection of the oldest element.
  TryPeek,
  /// Blocking insertion.
  Put,
  /// Non-blocking insertion.
  TryPut,
}

impl MailboxAccess {
  /// Returns `true` for operations served by the read side.
  #[must_use]
  pub const fn is_read(self) -> bool {
    matches!(self, Self::Get | Self::TryGet | Self::Peek | Self::TryPeek)
  }

  /// Returns `true` for operations that may suspend the caller.
  #[must_use]
  pub const fn is_blocking(self) -> bool {
    matches!(self, Self::Get | Self::Peek | Self::Put)
  }

  /// Lower-case operation name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "get",
      | Self::TryGet => "try_get",
      | Self::Peek => "peek",
      | Self::TryPeek => "try_peek",
      | Self::Put => "put",
      | Self::TryPut => "try_put",
    }
  }
}

impl fmt::Display for MailboxAccess {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
