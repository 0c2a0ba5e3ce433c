use super::{
  ConsumerExternalMailbox, DynamicMailbox, Mailbox, MailboxConfigError, MailboxKind, MailboxOptions, ObservedMailbox,
  ProducerExternalMailbox, SyncMailbox,
};
use crate::{
  kernel::SimScheduler,
  observer::{AccessObserver, NoObserver},
  strategy::{AnnouncedWait, AnyWait, BridgedWait, CooperativeWait},
};


/// Builds mailboxes wired to one scheduler and, optionally, one access observer.
///
/// There is no global simulation root; every bridged strategy receives its own clone of the
/// scheduler handle here.
#[derive(Debug, Clone)]
pub struct MailboxFactory<S, O = NoObserver> {
  scheduler: S,
  observer:  Option<O>,
}

impl<S> MailboxFactory<S, NoObserver> {
  /// Creates a factory without an observer.
  #[must_use]
  pub const fn new(scheduler: S) -> Self {
    Self { scheduler, observer: None }
  }
}

impl<S, O> MailboxFactory<S, O> {
  /// Replaces the observer handed to externally observed mailboxes.
  #[must_use]
  pub fn with_observer<O2>(self, observer: O2) -> MailboxFactory<S, O2> {
    MailboxFactory { scheduler: self.scheduler, observer: Some(observer) }
  }

  /// Scheduler handed to bridged strategies.
  #[must_use]
  pub const fn scheduler(&self) -> &S {
    &self.scheduler
  }

  /// Configured observer, if any.
  #[must_use]
  pub const fn observer(&self) -> Option<&O> {
    self.observer.as_ref()
  }
}

impl<S, O> MailboxFactory<S, O>
where
  S: SimScheduler + Clone,
  O: AccessObserver + Clone,
{
  /// Builds a mailbox used only inside the simulation. `options.kind` is ignored.
  #[must_use]
  pub fn sync<T>(&self, options: MailboxOptions) -> SyncMailbox<T> {
    Mailbox::with_buffer(options.ring_buffer(), CooperativeWait::new(), CooperativeWait::new())
  }

  /// Builds a mailbox filled from outside the simulation. `options.kind` is ignored.
  #[must_use]
  pub fn producer_external<T>(&self, options: MailboxOptions) -> ProducerExternalMailbox<T, S> {
    Mailbox::with_buffer(options.ring_buffer(), BridgedWait::new(self.scheduler.clone()), CooperativeWait::new())
  }

  /// Builds a mailbox drained from outside the simulation. `options.kind` is ignored.
  #[must_use]
  pub fn consumer_external<T>(&self, options: MailboxOptions) -> ConsumerExternalMailbox<T, S> {
    Mailbox::with_buffer(options.ring_buffer(), CooperativeWait::new(), BridgedWait::new(self.scheduler.clone()))
  }

  /// Builds a fully observed mailbox. `options.kind` is ignored.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxConfigError::MissingObserver`] when the factory has no observer.
  pub fn observed<T>(&self, options: MailboxOptions) -> Result<ObservedMailbox<T, S, O>, MailboxConfigError> {
    let (reader, writer) = self.announced_pair()?;
    Ok(Mailbox::with_buffer(options.ring_buffer(), reader, writer))
  }

  /// Builds the mailbox selected by `options.kind`.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxConfigError::MissingObserver`] for
  /// [`MailboxKind::ExternallyObserved`] when the factory has no observer.
  pub fn build<T>(&self, options: MailboxOptions) -> Result<DynamicMailbox<T, S, O>, MailboxConfigError> {
    if options.kind.requires_observer() && self.observer.is_none() {
      return Err(MailboxConfigError::MissingObserver { kind: options.kind });
    }
    let (reader, writer): (AnyWait<S, O>, AnyWait<S, O>) = match options.kind {
      | MailboxKind::Sync => (CooperativeWait::new().into(), CooperativeWait::new().into()),
      | MailboxKind::ProducerExternal => {
        (BridgedWait::new(self.scheduler.clone()).into(), CooperativeWait::new().into())
      },
      | MailboxKind::ConsumerExternal => {
        (CooperativeWait::new().into(), BridgedWait::new(self.scheduler.clone()).into())
      },
      | MailboxKind::ExternallyObserved => {
        let (reader, writer) = self.announced_pair()?;
        (reader.into(), writer.into())
      },
    };
    tracing::debug!(kind = %options.kind, bound = options.bound, "mailbox built");
    Ok(Mailbox::with_buffer(options.ring_buffer(), reader, writer))
  }

  fn announced_pair(&self) -> Result<(AnnouncedWait<S, O>, AnnouncedWait<S, O>), MailboxConfigError> {
    let observer =
      self.observer.as_ref().ok_or(MailboxConfigError::MissingObserver { kind: MailboxKind::ExternallyObserved })?;
    Ok((
      AnnouncedWait::new(self.scheduler.clone(), observer.clone()),
      AnnouncedWait::new(self.scheduler.clone(), observer.clone()),
    ))
  }
}
