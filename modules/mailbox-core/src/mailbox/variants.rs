use simlink_utils_core_rs::{RingBuffer, SpinSyncMutex};

use super::Mailbox;
use crate::{
  observer::NoObserver,
  strategy::{AnnouncedWait, AnyWait, BridgedWait, CooperativeWait},
};

/// Mailbox used only from inside the simulation.
pub type SyncMailbox<T, M = SpinSyncMutex<RingBuffer<T>>> = Mailbox<T, CooperativeWait, CooperativeWait, M>;

/// Mailbox filled from outside the simulation and drained from inside it.
///
/// Readers resume from the kernel at the time the external put was made.
pub type ProducerExternalMailbox<T, S, M = SpinSyncMutex<RingBuffer<T>>> =
  Mailbox<T, BridgedWait<S>, CooperativeWait, M>;

/// Mailbox filled from inside the simulation and drained from outside it.
///
/// Writers blocked on a full mailbox resume from the kernel at the time the external get was made.
pub type ConsumerExternalMailbox<T, S, M = SpinSyncMutex<RingBuffer<T>>> =
  Mailbox<T, CooperativeWait, BridgedWait<S>, M>;

/// Mailbox with both sides bridged and every access announced to an observer.
pub type ObservedMailbox<T, S, O, M = SpinSyncMutex<RingBuffer<T>>> =
  Mailbox<T, AnnouncedWait<S, O>, AnnouncedWait<S, O>, M>;

/// Mailbox whose strategies were selected at runtime.
pub type DynamicMailbox<T, S, O = NoObserver, M = SpinSyncMutex<RingBuffer<T>>> =
  Mailbox<T, AnyWait<S, O>, AnyWait<S, O>, M>;
