//! Blocking producer/consumer mailboxes for discrete-event simulation.
//!
//! A [`Mailbox`] moves typed messages between the cooperative processes of a simulation and, for
//! the bridged variants, between those processes and an external domain (a co-simulating engine,
//! a hardware I/O thread) whose notifications must land back on the simulated timeline.
//!
//! The crate is `no_std` + `alloc`. It does not contain a simulation kernel; it talks to one
//! through [`SimScheduler`] and suspends processes with [`SimEvent`]. The std crate ships a
//! deterministic kernel implementing that interface.
//!
//! # Variants
//!
//! | Alias | Read side | Write side |
//! |---|---|---|
//! | [`SyncMailbox`] | [`CooperativeWait`] | [`CooperativeWait`] |
//! | [`ProducerExternalMailbox`] | [`BridgedWait`] | [`CooperativeWait`] |
//! | [`ConsumerExternalMailbox`] | [`CooperativeWait`] | [`BridgedWait`] |
//! | [`ObservedMailbox`] | [`AnnouncedWait`] | [`AnnouncedWait`] |
//!
//! [`MailboxFactory::build`] selects one of them at runtime from a [`MailboxKind`].

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

/// Scheduler collaborator interface and notification events.
pub mod kernel;
/// Mailbox handle, variants and construction options.
pub mod mailbox;
/// Access announcements for externally observed mailboxes.
pub mod observer;
/// Wait/notify strategies plugged into each side of a mailbox.
pub mod strategy;
/// Simulated time values.
pub mod time;

pub use kernel::{EventWait, ManualScheduler, ScheduleError, ScheduledCallback, SimEvent, SimScheduler};
pub use mailbox::{
  ConsumerExternalMailbox, DynamicMailbox, Mailbox, MailboxConfigError, MailboxFactory, MailboxKind, MailboxOptions,
  ObservedMailbox, ProducerExternalMailbox, SyncMailbox,
};
pub use observer::{AccessAnnouncement, AccessObserver, MailboxAccess, NoObserver, RecordingObserver};
pub use simlink_utils_core_rs::{RingBuffer, SpinSyncMutex, SyncMutexLike, DEFAULT_CAPACITY};
pub use strategy::{AnnouncedWait, AnyWait, BridgedWait, CooperativeWait, WaitStrategy};
pub use time::{AtomicSimTime, SimDuration, SimTime};
