//! `no_std` building blocks shared by the simlink mailbox crates.
//!
//! This crate holds the pieces that do not know anything about simulated time: the growable ring
//! buffer that backs every mailbox, and the thin ownership and locking abstractions that let the
//! same mailbox code run over a spin lock on bare metal or a `std::sync::Mutex` on a host.

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
#![deny(clippy::manual_assert)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

/// Collection data structures.
pub mod collections;
/// Shared ownership and locking abstractions.
pub mod sync;

pub use collections::{RingBuffer, DEFAULT_CAPACITY};
pub use sync::{ArcShared, SpinSyncMutex, SyncMutexLike};
