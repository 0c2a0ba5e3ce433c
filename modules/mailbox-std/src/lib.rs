//! std bindings for the simlink mailboxes.
//!
//! - [`SimKernel`]: a deterministic, single-threaded discrete-event kernel that runs cooperative
//!   processes and implements [`SimScheduler`](simlink_mailbox_core_rs::SimScheduler) through its
//!   thread-safe [`KernelHandle`].
//! - [`ExternalPort`]: blocking access to a mailbox from plain OS threads.
//! - [`ChannelObserver`]: forwards access announcements to a tokio task.
//! - [`StdSyncMutex`]: `std::sync::Mutex` behind the mailbox lock abstraction.

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

mod external;
mod kernel;
mod sync;

pub use external::{ChannelObserver, ExternalPort};
pub use kernel::{KernelConfig, KernelError, KernelHandle, ProcessId, SimKernel, Sleep, DEFAULT_IDLE_TIMEOUT};
pub use sync::{StdMailbox, StdSyncMutex};
