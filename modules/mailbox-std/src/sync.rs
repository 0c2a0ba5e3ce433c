mod std_sync_mutex;

use simlink_mailbox_core_rs::{Mailbox, RingBuffer};
pub use std_sync_mutex::StdSyncMutex;

/// Mailbox locked by [`StdSyncMutex`] instead of the default spin lock.
pub type StdMailbox<T, R, W> = Mailbox<T, R, W, StdSyncMutex<RingBuffer<T>>>;
