mod arc_shared;
mod spin_sync_mutex;
mod sync_mutex_like;

pub use arc_shared::ArcShared;
pub use spin_sync_mutex::SpinSyncMutex;
pub use sync_mutex_like::SyncMutexLike;
