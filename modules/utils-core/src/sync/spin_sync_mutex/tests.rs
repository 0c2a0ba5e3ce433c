use alloc::vec::Vec;

use super::*;

#[test]
fn with_lock_mutates_protected_value() {
  let mutex = SpinSyncMutex::new(Vec::<u32>::new());
  mutex.with_lock(|values| values.push(1));
  mutex.with_lock(|values| values.push(2));
  assert_eq!(mutex.into_inner(), [1, 2]);
}

#[test]
fn guard_releases_on_drop() {
  let mutex = SpinSyncMutex::new(5_u32);
  {
    let mut guard = mutex.lock();
    *guard += 1;
  }
  assert!(mutex.0.try_lock().is_some());
  assert_eq!(*SyncMutexLike::lock(&mutex), 6);
}
