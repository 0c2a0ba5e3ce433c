use std::{sync::Arc, thread};

use simlink_mailbox_core_rs::{CooperativeWait, RingBuffer};

use super::*;
use crate::sync::StdMailbox;

#[test]
fn with_lock_mutates_in_place() {
  let mutex = StdSyncMutex::new(Vec::new());
  mutex.with_lock(|values| values.push(1));
  mutex.with_lock(|values| values.push(2));
  assert_eq!(mutex.into_inner(), [1, 2]);
}

#[test]
fn poisoned_lock_is_recovered() {
  let mutex = Arc::new(StdSyncMutex::new(5_u32));
  let poisoner = mutex.clone();
  let _ = thread::spawn(move || {
    let _guard = poisoner.lock();
    panic!("poison the lock");
  })
  .join();

  assert!(mutex.0.is_poisoned());
  assert_eq!(*mutex.lock(), 5);
}

#[test]
fn std_locked_mailbox_moves_values_between_threads() {
  let mailbox: StdMailbox<u32, CooperativeWait, CooperativeWait> =
    StdMailbox::with_buffer(RingBuffer::bounded(4), CooperativeWait::new(), CooperativeWait::new());
  let producer = mailbox.clone();

  thread::spawn(move || {
    for value in 0..4 {
      producer.try_put(value).unwrap();
    }
  })
  .join()
  .unwrap();

  let drained: Vec<u32> = std::iter::from_fn(|| mailbox.try_get()).collect();
  assert_eq!(drained, [0, 1, 2, 3]);
}
