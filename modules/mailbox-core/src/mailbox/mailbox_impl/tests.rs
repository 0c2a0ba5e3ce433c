use alloc::{rc::Rc, vec::Vec};
use core::cell::RefCell;

use futures::{executor::LocalPool, task::LocalSpawnExt, FutureExt};

use super::*;
use crate::{
  kernel::{ManualScheduler, SimScheduler},
  mailbox::{MailboxOptions, ProducerExternalMailbox, SyncMailbox},
  strategy::{BridgedWait, CooperativeWait},
  time::SimTime,
};

fn sync_mailbox<T>(bound: usize) -> SyncMailbox<T> {
  Mailbox::new(bound, CooperativeWait::new(), CooperativeWait::new())
}

fn assert_counts<T, R, W>(mailbox: &Mailbox<T, R, W>)
where
  R: WaitStrategy,
  W: WaitStrategy, {
  assert_eq!(mailbox.filled() + mailbox.free(), mailbox.capacity());
}

#[test]
fn bounded_mailbox_of_two_walkthrough() {
  let mailbox = sync_mailbox::<i32>(2);

  assert_eq!(mailbox.try_put(1), Ok(()));
  assert_eq!(mailbox.try_put(2), Ok(()));
  assert_eq!(mailbox.try_put(3), Err(3));
  assert_eq!(mailbox.filled(), 2);
  assert!(mailbox.is_full());

  assert_eq!(mailbox.get().now_or_never(), Some(1));
  assert_eq!(mailbox.filled(), 1);
  assert_eq!(mailbox.try_put(3), Ok(()));
  assert_eq!(mailbox.filled(), 2);
  assert_eq!(mailbox.get().now_or_never(), Some(2));
  assert_eq!(mailbox.get().now_or_never(), Some(3));
  assert!(mailbox.is_empty());
  assert_counts(&mailbox);
}

#[test]
fn growable_mailbox_puts_never_suspend() {
  let mailbox = sync_mailbox::<u32>(0);
  for value in 0..10 {
    assert_eq!(mailbox.put(value).now_or_never(), Some(()));
    assert_counts(&mailbox);
  }
  assert!(!mailbox.is_full());

  let received: Vec<u32> = (0..10).map(|_| mailbox.get().now_or_never().unwrap()).collect();
  assert_eq!(received, (0..10).collect::<Vec<_>>());
}

#[test]
fn growth_from_a_single_slot_keeps_order() {
  let mailbox: SyncMailbox<u32> = Mailbox::with_buffer(
    MailboxOptions::unbounded().with_initial_capacity(1).ring_buffer(),
    CooperativeWait::new(),
    CooperativeWait::new(),
  );
  for value in 0..40 {
    assert_eq!(mailbox.try_put(value), Ok(()));
  }
  assert_eq!(mailbox.capacity(), 64);
  assert!((0..40).all(|expected| mailbox.try_get() == Some(expected)));
}

#[test]
fn peek_then_get_round_trip() {
  let mailbox = sync_mailbox::<&str>(4);
  mailbox.try_put("a").unwrap();
  mailbox.try_put("b").unwrap();

  let peeked = mailbox.try_peek();
  let taken = mailbox.try_get();
  assert_eq!(peeked, Some("a"));
  assert_eq!(taken, peeked);
  assert_eq!(mailbox.filled(), 1);
  assert_eq!(mailbox.peek().now_or_never(), Some("b"));
  assert_eq!(mailbox.filled(), 1);
}

#[test]
fn empty_mailbox_try_operations_return_none() {
  let mailbox = sync_mailbox::<u8>(1);
  assert_eq!(mailbox.try_get(), None);
  assert_eq!(mailbox.try_peek(), None);
  assert!(mailbox.get().now_or_never().is_none());
}

#[test]
fn blocked_putter_resumes_after_get() {
  let mut pool = LocalPool::new();
  let spawner = pool.spawner();
  let mailbox = sync_mailbox::<u32>(1);
  let log = Rc::new(RefCell::new(Vec::new()));

  {
    let mailbox = mailbox.clone();
    let log = log.clone();
    spawner
      .spawn_local(async move {
        for value in 0..3 {
          mailbox.put(value).await;
          log.borrow_mut().push(("put", value));
        }
      })
      .unwrap();
  }

  pool.run_until_stalled();
  assert_eq!(*log.borrow(), [("put", 0)]);
  assert!(mailbox.is_full());

  assert_eq!(mailbox.try_get(), Some(0));
  pool.run_until_stalled();
  assert_eq!(*log.borrow(), [("put", 0), ("put", 1)]);

  assert_eq!(mailbox.try_get(), Some(1));
  pool.run_until_stalled();
  assert_eq!(mailbox.try_get(), Some(2));
  assert_eq!(log.borrow().len(), 3);
}

#[test]
fn competing_getters_each_receive_one_value_in_order() {
  let mut pool = LocalPool::new();
  let spawner = pool.spawner();
  let mailbox = sync_mailbox::<u32>(2);
  let received = Rc::new(RefCell::new(Vec::new()));

  for getter in 0..3 {
    let mailbox = mailbox.clone();
    let received = received.clone();
    spawner
      .spawn_local(async move {
        let value = mailbox.get().await;
        received.borrow_mut().push((getter, value));
      })
      .unwrap();
  }
  pool.run_until_stalled();
  assert!(received.borrow().is_empty());

  for value in [10, 20, 30] {
    mailbox.try_put(value).unwrap();
    pool.run_until_stalled();
  }

  let values: Vec<u32> = received.borrow().iter().map(|(_, value)| *value).collect();
  assert_eq!(values, [10, 20, 30]);
  assert!(mailbox.is_empty());
}

#[test]
fn bridged_reader_resumes_only_when_the_scheduler_runs() {
  let scheduler = ManualScheduler::starting_at(SimTime::from_ticks(100));
  let mailbox: ProducerExternalMailbox<u32, ManualScheduler> =
    Mailbox::new(1, BridgedWait::new(scheduler.clone()), CooperativeWait::new());
  let mut pool = LocalPool::new();
  let received = Rc::new(RefCell::new(None));

  {
    let mailbox = mailbox.clone();
    let received = received.clone();
    let clock = scheduler.clone();
    pool
      .spawner()
      .spawn_local(async move {
        let value = mailbox.get().await;
        *received.borrow_mut() = Some((value, clock.now()));
      })
      .unwrap();
  }
  pool.run_until_stalled();

  assert_eq!(mailbox.try_put(7), Ok(()));
  assert_eq!(mailbox.reader().last_replay_at(), Some(SimTime::from_ticks(100)));
  pool.run_until_stalled();
  assert!(received.borrow().is_none());

  scheduler.advance_to(SimTime::from_ticks(120));
  pool.run_until_stalled();
  let (value, resumed_at) = received.borrow().unwrap();
  assert_eq!(value, 7);
  assert!(resumed_at >= SimTime::from_ticks(100));
}
