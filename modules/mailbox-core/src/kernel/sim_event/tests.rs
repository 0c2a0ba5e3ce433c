use core::{
  future::Future,
  pin::Pin,
  sync::atomic::{AtomicUsize, Ordering},
  task::{Context, Poll},
};
use std::sync::Arc;

use futures::task::{noop_waker, waker, ArcWake};

use super::*;

struct CountingWaker(AtomicUsize);

impl ArcWake for CountingWaker {
  fn wake_by_ref(arc_self: &Arc<Self>) {
    arc_self.0.fetch_add(1, Ordering::SeqCst);
  }
}

fn poll_once(wait: &mut EventWait, cx: &mut Context<'_>) -> Poll<()> {
  Pin::new(wait).poll(cx)
}

#[test]
fn notify_before_first_poll_is_not_lost() {
  let event = SimEvent::new();
  let mut wait = event.listen();
  event.notify();

  let waker = noop_waker();
  let mut cx = Context::from_waker(&waker);
  assert!(wait.is_notified());
  assert_eq!(poll_once(&mut wait, &mut cx), Poll::Ready(()));
}

#[test]
fn notify_wakes_every_registered_waiter() {
  let event = SimEvent::new();
  let counter = Arc::new(CountingWaker(AtomicUsize::new(0)));
  let waker = waker(counter.clone());
  let mut cx = Context::from_waker(&waker);

  let mut first = event.listen();
  let mut second = event.listen();
  assert!(poll_once(&mut first, &mut cx).is_pending());
  assert!(poll_once(&mut second, &mut cx).is_pending());
  assert_eq!(event.waiter_count(), 2);

  event.notify();
  assert_eq!(counter.0.load(Ordering::SeqCst), 2);
  assert_eq!(event.waiter_count(), 0);
  assert!(poll_once(&mut first, &mut cx).is_ready());
  assert!(poll_once(&mut second, &mut cx).is_ready());
}

#[test]
fn repolling_keeps_a_single_registration() {
  let event = SimEvent::new();
  let waker = noop_waker();
  let mut cx = Context::from_waker(&waker);

  let mut wait = event.listen();
  for _ in 0..3 {
    assert!(poll_once(&mut wait, &mut cx).is_pending());
  }
  assert_eq!(event.waiter_count(), 1);
}

#[test]
fn dropping_a_pending_wait_deregisters_it() {
  let event = SimEvent::new();
  let waker = noop_waker();
  let mut cx = Context::from_waker(&waker);

  let mut kept = event.listen();
  let mut dropped = event.listen();
  assert!(poll_once(&mut kept, &mut cx).is_pending());
  assert!(poll_once(&mut dropped, &mut cx).is_pending());
  drop(dropped);

  assert_eq!(event.waiter_count(), 1);
  event.notify();
  assert!(poll_once(&mut kept, &mut cx).is_ready());
}

#[test]
fn wait_armed_after_notify_stays_pending() {
  let event = SimEvent::new();
  event.notify();
  let mut wait = event.listen();

  let waker = noop_waker();
  let mut cx = Context::from_waker(&waker);
  assert!(poll_once(&mut wait, &mut cx).is_pending());
  assert_eq!(event.epoch(), 1);
}
