use std::{
  cmp::Ordering as CmpOrdering,
  collections::{BinaryHeap, VecDeque},
  future::Future,
  pin::Pin,
  sync::{
    atomic::{AtomicBool, Ordering},
    Condvar, Mutex, MutexGuard,
  },
};

use simlink_mailbox_core_rs::{AtomicSimTime, ScheduleError, ScheduledCallback, SimTime};

pub(crate) type SendProcess = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

pub(crate) struct TimerEntry {
  pub(crate) at:       SimTime,
  pub(crate) seq:      u64,
  pub(crate) callback: ScheduledCallback,
}

impl PartialEq for TimerEntry {
  fn eq(&self, other: &Self) -> bool {
    self.at == other.at && self.seq == other.seq
  }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
  fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
    Some(self.cmp(other))
  }
}

impl Ord for TimerEntry {
  // Reversed so the `BinaryHeap` pops the earliest (time, sequence) first.
  fn cmp(&self, other: &Self) -> CmpOrdering {
    (other.at, other.seq).cmp(&(self.at, self.seq))
  }
}

#[derive(Default)]
pub(crate) struct Inbox {
  pub(crate) timers:       BinaryHeap<TimerEntry>,
  pub(crate) ready:        VecDeque<usize>,
  pub(crate) spawned:      Vec<(usize, SendProcess)>,
  pub(crate) next_seq:     u64,
  pub(crate) next_process: usize,
}

impl Inbox {
  pub(crate) fn is_idle(&self) -> bool {
    self.ready.is_empty() && self.spawned.is_empty() && self.timers.is_empty()
  }

  pub(crate) fn allocate_process(&mut self) -> usize {
    let id = self.next_process;
    self.next_process += 1;
    id
  }
}

/// State reachable from every [`KernelHandle`](super::KernelHandle) and task waker.
pub(crate) struct KernelShared {
  pub(crate) now:     AtomicSimTime,
  pub(crate) stopped: AtomicBool,
  pub(crate) inbox:   Mutex<Inbox>,
  pub(crate) signal:  Condvar,
}

impl KernelShared {
  pub(crate) fn new() -> Self {
    Self {
      now:     AtomicSimTime::new(SimTime::ZERO),
      stopped: AtomicBool::new(false),
      inbox:   Mutex::new(Inbox::default()),
      signal:  Condvar::new(),
    }
  }

  pub(crate) fn lock_inbox(&self) -> MutexGuard<'_, Inbox> {
    self.inbox.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  pub(crate) fn is_stopped(&self) -> bool {
    self.stopped.load(Ordering::Acquire)
  }

  pub(crate) fn wake(&self, id: usize) {
    self.lock_inbox().ready.push_back(id);
    self.signal.notify_all();
  }

  pub(crate) fn schedule(&self, at: SimTime, callback: ScheduledCallback) -> Result<(), ScheduleError> {
    if self.is_stopped() {
      return Err(ScheduleError::Stopped);
    }
    let mut inbox = self.lock_inbox();
    let at = at.max(self.now.load());
    let seq = inbox.next_seq;
    inbox.next_seq += 1;
    inbox.timers.push(TimerEntry { at, seq, callback });
    drop(inbox);
    self.signal.notify_all();
    Ok(())
  }

  pub(crate) fn spawn(&self, process: SendProcess) -> usize {
    let mut inbox = self.lock_inbox();
    let id = inbox.allocate_process();
    inbox.spawned.push((id, process));
    inbox.ready.push_back(id);
    drop(inbox);
    self.signal.notify_all();
    id
  }

  pub(crate) fn stop(&self) {
    self.stopped.store(true, Ordering::Release);
    let dropped = {
      let mut inbox = self.lock_inbox();
      std::mem::take(&mut inbox.timers)
    };
    self.signal.notify_all();
    tracing::debug!(dropped_timers = dropped.len(), at = %self.now.load(), "simulation kernel stopped");
  }
}
