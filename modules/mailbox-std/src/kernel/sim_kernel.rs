use std::{
  collections::BTreeMap,
  future::Future,
  pin::Pin,
  sync::Arc,
  task::{Context, Waker},
};

use simlink_mailbox_core_rs::SimTime;

use super::{
  shared::{KernelShared, TimerEntry},
  task_waker::TaskWaker,
  KernelConfig, KernelError, KernelHandle, ProcessId,
};


type LocalProcess = Pin<Box<dyn Future<Output = ()> + 'static>>;

struct Process {
  future: LocalProcess,
  waker:  Arc<TaskWaker>,
}

enum Step {
  Poll(usize),
  Fire(TimerEntry),
  Idle,
}

/// Deterministic discrete-event kernel.
///
/// Processes are futures polled one at a time on the thread that owns the kernel. Each step
/// either polls one woken process (in wake order) or, when none is runnable, fires the earliest
/// timer (ties in queue order), moving the simulated clock to the timer's time first. Runnable
/// processes therefore always finish their work at the current time before the clock advances.
///
/// Other threads interact through a [`KernelHandle`]: their callbacks land in the timer queue and
/// their wake-ups in the ready queue, so every effect they have is observed from the kernel's
/// thread at a well-defined simulated time.
pub struct SimKernel {
  shared:    Arc<KernelShared>,
  processes: BTreeMap<usize, Process>,
  config:    KernelConfig,
  steps:     u64,
}

impl SimKernel {
  /// Creates a kernel with the default configuration.
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(KernelConfig::default())
  }

  /// Creates a kernel with `config`.
  #[must_use]
  pub fn with_config(config: KernelConfig) -> Self {
    Self { shared: Arc::new(KernelShared::new()), processes: BTreeMap::new(), config, steps: 0 }
  }

  /// Handle usable from any thread.
  #[must_use]
  pub fn handle(&self) -> KernelHandle {
    KernelHandle::new(self.shared.clone())
  }

  /// Current simulated time.
  #[must_use]
  pub fn now(&self) -> SimTime {
    self.shared.now.load()
  }

  /// Runtime limits in use.
  #[must_use]
  pub const fn config(&self) -> &KernelConfig {
    &self.config
  }

  /// Steps executed so far.
  #[must_use]
  pub const fn steps(&self) -> u64 {
    self.steps
  }

  /// Number of processes that have not finished.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.processes.len() + self.shared.lock_inbox().spawned.len()
  }

  /// Returns `true` when the process has run to completion.
  #[must_use]
  pub fn is_finished(&self, id: ProcessId) -> bool {
    let inbox = self.shared.lock_inbox();
    id.0 < inbox.next_process
      && !self.processes.contains_key(&id.0)
      && !inbox.spawned.iter().any(|(spawned, _)| *spawned == id.0)
  }

  /// Adds a process owned by this thread. It starts on the next step.
  pub fn spawn<F>(&mut self, process: F) -> ProcessId
  where
    F: Future<Output = ()> + 'static, {
    let id = {
      let mut inbox = self.shared.lock_inbox();
      let id = inbox.allocate_process();
      inbox.ready.push_back(id);
      id
    };
    self.processes.insert(id, Process { future: Box::pin(process), waker: Arc::new(TaskWaker::new(id, &self.shared)) });
    tracing::trace!(process = id, "process spawned");
    ProcessId(id)
  }

  /// Runs until no process is runnable and no timer is queued, without waiting for other
  /// threads. Returns the number of steps taken.
  ///
  /// # Errors
  ///
  /// Returns [`KernelError::StepLimit`] when the configured step limit is reached.
  pub fn run_until_idle(&mut self) -> Result<u64, KernelError> {
    let start = self.steps;
    while self.step(None)? {}
    Ok(self.steps - start)
  }

  /// Runs every event up to and including `deadline`, then moves the clock to `deadline`.
  ///
  /// Does not wait for other threads.
  ///
  /// # Errors
  ///
  /// Returns [`KernelError::StepLimit`] when the configured step limit is reached.
  pub fn run_until(&mut self, deadline: SimTime) -> Result<(), KernelError> {
    while !self.shared.is_stopped() && self.step(Some(deadline))? {}
    self.advance_clock(deadline);
    Ok(())
  }

  /// Runs until every process has finished or the kernel is stopped.
  ///
  /// When processes remain suspended with nothing runnable and no timer queued, the kernel blocks
  /// for up to [`KernelConfig::idle_timeout`] of wall-clock time waiting for another thread to
  /// wake a process or queue a callback.
  ///
  /// # Errors
  ///
  /// Returns [`KernelError::Stalled`] when that wait times out, and
  /// [`KernelError::StepLimit`] when the configured step limit is reached.
  pub fn run(&mut self) -> Result<(), KernelError> {
    loop {
      if self.shared.is_stopped() {
        return Ok(());
      }
      if self.step(None)? {
        continue;
      }
      let pending = self.pending();
      if pending == 0 {
        tracing::debug!(at = %self.now(), steps = self.steps, "simulation finished");
        return Ok(());
      }
      if !self.wait_for_external_wake() {
        let error = KernelError::Stalled { pending, at: self.now() };
        tracing::warn!(%error, "giving up on suspended processes");
        return Err(error);
      }
    }
  }

  fn step(&mut self, horizon: Option<SimTime>) -> Result<bool, KernelError> {
    let next = {
      let mut inbox = self.shared.lock_inbox();
      for (id, future) in inbox.spawned.drain(..) {
        let waker = Arc::new(TaskWaker::new(id, &self.shared));
        self.processes.insert(id, Process { future, waker });
      }
      let timer_due = inbox.timers.peek().is_some_and(|timer| horizon.map_or(true, |horizon| timer.at <= horizon));
      if inbox.ready.is_empty() && !timer_due {
        return Ok(false);
      }
      if let Some(limit) = self.config.max_steps {
        if self.steps >= limit {
          return Err(KernelError::StepLimit { steps: self.steps });
        }
      }
      match inbox.ready.pop_front() {
        | Some(id) => Step::Poll(id),
        | None => inbox.timers.pop().map_or(Step::Idle, Step::Fire),
      }
    };

    self.steps += 1;

    match next {
      | Step::Poll(id) => self.poll_process(id),
      | Step::Fire(timer) => {
        self.advance_clock(timer.at);
        (timer.callback)();
      },
      | Step::Idle => {},
    }
    Ok(true)
  }

  fn poll_process(&mut self, id: usize) {
    let Some(process) = self.processes.get_mut(&id) else {
      return;
    };
    process.waker.begin_poll();
    let waker = Waker::from(process.waker.clone());
    let mut cx = Context::from_waker(&waker);
    if process.future.as_mut().poll(&mut cx).is_ready() {
      self.processes.remove(&id);
      tracing::trace!(process = id, at = %self.now(), "process finished");
    }
  }

  fn advance_clock(&self, to: SimTime) {
    let before = self.now();
    let after = self.shared.now.advance_to(to);
    if after > before {
      tracing::debug!(from = %before, to = %after, "simulated time advanced");
    }
  }

  fn wait_for_external_wake(&self) -> bool {
    let inbox = self.shared.lock_inbox();
    let (inbox, _) = self
      .shared
      .signal
      .wait_timeout_while(inbox, self.config.idle_timeout, |inbox| inbox.is_idle() && !self.shared.is_stopped())
      .unwrap_or_else(|poisoned| poisoned.into_inner());
    !inbox.is_idle() || self.shared.is_stopped()
  }
}

impl Default for SimKernel {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for SimKernel {
  fn drop(&mut self) {
    if !self.shared.is_stopped() {
      self.shared.stop();
    }
  }
}

impl std::fmt::Debug for SimKernel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SimKernel")
      .field("now", &self.now())
      .field("processes", &self.processes.len())
      .field("steps", &self.steps)
      .finish()
  }
}
