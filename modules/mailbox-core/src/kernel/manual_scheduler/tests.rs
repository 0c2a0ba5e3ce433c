use alloc::{boxed::Box, vec, vec::Vec};
use std::sync::{Arc, Mutex};

use super::*;

fn recorder() -> (Arc<Mutex<Vec<(u64, &'static str)>>>, impl Fn(&ManualScheduler, u64, &'static str)) {
  let log = Arc::new(Mutex::new(Vec::new()));
  let sink = log.clone();
  let push = move |scheduler: &ManualScheduler, at: u64, label: &'static str| {
    let sink = sink.clone();
    let clock = scheduler.clone();
    scheduler
      .schedule_at(
        SimTime::from_ticks(at),
        Box::new(move || sink.lock().unwrap().push((clock.now().ticks(), label))),
      )
      .unwrap();
  };
  (log, push)
}

#[test]
fn callbacks_run_in_time_then_queue_order() {
  let scheduler = ManualScheduler::new();
  let (log, schedule) = recorder();
  schedule(&scheduler, 20, "late");
  schedule(&scheduler, 10, "first");
  schedule(&scheduler, 10, "second");

  assert_eq!(scheduler.advance_to(SimTime::from_ticks(15)), 2);
  assert_eq!(scheduler.now(), SimTime::from_ticks(15));
  assert_eq!(scheduler.pending(), 1);

  scheduler.advance_by(SimDuration::from_ticks(10));
  assert_eq!(*log.lock().unwrap(), vec![(10, "first"), (10, "second"), (20, "late")]);
}

#[test]
fn past_times_run_at_the_current_time() {
  let scheduler = ManualScheduler::starting_at(SimTime::from_ticks(50));
  let (log, schedule) = recorder();
  schedule(&scheduler, 5, "stale");

  assert_eq!(scheduler.run_due(), 1);
  assert_eq!(*log.lock().unwrap(), vec![(50, "stale")]);
}

#[test]
fn stopped_scheduler_rejects_callbacks() {
  let scheduler = ManualScheduler::new();
  let (_log, schedule) = recorder();
  schedule(&scheduler, 1, "dropped");
  scheduler.stop();

  assert_eq!(scheduler.pending(), 0);
  let result = scheduler.schedule_at(SimTime::ZERO, Box::new(|| {}));
  assert_eq!(result, Err(ScheduleError::Stopped));
}
