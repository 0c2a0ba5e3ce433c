use std::{
  cell::RefCell,
  rc::Rc,
  sync::mpsc,
  thread,
  time::Duration,
};

use simlink_mailbox_core_rs::{MailboxOptions, SimDuration, SimTime};
use simlink_mailbox_std_rs::{ExternalPort, KernelConfig, SimKernel};

fn kernel() -> SimKernel {
  SimKernel::with_config(KernelConfig::new().with_idle_timeout(Duration::from_secs(10)))
}

#[test]
fn external_put_never_resumes_a_reader_before_its_time_stamp() {
  let mut kernel = kernel();
  let handle = kernel.handle();
  let mailbox = handle.mailbox_factory().producer_external::<u32>(MailboxOptions::with_capacity(4));
  let port = ExternalPort::new(mailbox.clone());
  let received = Rc::new(RefCell::new(Vec::new()));
  let (go_tx, go_rx) = mpsc::channel::<()>();

  {
    let received = received.clone();
    let handle = handle.clone();
    kernel.spawn(async move {
      for _ in 0..3 {
        let value = mailbox.get().await;
        received.borrow_mut().push((value, handle.now()));
      }
    });
  }
  {
    let handle = handle.clone();
    kernel.spawn(async move {
      handle.sleep_until(SimTime::from_ticks(100)).await;
      go_tx.send(()).unwrap();
    });
  }

  let producer = {
    let handle = handle.clone();
    thread::spawn(move || {
      go_rx.recv().unwrap();
      let stamp = handle.now();
      port.try_put(7).unwrap();
      port.put(8);
      port.put(9);
      (stamp, port.mailbox().reader().last_replay_at())
    })
  };

  kernel.run().unwrap();
  let (stamp, last_replay) = producer.join().unwrap();

  assert_eq!(stamp, SimTime::from_ticks(100));
  assert!(last_replay.is_some_and(|at| at >= stamp));
  let received = received.borrow();
  assert_eq!(received.iter().map(|(value, _)| *value).collect::<Vec<_>>(), [7, 8, 9]);
  assert!(received.iter().all(|(_, resumed_at)| *resumed_at >= stamp));
}

#[test]
fn external_consumer_drains_a_bounded_mailbox() {
  let mut kernel = kernel();
  let handle = kernel.handle();
  let mailbox = handle.mailbox_factory().consumer_external::<u32>(MailboxOptions::with_capacity(2));
  let port = ExternalPort::new(mailbox.clone());
  let put_times = Rc::new(RefCell::new(Vec::new()));

  {
    let put_times = put_times.clone();
    let handle = handle.clone();
    kernel.spawn(async move {
      for value in 0..5 {
        handle.sleep(SimDuration::from_ticks(5)).await;
        mailbox.put(value).await;
        put_times.borrow_mut().push(handle.now().ticks());
      }
    });
  }

  let consumer = thread::spawn(move || (0..5).map(|_| port.get()).collect::<Vec<_>>());

  kernel.run().unwrap();
  assert_eq!(consumer.join().unwrap(), [0, 1, 2, 3, 4]);

  let put_times = put_times.borrow();
  assert_eq!(put_times.len(), 5);
  assert!(put_times.windows(2).all(|pair| pair[0] < pair[1]));
  assert_eq!(put_times[0], 5);
}

#[test]
fn notifications_after_the_kernel_is_gone_are_dropped() {
  let kernel = kernel();
  let handle = kernel.handle();
  let mailbox = handle.mailbox_factory().producer_external::<u32>(MailboxOptions::with_capacity(1));
  drop(kernel);

  assert!(handle.is_stopped());
  assert_eq!(mailbox.try_put(1), Ok(()));
  assert_eq!(mailbox.reader().last_replay_at(), None);
  assert_eq!(mailbox.try_get(), Some(1));
}
