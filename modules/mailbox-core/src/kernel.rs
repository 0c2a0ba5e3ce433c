mod manual_scheduler;
mod schedule_error;
mod sim_event;
mod sim_scheduler;

pub use manual_scheduler::ManualScheduler;
pub use schedule_error::ScheduleError;
pub use sim_event::{EventWait, SimEvent};
pub use sim_scheduler::{ScheduledCallback, SimScheduler};
