mod atomic_sim_time;
mod sim_duration;
mod sim_time;


pub use atomic_sim_time::AtomicSimTime;
pub use sim_duration::SimDuration;
pub use sim_time::SimTime;
