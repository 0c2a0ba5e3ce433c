mod announced_wait;
mod any_wait;
mod bridged_wait;
mod cooperative_wait;
mod wait_strategy;

pub use announced_wait::AnnouncedWait;
pub use any_wait::AnyWait;
pub use bridged_wait::BridgedWait;
pub use cooperative_wait::CooperativeWait;
pub use wait_strategy::WaitStrategy;
