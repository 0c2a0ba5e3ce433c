mod channel_observer;
mod external_port;

pub use channel_observer::ChannelObserver;
pub use external_port::ExternalPort;
