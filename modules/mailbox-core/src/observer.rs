mod access_announcement;
mod access_observer;
mod mailbox_access;
mod no_observer;
mod recording_observer;

pub use access_announcement::AccessAnnouncement;
pub use access_observer::AccessObserver;
pub use mailbox_access::MailboxAccess;
pub use no_observer::NoObserver;
pub use recording_observer::RecordingObserver;
