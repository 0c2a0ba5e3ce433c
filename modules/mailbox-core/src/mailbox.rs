mod mailbox_config_error;
mod mailbox_factory;
mod mailbox_impl;
mod mailbox_kind;
mod mailbox_options;
mod variants;

pub use mailbox_config_error::MailboxConfigError;
pub use mailbox_factory::MailboxFactory;
pub use mailbox_impl::Mailbox;
pub use mailbox_kind::MailboxKind;
pub use mailbox_options::MailboxOptions;
pub use variants::{ConsumerExternalMailbox, DynamicMailbox, ObservedMailbox, ProducerExternalMailbox, SyncMailbox};
