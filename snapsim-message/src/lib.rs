//! Message envelope exchanged by simulated processes.
//!
//! The crate is shared by the simulation engine and by protocols,
//! so it knows nothing about delivery: it only defines identifiers,
//! the closed set of [message kinds][`MessageKind`], piggy-back [fields][`Fields`]
//! and the [`Message`] itself.

#![warn(missing_docs)]

mod id;
mod kind;
mod message;
mod value;

pub use id::{ChannelId, MessageId, ProcessId};
pub use kind::MessageKind;
pub use message::{Header, Message};
pub use value::{FieldKey, Fields, Value};

#[cfg(test)]
mod tests;
