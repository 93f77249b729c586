use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ChannelId, FieldKey, Fields, MessageId, MessageKind, ProcessId, Value};

////////////////////////////////////////////////////////////////////////////////

/// Represents message header.
///
/// The header is stamped by the engine when the message is sent,
/// so values set by the user before sending are overwritten.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    /// Unique message id.
    pub id: MessageId,
    /// Sender process.
    pub source: ProcessId,
    /// Receiver process.
    pub dest: ProcessId,
    /// Channel the message travels on.
    pub channel: ChannelId,
    /// Snapshot round of the sender at send time.
    pub round: u32,
    /// Lamport clock of the sender at send time.
    pub logical_clock: u64,
}

////////////////////////////////////////////////////////////////////////////////

/// Represents message, which is used by processes to communicate
/// with each other through channels.
///
/// Payload is serialized with [`serde_json`], so any [`Serialize`] type can be passed
/// and read back with [`Message::data`]. Piggy-back [fields][Fields] are kept apart
/// from the payload, so protocols can stamp them without knowing the payload type.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Message {
    header: Header,
    kind: MessageKind,
    data: String,
    #[serde(default, skip_serializing_if = "Fields::is_empty")]
    fields: Fields,
}

impl Message {
    /// Create a new message with specified kind and data, which will be serialized and passed
    /// inside of the message.
    pub fn new<T>(kind: MessageKind, data: &T) -> serde_json::Result<Self>
    where
        T: Serialize,
    {
        serde_json::to_string(data).map(|data| Self {
            header: Header::default(),
            kind,
            data,
            fields: Fields::new(),
        })
    }

    /// Create a new message with specified kind and already serialized data.
    pub fn new_raw(kind: MessageKind, data: &str) -> Self {
        Self {
            header: Header::default(),
            kind,
            data: data.to_owned(),
            fields: Fields::new(),
        }
    }

    /// Create a new message without payload.
    pub fn empty(kind: MessageKind) -> Self {
        Self::new_raw(kind, "null")
    }

    /// Returns the same message with the field set.
    pub fn with_field(mut self, key: FieldKey, value: impl Into<Value>) -> Self {
        self.fields.insert(key, value.into());
        self
    }

    /// Get message kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Get message header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Get message id.
    pub fn id(&self) -> MessageId {
        self.header.id
    }

    /// Get sender process.
    pub fn source(&self) -> ProcessId {
        self.header.source
    }

    /// Get receiver process.
    pub fn dest(&self) -> ProcessId {
        self.header.dest
    }

    /// Get channel the message was sent on.
    pub fn channel(&self) -> ChannelId {
        self.header.channel
    }

    /// Get sender round at send time.
    pub fn round(&self) -> u32 {
        self.header.round
    }

    /// Get sender logical clock at send time.
    pub fn logical_clock(&self) -> u64 {
        self.header.logical_clock
    }

    /// Get message's raw data.
    pub fn raw_data(&self) -> &str {
        &self.data
    }

    /// Returns deserialized message's data of template type,
    /// which must implement [`Deserialize`] trait.
    pub fn data<'a, T>(&'a self) -> serde_json::Result<T>
    where
        T: Deserialize<'a>,
    {
        serde_json::from_str(&self.data)
    }

    /// Get piggy-back field.
    pub fn field(&self, key: &FieldKey) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get all piggy-back fields.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Set piggy-back field, replacing the previous value.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<Value>) {
        self.fields.insert(key, value.into());
    }

    /// Returns the [`FieldKey::Flag`] field, `false` if it is absent.
    pub fn flag(&self) -> bool {
        self.field(&FieldKey::Flag)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Stamp the header. Called by the engine when the message is sent.
    pub fn stamp(&mut self, header: Header) {
        self.header = header;
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        write!(
            f,
            "{} {} {}->{} via {} r{} t{} {}",
            header.id,
            self.kind,
            header.source,
            header.dest,
            header.channel,
            header.round,
            header.logical_clock,
            self.data
        )?;
        for (key, value) in &self.fields {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}
