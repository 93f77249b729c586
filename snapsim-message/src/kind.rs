use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents message kind.
///
/// The set of kinds is closed, so hook triggers compare kinds by value.
/// Ordinary application traffic uses [`MessageKind::Application`] with
/// an application-chosen tag, the remaining kinds are snapshot control messages.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Application message with the given tag.
    Application(u16),
    /// Snapshot marker.
    Marker,
    /// Snapshot report flooded back to the initiator.
    Report,
    /// Pre-snapshot announcement carrying the number of messages sent before the cut.
    Presnp,
}

impl MessageKind {
    /// Returns `true` for ordinary application traffic.
    pub fn is_application(self) -> bool {
        matches!(self, MessageKind::Application(_))
    }
}

impl Default for MessageKind {
    fn default() -> Self {
        MessageKind::Application(0)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Application(tag) => write!(f, "app#{tag}"),
            MessageKind::Marker => f.write_str("marker"),
            MessageKind::Report => f.write_str("report"),
            MessageKind::Presnp => f.write_str("presnp"),
        }
    }
}
