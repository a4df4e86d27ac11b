//! Base message types.
//!
//! This module contains the unified [`Message`] enum and the [`HasId`] trait
//! that the graph runtime's merge reducer is written against.

use serde::{Deserialize, Serialize};

use super::assistant::AssistantMessage;
use super::system::SystemMessage;
use super::user::UserMessage;

/// A unified message type that can represent any message role.
///
/// The serde representation tags each record with its `role`, so a transcript
/// serializes to the familiar `[{"role": "user", "content": "..."}, ...]`
/// shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role")]
pub enum Message {
    /// A message authored by the end user.
    #[serde(rename = "user")]
    User(UserMessage),
    /// A reply produced by the workflow.
    #[serde(rename = "assistant")]
    Assistant(AssistantMessage),
    /// A system message priming the conversation.
    #[serde(rename = "system")]
    System(SystemMessage),
}

impl Message {
    /// Get the message content.
    pub fn content(&self) -> &str {
        match self {
            Message::User(m) => m.content(),
            Message::Assistant(m) => m.content(),
            Message::System(m) => m.content(),
        }
    }

    /// Get the message ID.
    pub fn id(&self) -> Option<&str> {
        match self {
            Message::User(m) => m.id(),
            Message::Assistant(m) => m.id(),
            Message::System(m) => m.id(),
        }
    }

    /// Get the message name if present.
    pub fn name(&self) -> Option<&str> {
        match self {
            Message::User(m) => m.name(),
            Message::Assistant(m) => m.name(),
            Message::System(m) => m.name(),
        }
    }

    /// Get the message role as a string.
    pub fn role(&self) -> &'static str {
        match self {
            Message::User(_) => "user",
            Message::Assistant(_) => "assistant",
            Message::System(_) => "system",
        }
    }
}

impl From<UserMessage> for Message {
    fn from(msg: UserMessage) -> Self {
        Message::User(msg)
    }
}

impl From<AssistantMessage> for Message {
    fn from(msg: AssistantMessage) -> Self {
        Message::Assistant(msg)
    }
}

impl From<SystemMessage> for Message {
    fn from(msg: SystemMessage) -> Self {
        Message::System(msg)
    }
}

/// Trait for types that have an optional ID.
/// Used for message merging operations.
pub trait HasId {
    /// Get the ID if present.
    fn get_id(&self) -> Option<&str>;
}

impl HasId for Message {
    fn get_id(&self) -> Option<&str> {
        self.id()
    }
}

impl HasId for UserMessage {
    fn get_id(&self) -> Option<&str> {
        self.id()
    }
}

impl HasId for AssistantMessage {
    fn get_id(&self) -> Option<&str> {
        self.id()
    }
}

impl HasId for SystemMessage {
    fn get_id(&self) -> Option<&str> {
        self.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_accessors() {
        let user: Message = UserMessage::new("hi").into();
        let assistant: Message = AssistantMessage::new("hello").into();
        let system: Message = SystemMessage::new("be terse").into();

        assert_eq!(user.role(), "user");
        assert_eq!(assistant.role(), "assistant");
        assert_eq!(system.role(), "system");
        assert_eq!(user.content(), "hi");
        assert_eq!(assistant.id(), None);
    }

    #[test]
    fn test_serde_wire_shape() {
        let msg: Message = UserMessage::new("hi").into();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "hi");
        assert!(value.get("id").is_none());
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let msg: Message = AssistantMessage::with_id("m-1", "hello")
            .with_name("bot")
            .into();
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_has_id() {
        let without: Message = UserMessage::new("hi").into();
        let with: Message = UserMessage::with_id("u-1", "hi").into();
        assert_eq!(without.get_id(), None);
        assert_eq!(with.get_id(), Some("u-1"));
    }
}
