//! Conversion helpers for message transcripts.

use serde_json::Value;

use super::base::Message;
use crate::error::{Error, Result};

/// Render a transcript as a newline-separated `Role: content` buffer.
///
/// The user and assistant prefixes are caller-supplied so UIs can relabel the
/// two speaking parties; system messages always render as `System`.
pub fn get_buffer_string(messages: &[Message], user_prefix: &str, assistant_prefix: &str) -> String {
    messages
        .iter()
        .map(|m| {
            let role = match m {
                Message::User(_) => user_prefix,
                Message::Assistant(_) => assistant_prefix,
                Message::System(_) => "System",
            };
            format!("{}: {}", role, m.content())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a message to its dictionary representation.
pub fn message_to_dict(message: &Message) -> Value {
    serde_json::to_value(message).unwrap_or_default()
}

/// Convert a sequence of messages to a list of dictionaries.
pub fn messages_to_dict(messages: &[Message]) -> Vec<Value> {
    messages.iter().map(message_to_dict).collect()
}

/// Convert a dictionary representation back into a message.
///
/// A record with a role outside the supported set yields
/// [`Error::UnknownRole`]; a record with no `role` field at all is rejected
/// before deserialization so the caller gets a clear message.
pub fn message_from_dict(value: Value) -> Result<Message> {
    match value.get("role").and_then(Value::as_str) {
        Some("user" | "assistant" | "system") => Ok(serde_json::from_value(value)?),
        Some(role) => Err(Error::unknown_role(role)),
        None => Err(Error::other("message record has no role field")),
    }
}

/// Convert a list of dictionaries back into messages.
pub fn messages_from_dict(values: Vec<Value>) -> Result<Vec<Message>> {
    values.into_iter().map(message_from_dict).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{AssistantMessage, SystemMessage, UserMessage};

    #[test]
    fn test_get_buffer_string() {
        let messages = vec![
            Message::System(SystemMessage::new("be brief")),
            Message::User(UserMessage::new("hi")),
            Message::Assistant(AssistantMessage::new("hello")),
        ];
        let buffer = get_buffer_string(&messages, "Human", "AI");
        assert_eq!(buffer, "System: be brief\nHuman: hi\nAI: hello");
    }

    #[test]
    fn test_dict_round_trip() {
        let messages = vec![
            Message::User(UserMessage::with_id("u-1", "hi")),
            Message::Assistant(AssistantMessage::new("hello")),
        ];
        let dicts = messages_to_dict(&messages);
        let back = messages_from_dict(dicts).unwrap();
        assert_eq!(back, messages);
    }

    #[test]
    fn test_message_from_dict_unknown_role() {
        let value = serde_json::json!({"role": "tool", "content": "output"});
        let err = message_from_dict(value).unwrap_err();
        assert!(matches!(err, Error::UnknownRole(role) if role == "tool"));
    }

    #[test]
    fn test_message_from_dict_missing_role() {
        let value = serde_json::json!({"content": "orphan"});
        assert!(message_from_dict(value).is_err());
    }
}
