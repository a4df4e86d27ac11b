use async_trait::async_trait;
use std::fmt::Display;

use crate::messages::{AssistantMessage, Message, UserMessage, get_buffer_string};

/// Contract for append-only conversation transcript containers.
///
/// Implementations own the transcript storage; the trait only ever appends or
/// clears, never edits a stored record.
#[async_trait]
pub trait ChatHistory: Send + Sync {
    fn messages(&self) -> Vec<Message>;

    async fn get_messages_async(&self) -> Vec<Message> {
        self.messages()
    }

    fn add_user_message(&mut self, message: UserMessage) {
        self.add_message(Message::User(message));
    }

    fn add_assistant_message(&mut self, message: AssistantMessage) {
        self.add_message(Message::Assistant(message));
    }

    fn add_message(&mut self, message: Message) {
        self.add_messages(&[message]);
    }

    fn add_messages(&mut self, messages: &[Message]);

    async fn add_messages_async(&mut self, messages: Vec<Message>) {
        self.add_messages(&messages);
    }

    fn clear(&mut self);

    async fn clear_async(&mut self) {
        self.clear();
    }

    fn to_buffer_string(&self) -> String {
        get_buffer_string(&self.messages(), "User", "Assistant")
    }
}

/// Transcript container backed by a plain `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatHistory {
    messages: Vec<Message>,
}

impl InMemoryChatHistory {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl Display for InMemoryChatHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_buffer_string())
    }
}

#[async_trait]
impl ChatHistory for InMemoryChatHistory {
    fn messages(&self) -> Vec<Message> {
        self.messages.clone()
    }

    fn add_messages(&mut self, messages: &[Message]) {
        self.messages.extend(messages.iter().cloned());
    }

    fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_empty() {
        let history = InMemoryChatHistory::new();
        assert!(history.messages().is_empty());
    }

    #[test]
    fn test_with_messages() {
        let messages = vec![
            Message::User(UserMessage::new("Hello")),
            Message::Assistant(AssistantMessage::new("Hi there!")),
        ];
        let history = InMemoryChatHistory::with_messages(messages);
        assert_eq!(history.messages().len(), 2);
    }

    #[test]
    fn test_add_user_message() {
        let mut history = InMemoryChatHistory::new();
        history.add_user_message(UserMessage::new("Hello!"));

        let messages = history.messages();
        assert_eq!(messages.len(), 1);
        assert!(matches!(&messages[0], Message::User(_)));
        assert_eq!(messages[0].content(), "Hello!");
    }

    #[test]
    fn test_add_assistant_message() {
        let mut history = InMemoryChatHistory::new();
        history.add_assistant_message(AssistantMessage::new("Hi there!"));

        let messages = history.messages();
        assert_eq!(messages.len(), 1);
        assert!(matches!(&messages[0], Message::Assistant(_)));
    }

    #[test]
    fn test_add_messages_preserves_order() {
        let mut history = InMemoryChatHistory::new();
        history.add_messages(&[
            Message::User(UserMessage::new("Hello")),
            Message::Assistant(AssistantMessage::new("Hi")),
            Message::User(UserMessage::new("How are you?")),
        ]);

        let messages = history.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content(), "How are you?");
    }

    #[test]
    fn test_clear() {
        let mut history = InMemoryChatHistory::new();
        history.add_user_message(UserMessage::new("Hello!"));
        history.add_assistant_message(AssistantMessage::new("Hi!"));
        assert_eq!(history.messages().len(), 2);

        history.clear();
        assert!(history.messages().is_empty());
    }

    #[test]
    fn test_display() {
        let mut history = InMemoryChatHistory::new();
        history.add_user_message(UserMessage::new("Hello!"));
        history.add_assistant_message(AssistantMessage::new("Hi there!"));

        let display = format!("{}", history);
        assert!(display.contains("User: Hello!"));
        assert!(display.contains("Assistant: Hi there!"));
    }

    #[tokio::test]
    async fn test_async_defaults() {
        let mut history = InMemoryChatHistory::new();
        history
            .add_messages_async(vec![Message::User(UserMessage::new("Hello"))])
            .await;

        let messages = history.get_messages_async().await;
        assert_eq!(messages.len(), 1);

        history.clear_async().await;
        assert!(history.messages().is_empty());
    }
}
