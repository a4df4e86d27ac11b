//! Conversation state for the chat workflow.

use serde::{Deserialize, Serialize};

use chatflow_core::messages::{Message, UserMessage};
use chatflow_graph::MessagesState;

/// The state threaded through the workflow graph.
///
/// Holds the ordered transcript, oldest message first. Within one invocation
/// the transcript only ever grows; a node produces a new state rather than
/// editing records in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    /// The conversation transcript.
    pub messages: Vec<Message>,
}

impl ChatState {
    /// Create an empty conversation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state from an existing transcript.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Create a state seeded with a single user message.
    pub fn with_user_message(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::User(UserMessage::new(content))],
        }
    }
}

impl MessagesState for ChatState {
    type Message = Message;

    fn messages(&self) -> &Vec<Message> {
        &self.messages
    }

    fn messages_mut(&mut self) -> &mut Vec<Message> {
        &mut self.messages
    }
}
