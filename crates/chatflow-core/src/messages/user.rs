//! User message type.
//!
//! This module contains the `UserMessage` type which represents messages
//! authored by the end user of the conversation.

use serde::{Deserialize, Serialize};

/// A user message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserMessage {
    /// The message text.
    content: String,
    /// Optional unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Optional name for the message author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl UserMessage {
    /// Create a new user message.
    ///
    /// No identifier is assigned; use [`UserMessage::with_id`] when the
    /// message must participate in id-based merging.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            id: None,
            name: None,
        }
    }

    /// Create a new user message with an explicit ID.
    ///
    /// Use this when reconstructing messages where the ID must be preserved.
    pub fn with_id(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            id: Some(id.into()),
            name: None,
        }
    }

    /// Set the name for this message.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the message ID.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Get the message name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
